//! Text region detection with the Stroke Width Transform.
//!
//! [`TextDetector`] takes an edge mask and gradient field (or a decoded image,
//! via `swt-preprocess`) to ordered, classified glyph boxes.
//!
//! # Example
//!
//! ```ignore
//! use swt_detect::{TextDetector, PreprocessConfig};
//!
//! let image = image::open("page.png")?;
//! let detection = TextDetector::default().detect_image(&image, &PreprocessConfig::default())?;
//! for glyph in detection.accepted() {
//!     println!("{:?} {:?}", glyph.bbox(), glyph.label);
//! }
//! ```

pub mod detection;
pub mod detector;

pub use detection::{Detection, Glyph};
pub use detector::TextDetector;

pub use swt_components::{GlyphClassifier, HeuristicClassifier, WindowSize};
pub use swt_core::{
    BoundingBox, ClassLabel, Connectivity, Polarity, Result, SwtConfig, SwtError, SwtInput,
};
pub use swt_preprocess::PreprocessConfig;

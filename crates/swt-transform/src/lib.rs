//! Stroke Width Transform.
//!
//! For every edge pixel a ray is walked along the local gradient direction
//! until it meets an opposing edge. The distance between the two edges is the
//! stroke width, written into every pixel the ray crossed (keeping the
//! smallest width when rays overlap).
//!
//! # Pipeline
//!
//! 1. **Direction**: gradient + polarity → unit walk direction ([`direction`])
//! 2. **Ray casting**: accepted rays and the min-merged raster ([`engine`])
//! 3. **Refinement**: 3×3 median pass, optional per-ray median clamp ([`refine`])
//!
//! # Example
//!
//! ```ignore
//! use swt_core::{SwtConfig, SwtInput};
//!
//! let input = SwtInput::new(width, height, edges, grad_x, grad_y)?;
//! let mut output = swt_transform::compute(&input, &SwtConfig::default())?;
//! swt_transform::refine(&mut output.raster);
//! ```

pub mod direction;
pub mod engine;
pub mod refine;

#[cfg(test)]
pub(crate) mod testing;

pub use direction::Direction;
pub use engine::{cast_ray, compute, SwtOutput};
pub use refine::{median_filter_3x3, refine, refine_by_rays};

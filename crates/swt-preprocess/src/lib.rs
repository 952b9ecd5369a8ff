//! Edge mask and gradient extraction for the Stroke Width Transform.
//!
//! # Pipeline Overview
//!
//! 1. **Median blur**: 5x5 per colour channel
//! 2. **Grayscale**: luminance weights
//! 3. **Gaussian blur**: 5x5, sigma about 1.4
//! 4. **Otsu**: picks the Canny high threshold
//! 5. **Canny**: non-maximum suppression and hysteresis (low threshold 0)
//! 6. **Sobel**: `Gx`, `Gy` of the blurred plane
//!
//! With [`PreprocessConfig::preprocessed`] set, steps 1 to 4 are skipped: the
//! image is taken as an already smoothed gray plane and the caller supplies
//! the Canny threshold.
//!
//! # Example
//!
//! ```ignore
//! use swt_preprocess::{preprocess, PreprocessConfig};
//!
//! let image = image::open("page.png")?;
//! let input = preprocess(&image, &PreprocessConfig::default())?;
//! ```

pub mod canny;
pub mod filter;

use image::{DynamicImage, GrayImage};
use imageproc::contrast::otsu_level;
use swt_core::{Result, SwtError, SwtInput};
use tracing::{debug, instrument};

pub use canny::canny_edges;
pub use filter::{denoise, gaussian_blur, sobel_gradients, to_grayscale};

/// Hysteresis low threshold used by every mode.
pub const CANNY_LOW: f32 = 0.0;

/// Options for turning an image into an [`SwtInput`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PreprocessConfig {
    /// The image is already a smoothed gray plane.
    pub preprocessed: bool,
    /// Canny high threshold. Required when `preprocessed`; otherwise
    /// overrides Otsu when set.
    pub canny_high: Option<f32>,
    /// Odd median kernel size applied to colour input.
    pub median_kernel: u32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            preprocessed: false,
            canny_high: None,
            median_kernel: 5,
        }
    }
}

impl PreprocessConfig {
    /// Gray input the caller has already smoothed.
    pub fn preprocessed(canny_high: f32) -> Self {
        Self {
            preprocessed: true,
            canny_high: Some(canny_high),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.median_kernel == 0 || self.median_kernel % 2 == 0 {
            return Err(SwtError::config(format!(
                "median kernel must be odd, got {}",
                self.median_kernel
            )));
        }
        match self.canny_high {
            Some(high) if !high.is_finite() || high < CANNY_LOW => Err(SwtError::config(format!(
                "canny high threshold must be finite and non-negative, got {}",
                high
            ))),
            None if self.preprocessed => Err(SwtError::config(
                "preprocessed input needs an explicit canny high threshold",
            )),
            _ => Ok(()),
        }
    }
}

/// Run the full pipeline on a decoded image.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn preprocess(image: &DynamicImage, config: &PreprocessConfig) -> Result<SwtInput> {
    config.validate()?;
    ensure_non_empty(image.width(), image.height())?;

    if config.preprocessed {
        return preprocess_gray(&image.to_luma8(), config);
    }

    let denoised = denoise(&image.to_rgb8(), config.median_kernel);
    let blurred = gaussian_blur(&to_grayscale(&denoised));
    let high = config
        .canny_high
        .unwrap_or_else(|| f32::from(otsu_level(&blurred)));
    debug!(high, "canny threshold");

    edges_and_gradients(&blurred, high)
}

/// Run the pipeline on a gray plane.
///
/// In preprocessed mode the plane is used as is; otherwise it is blurred and
/// thresholded with Otsu like the colour path, minus the median step.
pub fn preprocess_gray(image: &GrayImage, config: &PreprocessConfig) -> Result<SwtInput> {
    config.validate()?;
    ensure_non_empty(image.width(), image.height())?;

    match (config.preprocessed, config.canny_high) {
        (true, Some(high)) => edges_and_gradients(image, high),
        (_, high) => {
            let blurred = gaussian_blur(image);
            let high = high.unwrap_or_else(|| f32::from(otsu_level(&blurred)));
            edges_and_gradients(&blurred, high)
        }
    }
}

fn edges_and_gradients(plane: &GrayImage, high: f32) -> Result<SwtInput> {
    let (width, height) = plane.dimensions();
    let (grad_x, grad_y) = sobel_gradients(plane);
    let edges = canny_edges(&grad_x, &grad_y, width, height, CANNY_LOW, high);
    debug!(
        edge_pixels = edges.iter().filter(|&&e| e).count(),
        "edges extracted"
    );
    SwtInput::new(width, height, edges, grad_x, grad_y)
}

fn ensure_non_empty(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(SwtError::Image(format!(
            "image has no pixels ({}x{})",
            width, height
        )));
    }
    Ok(())
}

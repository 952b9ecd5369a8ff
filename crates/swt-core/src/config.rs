//! Run configuration for the SWT pipeline.

use crate::errors::{Result, SwtError};
use crate::types::Polarity;

/// Walks longer than this fraction of `min(width, height)` are abandoned when
/// `optimize_speed` is set.
pub const DEFAULT_MAX_LENGTH_RATIO: f32 = 0.15;

/// Neighbouring widths may differ by at most this factor to be connected.
pub const DEFAULT_RATIO_THRESHOLD: f32 = 3.0;

/// Origin and terminus directions must be further apart than this (radians).
pub const DEFAULT_MIN_ANGLE: f32 = std::f32::consts::FRAC_PI_6;

/// Smallest accepted walk step, in pixels.
pub const MIN_STEP_SIZE: f32 = 1e-3;

/// How component connectivity is discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Raster neighbours (left, up-left, up, up-right).
    #[default]
    Pixel,
    /// Consecutive points along each accepted ray.
    Ray,
}

/// Configuration for one SWT run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwtConfig {
    /// Text polarity; selects the walk direction.
    pub polarity: Polarity,

    /// Abandon walks longer than `max_length_ratio * min(width, height)`.
    pub optimize_speed: bool,

    /// Clamp each ray's cells to the ray's median width after the raster pass.
    pub median_rays: bool,

    /// Distance advanced per walk step, in pixels.
    pub step_size: f32,

    pub max_length_ratio: f32,

    /// Maximum `max(a, b) / min(a, b)` for two widths to be connected.
    pub ratio_threshold: f32,

    /// Minimum angle between origin and terminus directions, in radians.
    pub min_angle: f32,

    pub connectivity: Connectivity,
}

impl Default for SwtConfig {
    fn default() -> Self {
        Self {
            polarity: Polarity::DarkOnLight,
            optimize_speed: true,
            median_rays: false,
            step_size: 1.0,
            max_length_ratio: DEFAULT_MAX_LENGTH_RATIO,
            ratio_threshold: DEFAULT_RATIO_THRESHOLD,
            min_angle: DEFAULT_MIN_ANGLE,
            connectivity: Connectivity::Pixel,
        }
    }
}

impl SwtConfig {
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn with_optimize_speed(mut self, enabled: bool) -> Self {
        self.optimize_speed = enabled;
        self
    }

    pub fn with_median_rays(mut self, enabled: bool) -> Self {
        self.median_rays = enabled;
        self
    }

    pub fn with_step_size(mut self, step_size: f32) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Whether the engine must hand accepted rays downstream.
    pub fn needs_rays(&self) -> bool {
        self.median_rays || self.connectivity == Connectivity::Ray
    }

    /// Longest walk allowed for an image of the given size, if bounded.
    pub fn max_walk_length(&self, width: u32, height: u32) -> Option<f32> {
        self.optimize_speed
            .then(|| width.min(height) as f32 * self.max_length_ratio)
    }

    /// Reject out-of-range values before any work starts.
    pub fn validate(&self) -> Result<()> {
        if !self.step_size.is_finite() || self.step_size < MIN_STEP_SIZE {
            return Err(SwtError::config(format!(
                "step size must be at least {MIN_STEP_SIZE}, got {}",
                self.step_size
            )));
        }
        if !self.max_length_ratio.is_finite() || self.max_length_ratio <= 0.0 {
            return Err(SwtError::config(format!(
                "max length ratio must be positive, got {}",
                self.max_length_ratio
            )));
        }
        if !self.ratio_threshold.is_finite() || self.ratio_threshold < 1.0 {
            return Err(SwtError::config(format!(
                "ratio threshold must be at least 1, got {}",
                self.ratio_threshold
            )));
        }
        if !(0.0..=std::f32::consts::PI).contains(&self.min_angle) {
            return Err(SwtError::config(format!(
                "minimum angle must lie in [0, pi], got {}",
                self.min_angle
            )));
        }
        Ok(())
    }
}

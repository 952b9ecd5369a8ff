//! Dense per-pixel stroke-width raster.

use crate::errors::{Result, SwtError};

/// Value of a cell that has not received a stroke-width estimate.
pub const NO_STROKE: f32 = -1.0;

/// Value of a cell suppressed by median refinement.
pub const SUPPRESSED: f32 = 0.0;

/// Row-major stroke-width raster.
///
/// Cells hold [`NO_STROKE`], [`SUPPRESSED`], or a positive width.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeWidthRaster {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl StrokeWidthRaster {
    /// Raster with every cell set to [`NO_STROKE`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![NO_STROKE; width as usize * height as usize],
        }
    }

    /// Wrap existing row-major values.
    pub fn from_values(width: u32, height: u32, values: Vec<f32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(SwtError::invalid_input(format!(
                "raster has {} cells, expected {}x{}={}",
                values.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self { width, height, values })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at (x, y). Out-of-range coordinates read as [`NO_STROKE`].
    pub fn get(&self, x: u32, y: u32) -> f32 {
        if x < self.width && y < self.height {
            self.values[y as usize * self.width as usize + x as usize]
        } else {
            NO_STROKE
        }
    }

    #[inline]
    pub fn at(&self, index: usize) -> f32 {
        self.values[index]
    }

    #[inline]
    pub fn set(&mut self, index: usize, value: f32) {
        self.values[index] = value;
    }

    /// Merge a candidate width into a cell, keeping the smaller positive value.
    ///
    /// Non-positive candidates are ignored so an estimate is never replaced by
    /// a sentinel.
    #[inline]
    pub fn merge_min(&mut self, index: usize, candidate: f32) {
        if candidate <= 0.0 {
            return;
        }
        let current = self.values[index];
        self.values[index] = if current > 0.0 { current.min(candidate) } else { candidate };
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    /// Number of cells holding a positive width.
    pub fn estimated_count(&self) -> usize {
        self.values.iter().filter(|&&v| v > 0.0).count()
    }

    /// Row and column of a flattened index.
    #[inline]
    pub fn coords(&self, index: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((index / w) as u32, (index % w) as u32)
    }

    /// Map the raster into `[0, 1]` for display.
    ///
    /// Negative cells map to `1.0`; all others scale linearly between the
    /// raster's global minimum and maximum. A flat raster maps to `0.0`.
    pub fn normalized(&self) -> Vec<f32> {
        let (min, max) = self
            .values
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let range = max - min;

        self.values
            .iter()
            .map(|&v| {
                if v < 0.0 {
                    1.0
                } else if range > 0.0 {
                    (v - min) / range
                } else {
                    0.0
                }
            })
            .collect()
    }
}

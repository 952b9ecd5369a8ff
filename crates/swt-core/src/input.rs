//! Validated edge mask and gradient fields.

use crate::errors::{Result, SwtError};

/// Edge mask plus x/y gradient fields for one image, all row-major and of
/// identical shape.
///
/// Gradients follow the Sobel convention: they point toward brighter pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SwtInput {
    width: u32,
    height: u32,
    edges: Vec<bool>,
    grad_x: Vec<f32>,
    grad_y: Vec<f32>,
}

impl SwtInput {
    /// Build an input, failing fast on empty or mismatched arrays.
    pub fn new(
        width: u32,
        height: u32,
        edges: Vec<bool>,
        grad_x: Vec<f32>,
        grad_y: Vec<f32>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SwtError::invalid_input(format!(
                "image dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }

        // Pixel ids downstream are u32.
        let cells = u64::from(width) * u64::from(height);
        if cells > u64::from(u32::MAX) {
            return Err(SwtError::invalid_input(format!(
                "{}x{} has {} cells, more than {} are not supported",
                width,
                height,
                cells,
                u32::MAX
            )));
        }

        let expected = width as usize * height as usize;
        for (name, len) in [
            ("edge mask", edges.len()),
            ("gradient x", grad_x.len()),
            ("gradient y", grad_y.len()),
        ] {
            if len != expected {
                return Err(SwtError::invalid_input(format!(
                    "{} has {} cells, expected {}x{}={}",
                    name, len, width, height, expected
                )));
            }
        }

        Ok(Self { width, height, edges, grad_x, grad_y })
    }

    /// Build an input from nested rows (`[row][col]`).
    pub fn from_rows(edges: &[Vec<bool>], grad_x: &[Vec<f32>], grad_y: &[Vec<f32>]) -> Result<Self> {
        let height = edges.len();
        let width = edges.first().map_or(0, Vec::len);

        if grad_x.len() != height || grad_y.len() != height {
            return Err(SwtError::invalid_input(format!(
                "gradient fields have {} and {} rows, edge mask has {}",
                grad_x.len(),
                grad_y.len(),
                height
            )));
        }

        let mut rows = edges
            .iter()
            .map(Vec::len)
            .chain(grad_x.iter().map(Vec::len))
            .chain(grad_y.iter().map(Vec::len));
        if let Some(bad) = rows.find(|&len| len != width) {
            return Err(SwtError::invalid_input(format!(
                "ragged rows: found a row of {} cells, expected {}",
                bad, width
            )));
        }

        Self::new(
            width as u32,
            height as u32,
            edges.concat(),
            grad_x.concat(),
            grad_y.concat(),
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_edge(&self, x: u32, y: u32) -> bool {
        self.edges[self.index(x, y)]
    }

    /// Gradient `(gx, gy)` at (x, y).
    #[inline]
    pub fn gradient(&self, x: u32, y: u32) -> (f32, f32) {
        let idx = self.index(x, y);
        (self.grad_x[idx], self.grad_y[idx])
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn edges(&self) -> &[bool] {
        &self.edges
    }

    pub fn grad_x(&self) -> &[f32] {
        &self.grad_x
    }

    pub fn grad_y(&self) -> &[f32] {
        &self.grad_y
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|&&e| e).count()
    }
}

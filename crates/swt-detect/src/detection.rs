//! Detection results.

use swt_components::{split_wide, ComponentStats, Component, HasBounds, WindowSize};
use swt_core::{BoundingBox, ClassLabel, Ray, Result, StrokeWidthRaster};

/// One classified component.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    pub stats: ComponentStats,
    pub label: ClassLabel,
    /// Position of the source component in [`Detection::components`].
    pub component: usize,
}

impl Glyph {
    pub fn bbox(&self) -> &BoundingBox {
        &self.stats.bbox
    }

    pub fn is_accepted(&self) -> bool {
        self.label.is_accepted()
    }
}

impl HasBounds for Glyph {
    fn bounds(&self) -> &BoundingBox {
        &self.stats.bbox
    }
}

/// Everything one detection run produced.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Refined stroke widths.
    pub raster: StrokeWidthRaster,
    /// Accepted rays; empty unless the config needed them.
    pub rays: Vec<Ray>,
    /// Components in order of their smallest pixel index.
    pub components: Vec<Component>,
    /// One glyph per component, left to right.
    pub glyphs: Vec<Glyph>,
}

impl Detection {
    /// Glyphs not labelled [`ClassLabel::Reject`], left to right.
    pub fn accepted(&self) -> impl Iterator<Item = &Glyph> + '_ {
        self.glyphs.iter().filter(|g| g.is_accepted())
    }

    /// `(box, label)` pairs in reading order.
    pub fn boxes(&self) -> Vec<(BoundingBox, ClassLabel)> {
        self.glyphs.iter().map(|g| (g.stats.bbox, g.label)).collect()
    }

    /// Recognizer windows in reading order: each `Single` box whole, each
    /// `Wide` box split into per-glyph pieces.
    pub fn windows(&self, window: WindowSize) -> Result<Vec<BoundingBox>> {
        let mut windows = Vec::new();
        for glyph in self.accepted() {
            match glyph.label {
                ClassLabel::Wide => windows.extend(split_wide(glyph.bbox(), window)?),
                _ => windows.push(glyph.stats.bbox),
            }
        }
        Ok(windows)
    }
}

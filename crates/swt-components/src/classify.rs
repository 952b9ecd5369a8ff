//! Glyph classification.
//!
//! The default [`HeuristicClassifier`] looks only at bounding-box dimensions.
//! Any other model can be plugged in through [`GlyphClassifier`], including a
//! plain closure over [`ComponentStats`].

use swt_core::{BoundingBox, ClassLabel};

use crate::stats::ComponentStats;

/// Decides the [`ClassLabel`] of a component.
pub trait GlyphClassifier: Send + Sync {
    fn classify(&self, stats: &ComponentStats) -> ClassLabel;
}

impl<F> GlyphClassifier for F
where
    F: Fn(&ComponentStats) -> ClassLabel + Send + Sync,
{
    fn classify(&self, stats: &ComponentStats) -> ClassLabel {
        self(stats)
    }
}

/// Flat feature record for statistical models.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphFeatures {
    pub mean: f32,
    pub variance: f32,
    pub pixel_count: usize,
    pub width: u32,
    pub height: u32,
}

impl From<&ComponentStats> for GlyphFeatures {
    fn from(stats: &ComponentStats) -> Self {
        Self {
            mean: stats.mean_stroke_width,
            variance: stats.variance_stroke_width,
            pixel_count: stats.pixel_count,
            width: stats.bbox.width(),
            height: stats.bbox.height(),
        }
    }
}

/// Size and aspect-ratio rules.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeuristicClassifier {
    /// Boxes shorter than this are rejected.
    pub min_height: u32,
    /// Boxes narrower than this are rejected.
    pub min_width: u32,
    /// `width / height` at or above this marks several merged glyphs.
    pub wide_ratio: f32,
}

impl Default for HeuristicClassifier {
    fn default() -> Self {
        Self {
            min_height: 10,
            min_width: 5,
            wide_ratio: 1.5,
        }
    }
}

impl HeuristicClassifier {
    pub fn classify_box(&self, bbox: &BoundingBox) -> ClassLabel {
        let h = bbox.height();
        let w = bbox.width();

        if h < self.min_height || w < self.min_width {
            ClassLabel::Reject
        } else if w as f32 / h as f32 >= self.wide_ratio {
            ClassLabel::Wide
        } else {
            ClassLabel::Single
        }
    }
}

impl GlyphClassifier for HeuristicClassifier {
    fn classify(&self, stats: &ComponentStats) -> ClassLabel {
        self.classify_box(&stats.bbox)
    }
}

/// Classify a box with the default heuristic.
pub fn classify(bbox: &BoundingBox) -> ClassLabel {
    HeuristicClassifier::default().classify_box(bbox)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(bbox: BoundingBox) -> ComponentStats {
        ComponentStats {
            bbox,
            mean_stroke_width: 4.0,
            variance_stroke_width: 0.5,
            pixel_count: 40,
        }
    }

    #[test]
    fn test_reject_small() {
        assert_eq!(classify(&BoundingBox::new(0, 0, 20, 9)), ClassLabel::Reject);
        assert_eq!(classify(&BoundingBox::new(0, 0, 4, 30)), ClassLabel::Reject);
        assert_eq!(classify(&BoundingBox::from_point(3, 3)), ClassLabel::Reject);
    }

    #[test]
    fn test_single() {
        // h = 11, w = 5
        assert_eq!(classify(&BoundingBox::new(5, 4, 10, 15)), ClassLabel::Single);
        // w / h just under 1.5
        assert_eq!(classify(&BoundingBox::new(0, 0, 14, 10)), ClassLabel::Single);
    }

    #[test]
    fn test_wide() {
        assert_eq!(classify(&BoundingBox::new(0, 0, 15, 10)), ClassLabel::Wide);
        assert_eq!(classify(&BoundingBox::new(10, 5, 40, 15)), ClassLabel::Wide);
    }

    #[test]
    fn test_custom_thresholds() {
        let lenient = HeuristicClassifier {
            min_height: 2,
            min_width: 2,
            wide_ratio: 3.0,
        };
        assert_eq!(lenient.classify_box(&BoundingBox::new(0, 0, 4, 3)), ClassLabel::Single);
        assert_eq!(lenient.classify_box(&BoundingBox::new(0, 0, 9, 3)), ClassLabel::Wide);
    }

    #[test]
    fn test_trait_object_and_closure() {
        let by_variance = |s: &ComponentStats| {
            if GlyphFeatures::from(s).variance > 1.0 {
                ClassLabel::Reject
            } else {
                ClassLabel::Single
            }
        };
        let classifiers: Vec<Box<dyn GlyphClassifier>> =
            vec![Box::new(HeuristicClassifier::default()), Box::new(by_variance)];

        let s = stats(BoundingBox::new(0, 0, 30, 10));
        assert_eq!(classifiers[0].classify(&s), ClassLabel::Wide);
        assert_eq!(classifiers[1].classify(&s), ClassLabel::Single);
    }

    #[test]
    fn test_features() {
        let features = GlyphFeatures::from(&stats(BoundingBox::new(2, 3, 12, 23)));
        assert_eq!(features.width, 10);
        assert_eq!(features.height, 20);
        assert_eq!(features.pixel_count, 40);
    }
}

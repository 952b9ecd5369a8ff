//! The end-to-end detector.

use std::fmt;

use image::DynamicImage;
use swt_components::{
    build_pixel_graph, build_ray_graph, compute_stats, order_by_centroid, GlyphClassifier,
    HeuristicClassifier,
};
use swt_core::{Connectivity, Result, SwtConfig, SwtInput};
use swt_preprocess::PreprocessConfig;
use swt_transform::SwtOutput;
use tracing::{debug, instrument};

use crate::detection::{Detection, Glyph};

/// Runs ray casting, refinement, grouping, and classification.
pub struct TextDetector {
    config: SwtConfig,
    classifier: Box<dyn GlyphClassifier>,
}

impl Default for TextDetector {
    fn default() -> Self {
        Self {
            config: SwtConfig::default(),
            classifier: Box::new(HeuristicClassifier::default()),
        }
    }
}

impl fmt::Debug for TextDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextDetector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TextDetector {
    /// Detector with the heuristic classifier. Fails on an invalid config.
    pub fn new(config: SwtConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Replace the classifier.
    pub fn with_classifier(mut self, classifier: impl GlyphClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    pub fn config(&self) -> &SwtConfig {
        &self.config
    }

    #[instrument(skip_all, fields(width = input.width(), height = input.height()))]
    pub fn detect(&self, input: &SwtInput) -> Result<Detection> {
        let SwtOutput { mut raster, rays } = swt_transform::compute(input, &self.config)?;

        swt_transform::refine(&mut raster);
        if self.config.median_rays {
            swt_transform::refine_by_rays(&mut raster, &rays);
        }

        let threshold = self.config.ratio_threshold;
        let (graph, rows) = match self.config.connectivity {
            Connectivity::Pixel => build_pixel_graph(&raster, threshold),
            Connectivity::Ray => build_ray_graph(&raster, &rays, threshold),
        };
        let components = graph.components();

        let mut glyphs = components
            .iter()
            .enumerate()
            .map(|(component, members)| {
                let stats = compute_stats(&raster, &rows, members)?;
                let label = self.classifier.classify(&stats);
                Ok(Glyph {
                    stats,
                    label,
                    component,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        order_by_centroid(&mut glyphs);

        debug!(
            components = components.len(),
            accepted = glyphs.iter().filter(|g| g.is_accepted()).count(),
            "detection complete"
        );

        Ok(Detection {
            raster,
            rays,
            components,
            glyphs,
        })
    }

    /// Preprocess a decoded image, then [`detect`](Self::detect).
    pub fn detect_image(&self, image: &DynamicImage, preprocess: &PreprocessConfig) -> Result<Detection> {
        let input = swt_preprocess::preprocess(image, preprocess)?;
        self.detect(&input)
    }
}

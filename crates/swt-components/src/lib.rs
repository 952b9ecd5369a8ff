//! Glyph candidates from a stroke-width raster.
//!
//! Pixels whose widths are locally consistent are joined into connected
//! components; each component is summarised, classified, and ordered for
//! reading.
//!
//! 1. **Graph**: ratio-gated adjacency + union-find ([`graph`])
//! 2. **Statistics**: bounding box, mean, variance ([`stats`])
//! 3. **Classification**: pluggable, heuristic by default ([`classify`])
//! 4. **Ordering**: left-to-right by centroid ([`order`])
//! 5. **Windowing**: split wide boxes for a recognizer ([`window`])

pub mod classify;
pub mod graph;
pub mod order;
pub mod stats;
pub mod window;

pub use classify::{classify, GlyphClassifier, GlyphFeatures, HeuristicClassifier};
pub use graph::{
    build_pixel_graph, build_ray_graph, ratio_test, AdjacencyGraph, Component, RowIndex,
};
pub use order::{order, order_by_centroid, HasBounds};
pub use stats::{compute_stats, ComponentStats};
pub use window::{split_plan, split_wide, sub_windows, SplitPlan, WindowSize};

//! Left-to-right reading order.

use swt_core::BoundingBox;

use crate::stats::ComponentStats;

/// Anything that occupies a bounding box.
pub trait HasBounds {
    fn bounds(&self) -> &BoundingBox;
}

impl HasBounds for BoundingBox {
    fn bounds(&self) -> &BoundingBox {
        self
    }
}

impl HasBounds for ComponentStats {
    fn bounds(&self) -> &BoundingBox {
        &self.bbox
    }
}

/// Sort in place by horizontal centroid. Ties keep their input order.
pub fn order_by_centroid<T: HasBounds>(items: &mut [T]) {
    items.sort_by_key(|item| item.bounds().centroid_x2());
}

/// Boxes sorted by horizontal centroid.
pub fn order(boxes: &[BoundingBox]) -> Vec<BoundingBox> {
    let mut ordered = boxes.to_vec();
    order_by_centroid(&mut ordered);
    ordered
}

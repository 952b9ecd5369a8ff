//! Per-component bounding box and stroke-width statistics.

use swt_core::{BoundingBox, Result, StrokeWidthRaster, SwtError};

use crate::graph::{Component, RowIndex};

/// Summary of one component.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentStats {
    pub bbox: BoundingBox,
    pub mean_stroke_width: f32,
    /// Population variance of the member widths.
    pub variance_stroke_width: f32,
    /// Always at least 1.
    pub pixel_count: usize,
}

/// Bounding box, mean, and variance of a component's widths.
pub fn compute_stats(
    raster: &StrokeWidthRaster,
    rows: &RowIndex,
    component: &Component,
) -> Result<ComponentStats> {
    let mut members = component.members().iter();
    let Some(&first) = members.next() else {
        return Err(SwtError::invalid_input("component has no members"));
    };

    let locate = |index: u32| {
        rows.coords(index).ok_or_else(|| {
            SwtError::invalid_input(format!("pixel {} is missing from the row index", index))
        })
    };

    let (row, col) = locate(first)?;
    let mut bbox = BoundingBox::from_point(col, row);
    let mut sum = raster.at(first as usize) as f64;

    for &index in members {
        let (row, col) = locate(index)?;
        bbox.expand_to(col, row);
        sum += raster.at(index as usize) as f64;
    }

    let count = component.len();
    let mean = sum / count as f64;
    let variance = component
        .members()
        .iter()
        .map(|&index| {
            let d = raster.at(index as usize) as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / count as f64;

    Ok(ComponentStats {
        bbox,
        mean_stroke_width: mean as f32,
        variance_stroke_width: variance as f32,
        pixel_count: count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_pixel_graph;

    #[test]
    fn test_stats_of_block() {
        #[rustfmt::skip]
        let values = vec![
            -1.0, -1.0, -1.0, -1.0,
            -1.0,  2.0,  4.0, -1.0,
            -1.0,  2.0,  4.0, -1.0,
        ];
        let raster = StrokeWidthRaster::from_values(4, 3, values).unwrap();
        let (graph, rows) = build_pixel_graph(&raster, 3.0);
        let components = graph.components();
        assert_eq!(components.len(), 1);

        let stats = compute_stats(&raster, &rows, &components[0]).unwrap();
        assert_eq!(stats.bbox, BoundingBox::new(1, 1, 2, 2));
        assert_eq!(stats.pixel_count, 4);
        assert!((stats.mean_stroke_width - 3.0).abs() < 1e-6);
        assert!((stats.variance_stroke_width - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_members_inside_bbox() {
        #[rustfmt::skip]
        let values = vec![
            -1.0, -1.0, -1.0,  3.0, -1.0,
            -1.0, -1.0,  3.0, -1.0, -1.0,
            -1.0,  3.0,  3.0,  3.0,  3.0,
        ];
        let raster = StrokeWidthRaster::from_values(5, 3, values).unwrap();
        let (graph, rows) = build_pixel_graph(&raster, 3.0);

        for component in graph.components() {
            let stats = compute_stats(&raster, &rows, &component).unwrap();
            assert!(stats.bbox.minx <= stats.bbox.maxx);
            assert!(stats.bbox.miny <= stats.bbox.maxy);
            assert_eq!(stats.variance_stroke_width, 0.0);
            for &m in component.members() {
                let (row, col) = rows.coords(m).unwrap();
                assert!(stats.bbox.contains(col, row));
            }
        }
    }

    #[test]
    fn test_empty_component_rejected() {
        let raster = StrokeWidthRaster::new(2, 2);
        let rows = RowIndex::new(2, 2);
        let err = compute_stats(&raster, &rows, &Component::new(vec![])).unwrap_err();
        assert!(matches!(err, SwtError::InvalidInput { .. }));
    }

    #[test]
    fn test_unindexed_member_rejected() {
        let raster = StrokeWidthRaster::from_values(2, 2, vec![1.0; 4]).unwrap();
        let rows = RowIndex::new(2, 2);
        assert!(compute_stats(&raster, &rows, &Component::new(vec![3])).is_err());
    }
}

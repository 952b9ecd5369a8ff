//! Median refinement of the stroke-width raster.
//!
//! Two passes:
//! 1. **Raster pass**: a 3×3 median fills small unestimated gaps and
//!    suppresses isolated estimates.
//! 2. **Ray pass** (optional): every ray's cells are clamped to the ray's
//!    median width, pulling down widths inflated at corners and serifs.

use rayon::prelude::*;
use swt_core::{Ray, StrokeWidthRaster, SUPPRESSED};
use tracing::{debug, instrument};

/// 3×3 median of every cell. Borders replicate the nearest cell.
pub fn median_filter_3x3(raster: &StrokeWidthRaster) -> Vec<f32> {
    let w = raster.width() as usize;
    let h = raster.height() as usize;
    let values = raster.values();
    let mut output = vec![0.0f32; values.len()];

    if w == 0 || h == 0 {
        return output;
    }

    output.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        let mut window = [0.0f32; 9];
        for (x, out) in row.iter_mut().enumerate() {
            let mut k = 0;
            for dy in -1i64..=1 {
                let ny = (y as i64 + dy).clamp(0, h as i64 - 1) as usize;
                for dx in -1i64..=1 {
                    let nx = (x as i64 + dx).clamp(0, w as i64 - 1) as usize;
                    window[k] = values[ny * w + nx];
                    k += 1;
                }
            }
            let (_, median, _) = window.select_nth_unstable_by(4, f32::total_cmp);
            *out = *median;
        }
    });

    output
}

/// Raster pass: adopt the median where no estimate exists, suppress cells
/// whose neighbourhood is mostly unestimated.
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn refine(raster: &mut StrokeWidthRaster) {
    let filtered = median_filter_3x3(raster);

    raster
        .values_mut()
        .par_iter_mut()
        .zip(filtered.par_iter())
        .for_each(|(value, &median)| {
            if median > 0.0 && *value <= 0.0 {
                *value = median;
            } else if median < 0.0 {
                *value = SUPPRESSED;
            }
        });

    debug!(estimated = raster.estimated_count(), "median raster pass complete");
}

/// Ray pass: clamp each ray's positive cells to the ray's median width.
///
/// Medians are all read before any clamp is written, so the result does not
/// depend on ray order. Values only ever decrease.
#[instrument(skip_all, fields(rays = rays.len()))]
pub fn refine_by_rays(raster: &mut StrokeWidthRaster, rays: &[Ray]) {
    let width = raster.width();

    let medians: Vec<Option<f32>> = {
        let snapshot = &*raster;
        rays.par_iter()
            .map(|ray| ray_median(snapshot, ray))
            .collect()
    };

    let mut clamped = 0usize;
    for (ray, median) in rays.iter().zip(medians) {
        let Some(median) = median else { continue };
        for point in &ray.points {
            let idx = point.index(width);
            let current = raster.at(idx);
            if current > median {
                raster.set(idx, median);
                clamped += 1;
            }
        }
    }

    debug!(clamped, "median ray pass complete");
}

/// Upper median of the positive widths along a ray.
fn ray_median(raster: &StrokeWidthRaster, ray: &Ray) -> Option<f32> {
    let width = raster.width();
    let mut values: Vec<f32> = ray
        .points
        .iter()
        .map(|p| raster.at(p.index(width)))
        .filter(|&v| v > 0.0)
        .collect();

    if values.is_empty() {
        return None;
    }

    let mid = values.len() / 2;
    let (_, median, _) = values.select_nth_unstable_by(mid, f32::total_cmp);
    Some(*median)
}

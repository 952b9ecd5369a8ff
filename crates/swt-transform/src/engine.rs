//! Ray casting and raster construction.
//!
//! Casting is independent per edge pixel, so rows are cast in parallel. The
//! accepted rays are then reduced into the raster with an atomic minimum:
//! positive `f32` bit patterns order the same way as their values, so a
//! `fetch_min` on the bits is a `min` on the widths.

use std::sync::atomic::{AtomicU32, Ordering};

use rayon::prelude::*;
use swt_core::{Point, Ray, Result, StrokeWidthRaster, SwtConfig, SwtInput, NO_STROKE};
use tracing::{debug, instrument};

use crate::direction::Direction;

/// Bit pattern of a cell no ray has reached. Larger than any finite width.
const UNSET: u32 = u32::MAX;

/// Result of the ray-casting stage.
#[derive(Debug, Clone)]
pub struct SwtOutput {
    /// Min-merged stroke widths; untouched cells hold [`NO_STROKE`].
    pub raster: StrokeWidthRaster,
    /// Accepted rays in row-major origin order. Empty unless the config
    /// asks for them (median ray pass or ray connectivity).
    pub rays: Vec<Ray>,
}

/// Run the Stroke Width Transform over an edge mask and gradient field.
#[instrument(skip_all, fields(width = input.width(), height = input.height()))]
pub fn compute(input: &SwtInput, config: &SwtConfig) -> Result<SwtOutput> {
    config.validate()?;

    let width = input.width();
    let height = input.height();
    let max_len = config.max_walk_length(width, height);

    let rays: Vec<Ray> = (0..height)
        .into_par_iter()
        .flat_map_iter(|y| {
            (0..width).filter_map(move |x| {
                if input.is_edge(x, y) {
                    cast_ray(input, config, max_len, Point::new(x, y))
                } else {
                    None
                }
            })
        })
        .collect();

    let raster = merge_rays(width, height, &rays);

    debug!(
        edges = input.edge_count(),
        rays = rays.len(),
        estimated = raster.estimated_count(),
        "stroke width transform complete"
    );

    let rays = if config.needs_rays() { rays } else { Vec::new() };
    Ok(SwtOutput { raster, rays })
}

/// Walk from one edge pixel toward the opposite wall of its stroke.
///
/// Returns `None` when the origin has no usable gradient, the walk leaves the
/// image, exceeds `max_len`, stalls, or meets an edge whose direction does not
/// oppose the origin's.
pub fn cast_ray(
    input: &SwtInput,
    config: &SwtConfig,
    max_len: Option<f32>,
    origin: Point,
) -> Option<Ray> {
    let (gx, gy) = input.gradient(origin.x, origin.y);
    let dir = Direction::from_gradient(gx, gy, config.polarity)?;

    let width = input.width();
    let height = input.height();

    // Walk from the pixel centre.
    let mut px = origin.x as f32 + 0.5;
    let mut py = origin.y as f32 + 0.5;
    let mut points = vec![origin];
    let mut last = origin;

    // A straight walk covering twice the diagonal has left the image.
    let diagonal = (width as f32).hypot(height as f32);
    let max_steps = (2.0 * diagonal / config.step_size).ceil() as usize + 1;

    for _ in 0..max_steps {
        let (nx, ny) = (px + config.step_size * dir.cos, py + config.step_size * dir.sin);
        if nx == px && ny == py {
            return None;
        }
        px = nx;
        py = ny;

        if px < 0.0 || py < 0.0 {
            return None;
        }
        let (x, y) = (px as u32, py as u32);
        if x >= width || y >= height {
            return None;
        }

        let current = Point::new(x, y);
        if current == last {
            continue;
        }

        if input.is_edge(x, y) {
            let (qx, qy) = input.gradient(x, y);
            let q_dir = Direction::from_gradient(qx, qy, config.polarity)?;
            if !dir.opposes(&q_dir, config.min_angle) {
                return None;
            }

            points.push(current);
            return Some(Ray {
                origin,
                terminus: current,
                points,
                width: origin.distance(&current),
            });
        }

        if let Some(limit) = max_len {
            if origin.distance(&current) > limit {
                return None;
            }
        }

        points.push(current);
        last = current;
    }
    None
}

/// Reduce ray contributions into a raster, keeping the minimum width per cell.
fn merge_rays(width: u32, height: u32, rays: &[Ray]) -> StrokeWidthRaster {
    let cells: Vec<AtomicU32> = (0..width as usize * height as usize)
        .map(|_| AtomicU32::new(UNSET))
        .collect();

    rays.par_iter().for_each(|ray| {
        let bits = ray.width.to_bits();
        for point in &ray.points {
            cells[point.index(width)].fetch_min(bits, Ordering::Relaxed);
        }
    });

    let mut raster = StrokeWidthRaster::new(width, height);
    for (value, cell) in raster.values_mut().iter_mut().zip(cells) {
        let bits = cell.into_inner();
        *value = if bits == UNSET { NO_STROKE } else { f32::from_bits(bits) };
    }
    raster
}

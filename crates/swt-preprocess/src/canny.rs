//! Canny edge extraction from precomputed gradients.

use std::f32::consts::PI;

/// Canny edges from precomputed Sobel gradients.
///
/// A pixel is strong when its thinned magnitude exceeds `high` and weak when
/// it exceeds `low`; weak pixels survive only when 8-connected to a strong one.
pub fn canny_edges(
    grad_x: &[f32],
    grad_y: &[f32],
    width: u32,
    height: u32,
    low: f32,
    high: f32,
) -> Vec<bool> {
    let magnitude: Vec<f32> = grad_x
        .iter()
        .zip(grad_y)
        .map(|(&gx, &gy)| (gx * gx + gy * gy).sqrt())
        .collect();

    let thinned = non_maximum_suppression(&magnitude, grad_x, grad_y, width, height);
    hysteresis_threshold(&thinned, width, height, low, high)
}

/// Keep only magnitudes that peak along their gradient direction.
fn non_maximum_suppression(
    magnitude: &[f32],
    grad_x: &[f32],
    grad_y: &[f32],
    width: u32,
    height: u32,
) -> Vec<f32> {
    let w = width as usize;
    let mut output = vec![0.0f32; magnitude.len()];

    for y in 1..height.saturating_sub(1) as usize {
        for x in 1..width.saturating_sub(1) as usize {
            let idx = y * w + x;
            let mag = magnitude[idx];
            if mag <= 0.0 {
                continue;
            }

            // Quantize to 0, 45, 90, 135 degrees.
            let dir = grad_y[idx].atan2(grad_x[idx]);
            let sector = ((dir + PI) * 4.0 / PI).round() as i32 % 4;

            let (n1, n2) = match sector {
                0 => (magnitude[idx - 1], magnitude[idx + 1]),
                1 => (magnitude[idx - w - 1], magnitude[idx + w + 1]),
                2 => (magnitude[idx - w], magnitude[idx + w]),
                _ => (magnitude[idx - w + 1], magnitude[idx + w - 1]),
            };

            if mag >= n1 && mag >= n2 {
                output[idx] = mag;
            }
        }
    }

    output
}

fn hysteresis_threshold(thinned: &[f32], width: u32, height: u32, low: f32, high: f32) -> Vec<bool> {
    let w = width as i64;
    let h = height as i64;
    let mut output = vec![false; thinned.len()];

    let mut stack: Vec<usize> = thinned
        .iter()
        .enumerate()
        .filter(|(_, &m)| m > high)
        .map(|(i, _)| i)
        .collect();
    for &i in &stack {
        output[i] = true;
    }

    while let Some(idx) = stack.pop() {
        let x = idx as i64 % w;
        let y = idx as i64 / w;

        for dy in -1..=1 {
            for dx in -1..=1 {
                let nx = x + dx;
                let ny = y + dy;
                if (dx == 0 && dy == 0) || nx < 0 || ny < 0 || nx >= w || ny >= h {
                    continue;
                }
                let n = (ny * w + nx) as usize;
                if !output[n] && thinned[n] > low {
                    output[n] = true;
                    stack.push(n);
                }
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::sobel_gradients;
    use image::{GrayImage, Luma};

    #[test]
    fn test_canny_uniform_has_no_edges() {
        let plane = GrayImage::from_pixel(12, 12, Luma([90]));
        let (gx, gy) = sobel_gradients(&plane);
        let edges = canny_edges(&gx, &gy, 12, 12, 0.0, 50.0);
        assert!(edges.iter().all(|&e| !e));
    }

    #[test]
    fn test_canny_vertical_step() {
        let plane = GrayImage::from_fn(20, 20, |x, _| Luma([if x < 10 { 0 } else { 255 }]));
        let (gx, gy) = sobel_gradients(&plane);
        let edges = canny_edges(&gx, &gy, 20, 20, 0.0, 100.0);

        let columns: Vec<usize> = edges
            .iter()
            .enumerate()
            .filter(|(_, &e)| e)
            .map(|(i, _)| i % 20)
            .collect();
        assert!(!columns.is_empty());
        assert!(columns.iter().all(|&x| x == 9 || x == 10));
    }

    #[test]
    fn test_weak_edges_need_a_strong_neighbour() {
        // A lone weak peak and a lone strong peak, far apart.
        let (w, h) = (9u32, 5u32);
        let mut gx = vec![0.0f32; 45];
        let gy = vec![0.0f32; 45];
        gx[2 * 9 + 2] = 30.0;
        gx[2 * 9 + 6] = 300.0;

        let edges = canny_edges(&gx, &gy, w, h, 10.0, 100.0);
        assert!(!edges[2 * 9 + 2]);
        assert!(edges[2 * 9 + 6]);
    }
}

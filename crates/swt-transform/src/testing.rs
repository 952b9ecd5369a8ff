//! Synthetic inputs shared by the unit tests.

use swt_core::{SwtConfig, SwtInput};

/// Dark solid bar (inclusive corners) on a white background, with Sobel
/// gradients and the bar's outline as the edge mask.
pub(crate) fn bar_input(width: u32, height: u32, minx: u32, miny: u32, maxx: u32, maxy: u32) -> SwtInput {
    let inside = |x: i64, y: i64| {
        x >= minx as i64 && x <= maxx as i64 && y >= miny as i64 && y <= maxy as i64
    };
    let gray = |x: i64, y: i64| if inside(x, y) { 0.0f32 } else { 255.0 };

    let n = (width * height) as usize;
    let mut edges = vec![false; n];
    let mut grad_x = vec![0.0f32; n];
    let mut grad_y = vec![0.0f32; n];

    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let idx = (y * width as i64 + x) as usize;

            if inside(x, y) {
                edges[idx] = [(-1, 0), (1, 0), (0, -1), (0, 1)]
                    .iter()
                    .any(|&(dx, dy)| !inside(x + dx, y + dy));
            }

            if x == 0 || y == 0 || x == width as i64 - 1 || y == height as i64 - 1 {
                continue;
            }
            let p = |dx: i64, dy: i64| gray(x + dx, y + dy);
            grad_x[idx] = -p(-1, -1) + p(1, -1) - 2.0 * p(-1, 0) + 2.0 * p(1, 0) - p(-1, 1) + p(1, 1);
            grad_y[idx] = -p(-1, -1) - 2.0 * p(0, -1) - p(1, -1) + p(-1, 1) + 2.0 * p(0, 1) + p(1, 1);
        }
    }

    match SwtInput::new(width, height, edges, grad_x, grad_y) {
        Ok(input) => input,
        Err(err) => panic!("fixture produced invalid input: {err}"),
    }
}

/// Default config without the walk-length heuristic, which is too tight for
/// the small fixtures.
pub(crate) fn config_unbounded() -> SwtConfig {
    SwtConfig::default().with_optimize_speed(false)
}

//! Stroke Width Transform benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swt_core::{SwtConfig, SwtInput};

/// Rows of dark 4px-wide vertical strokes on a light page, outlined as edges
/// with horizontal gradients.
fn striped_input(width: u32, height: u32) -> SwtInput {
    let n = (width * height) as usize;
    let mut edges = vec![false; n];
    let mut grad_x = vec![0.0f32; n];

    for y in 0..height {
        for x in (8..width.saturating_sub(8)).step_by(12) {
            let left = (y * width + x) as usize;
            let right = (y * width + x + 4) as usize;
            edges[left] = true;
            edges[right] = true;
            grad_x[left] = -1020.0;
            grad_x[right] = 1020.0;
        }
    }

    SwtInput::new(width, height, edges, grad_x, vec![0.0; n]).expect("valid input")
}

fn compute_512(c: &mut Criterion) {
    let input = striped_input(512, 512);
    let config = SwtConfig::default();
    c.bench_function("compute_512", |b| {
        b.iter(|| swt_transform::compute(black_box(&input), black_box(&config)))
    });
}

fn refine_512(c: &mut Criterion) {
    let input = striped_input(512, 512);
    let output = swt_transform::compute(&input, &SwtConfig::default()).expect("swt");
    c.bench_function("refine_512", |b| {
        b.iter(|| {
            let mut raster = output.raster.clone();
            swt_transform::refine(black_box(&mut raster));
            raster
        })
    });
}

criterion_group!(benches, compute_512, refine_512);
criterion_main!(benches);

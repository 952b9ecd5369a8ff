//! Smoothing and gradient filters over 8-bit images.

use image::{GrayImage, Luma, RgbImage};
use imageproc::filter::median_filter;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};

/// Median of each `kernel x kernel` neighbourhood, per colour channel.
///
/// `kernel` must be odd; edges are padded by continuity.
pub fn denoise(image: &RgbImage, kernel: u32) -> RgbImage {
    let radius = kernel / 2;
    median_filter(image, radius, radius)
}

/// Luminance `0.299R + 0.587G + 0.114B`, rounded.
pub fn to_grayscale(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
        Luma([luma.round().clamp(0.0, 255.0) as u8])
    })
}

/// 5x5 Gaussian blur (sigma about 1.4) with the integer kernel normalised by
/// 159. The two-pixel border is copied through unchanged.
pub fn gaussian_blur(image: &GrayImage) -> GrayImage {
    #[rustfmt::skip]
    const KERNEL: [[u32; 5]; 5] = [
        [2,  4,  5,  4, 2],
        [4,  9, 12,  9, 4],
        [5, 12, 15, 12, 5],
        [4,  9, 12,  9, 4],
        [2,  4,  5,  4, 2],
    ];
    const NORM: u32 = 159;

    let (width, height) = image.dimensions();
    let mut blurred = image.clone();

    for y in 2..height.saturating_sub(2) {
        for x in 2..width.saturating_sub(2) {
            let mut sum = 0u32;
            for (ky, weights) in (0u32..).zip(KERNEL.iter()) {
                for (kx, &weight) in (0u32..).zip(weights.iter()) {
                    sum += weight * u32::from(image.get_pixel(x + kx - 2, y + ky - 2)[0]);
                }
            }
            // Rounded division; the odd norm never ties.
            blurred.put_pixel(x, y, Luma([((sum + NORM / 2) / NORM) as u8]));
        }
    }

    blurred
}

/// Sobel gradients `(Gx, Gy)` as row-major planes.
///
/// `Gx` is positive where brightness increases to the right and `Gy` where it
/// increases downward.
pub fn sobel_gradients(image: &GrayImage) -> (Vec<f32>, Vec<f32>) {
    let plane = |gradient: image::ImageBuffer<Luma<i16>, Vec<i16>>| -> Vec<f32> {
        gradient.into_raw().into_iter().map(f32::from).collect()
    };
    (plane(horizontal_sobel(image)), plane(vertical_sobel(image)))
}

//! Gaussian blur as a 2-D stencil with replicate-edge borders.

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::filters::kernel::GaussianKernel;
use crate::image_pipeline::filters::schedule::Schedule;
use crate::image_pipeline::ppm::types::{Rgb, RgbImage};

/// Convolves `image` with `kernel` into a new image of the same shape.
///
/// Output pixel `(x, y)` sums `weight(j, i) * input(x - r + i, y - r + j)`
/// over all taps, with each coordinate clamped into the image
/// independently. Sums are accumulated per channel in `f64`, rounded half
/// up and clamped to `[0, max_color_val]`. Workers only read the input and
/// the kernel, and each writes its own output slots.
pub fn convolve(image: &RgbImage, kernel: &GaussianKernel, schedule: Schedule) -> RgbImage {
    debug!(
        "Convolving {}x{} image with radius {} kernel ({:?})",
        image.width(),
        image.height(),
        kernel.radius(),
        schedule
    );

    let width = image.width() as usize;
    let height = image.height() as usize;
    let radius = kernel.radius() as usize;
    let max = image.max_color_val() as f64;
    let input = image.pixels();

    let mut pixels = vec![Rgb::default(); input.len()];
    schedule.for_each_pixel(&mut pixels, width, |x, y, out| {
        let mut sum = [0.0f64; 3];
        for j in 0..kernel.side() {
            let sy = clamp_tap(y, j, radius, height);
            let row = &input[sy * width..(sy + 1) * width];
            for (i, &w) in kernel.row(j).iter().enumerate() {
                let p = row[clamp_tap(x, i, radius, width)];
                sum[0] += w * p.r as f64;
                sum[1] += w * p.g as f64;
                sum[2] += w * p.b as f64;
            }
        }
        *out = Rgb::new(
            round_channel(sum[0], max),
            round_channel(sum[1], max),
            round_channel(sum[2], max),
        );
    });

    RgbImage::from_filtered(image, pixels)
}

/// Builds the kernel, then convolves. Parameter errors surface before any
/// pixel work starts.
pub fn gaussian_blur(image: &RgbImage, radius: u32, sigma: f64, schedule: Schedule) -> Result<RgbImage> {
    let kernel = GaussianKernel::build(radius, sigma)?;
    Ok(convolve(image, &kernel, schedule))
}

/// Coordinate of tap `tap` around `center`, clamped to `[0, len)`.
fn clamp_tap(center: usize, tap: usize, radius: usize, len: usize) -> usize {
    (center + tap).saturating_sub(radius).min(len - 1)
}

/// Round half up, like `floor(v + 0.5)`.
fn round_channel(value: f64, max: f64) -> u16 {
    (value + 0.5).floor().clamp(0.0, max) as u16
}

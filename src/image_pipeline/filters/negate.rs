use tracing::debug;

use crate::image_pipeline::filters::schedule::Schedule;
use crate::image_pipeline::ppm::types::{Rgb, RgbImage};

/// Replaces every channel `c` with `max_color_val - c` in a new image.
pub fn negate(image: &RgbImage, schedule: Schedule) -> RgbImage {
    debug!("Negating {}x{} image ({:?})", image.width(), image.height(), schedule);

    let max = image.max_color_val();
    let mut pixels = image.pixels().to_vec();
    schedule.for_each_pixel(&mut pixels, image.width() as usize, |_, _, pixel| {
        *pixel = invert(*pixel, max);
    });

    RgbImage::from_filtered(image, pixels)
}

fn invert(pixel: Rgb, max: u16) -> Rgb {
    // channels never exceed max in a valid image
    Rgb::new(
        max.saturating_sub(pixel.r),
        max.saturating_sub(pixel.g),
        max.saturating_sub(pixel.b),
    )
}

use tracing::debug;

use crate::image_pipeline::filters::schedule::Schedule;
use crate::image_pipeline::ppm::types::RgbImage;

/// Flips the image horizontally in place and hands the same buffer back.
///
/// Rows are the unit of work: each row is reversed by exactly one worker.
pub fn mirror(mut image: RgbImage, schedule: Schedule) -> RgbImage {
    debug!("Mirroring {}x{} image ({:?})", image.width(), image.height(), schedule);

    let width = image.width() as usize;
    schedule.for_each_row(image.pixels_mut(), width, |_, row| row.reverse());
    image
}

use crate::image_pipeline::filters::schedule::Schedule;
use crate::image_pipeline::ppm::types::{Rgb, RgbImage};

pub(crate) const ALL_SCHEDULES: [Schedule; 3] = [Schedule::Sequential, Schedule::Rows, Schedule::Pixels];

/// Deterministic noisy image with every channel in `[0, max]`.
pub(crate) fn patterned_image(width: u32, height: u32, max: u16) -> RgbImage {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15 ^ ((width as u64) << 32 | height as u64);
    let mut next = || {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % (max as u64 + 1)) as u16
    };
    let pixels = (0..width as usize * height as usize)
        .map(|_| Rgb::new(next(), next(), next()))
        .collect();
    RgbImage::new(width, height, max, pixels).unwrap()
}

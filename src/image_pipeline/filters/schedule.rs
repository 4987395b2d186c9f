//! Work partitioning shared by all filters

use rayon::prelude::*;

use crate::image_pipeline::ppm::types::Rgb;

/// Smallest run of pixels handed to one rayon task under [`Schedule::Pixels`].
const MIN_PIXELS_PER_TASK: usize = 1024;

/// How a filter splits its output buffer between workers.
///
/// Every schedule writes each output slot exactly once from the same inputs,
/// so results are bit-identical across schedules and thread counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// Single-threaded pass on the calling thread
    Sequential,
    /// One task per image row
    #[default]
    Rows,
    /// Work-stealing iteration over individual pixels
    Pixels,
}

impl Schedule {
    /// Runs `f(y, row)` once for every row. Rows are never split, so a worker
    /// owns the whole row it is given. `Pixels` is treated as `Rows` here.
    pub(crate) fn for_each_row<F>(self, pixels: &mut [Rgb], width: usize, f: F)
    where
        F: Fn(usize, &mut [Rgb]) + Sync,
    {
        match self {
            Schedule::Sequential => pixels
                .chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| f(y, row)),
            Schedule::Rows | Schedule::Pixels => pixels
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| f(y, row)),
        }
    }

    /// Runs `f(x, y, pixel)` once for every pixel of a row-major buffer.
    pub(crate) fn for_each_pixel<F>(self, pixels: &mut [Rgb], width: usize, f: F)
    where
        F: Fn(usize, usize, &mut Rgb) + Sync,
    {
        match self {
            Schedule::Sequential | Schedule::Rows => self.for_each_row(pixels, width, |y, row| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    f(x, y, pixel);
                }
            }),
            Schedule::Pixels => pixels
                .par_iter_mut()
                .enumerate()
                .with_min_len(MIN_PIXELS_PER_TASK)
                .for_each(|(i, pixel)| f(i % width, i / width, pixel)),
        }
    }
}

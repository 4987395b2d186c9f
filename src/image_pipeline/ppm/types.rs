//! In-memory raster types

use crate::image_pipeline::common::error::{PipelineError, Result};

/// One RGB triple. Channels are bounded by the owning image's max color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Rgb {
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    fn max_channel(self) -> u16 {
        self.r.max(self.g).max(self.b)
    }
}

/// Decoded RGB image with a row-major pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    max_color_val: u16,
    pixels: Vec<Rgb>,
}

impl RgbImage {
    /// Builds an image, checking that the buffer holds exactly
    /// `width * height` pixels and that no channel exceeds `max_color_val`.
    pub fn new(width: u32, height: u32, max_color_val: u16, pixels: Vec<Rgb>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }
        if max_color_val == 0 {
            return Err(PipelineError::InvalidParameter {
                name: "max_color_val",
                reason: "must be positive".to_string(),
            });
        }

        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(PipelineError::InvalidParameter {
                name: "pixels",
                reason: format!("expected {} pixels, found {}", expected, pixels.len()),
            });
        }

        if let Some((index, value)) = pixels
            .iter()
            .map(|p| p.max_channel())
            .enumerate()
            .find(|&(_, value)| value > max_color_val)
        {
            return Err(PipelineError::ChannelOutOfRange {
                index,
                value,
                max: max_color_val,
            });
        }

        Ok(Self {
            width,
            height,
            max_color_val,
            pixels,
        })
    }

    /// Image of one repeated pixel.
    pub fn filled(width: u32, height: u32, max_color_val: u16, pixel: Rgb) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Self::new(width, height, max_color_val, vec![pixel; count])
    }

    /// Wraps a buffer produced by a filter from a valid image of the same
    /// shape. Callers guarantee the invariants `new` would check.
    pub(crate) fn from_filtered(source: &RgbImage, pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(pixels.len(), source.pixels.len());
        Self {
            width: source.width,
            height: source.height,
            max_color_val: source.max_color_val,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn max_color_val(&self) -> u16 {
        self.max_color_val
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Mutable row-major buffer. Writers must keep channels within
    /// `max_color_val`.
    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn row(&self, y: u32) -> Option<&[Rgb]> {
        if y >= self.height {
            return None;
        }
        let width = self.width as usize;
        let start = y as usize * width;
        Some(&self.pixels[start..start + width])
    }
}

/// `width * height` as a buffer length, failing on overflow.
pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(PipelineError::InvalidDimensions(width, height))
}

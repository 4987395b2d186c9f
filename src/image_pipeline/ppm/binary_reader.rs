//! Decoder for the binary RGB ("P6") variant of the PPM format.
//!
//! The header is three ASCII decimal fields after the magic token, each
//! terminated by exactly one whitespace byte. The payload that follows is
//! `width * height * 3` densely packed bytes, one byte per channel.

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::ppm::reader::PpmReader;
use crate::image_pipeline::ppm::types::{Rgb, RgbImage, pixel_count};
use crate::image_pipeline::ppm::MAGIC;

/// Longest slice of unexpected input quoted back in an error message.
const PREVIEW_LEN: usize = 16;

pub struct BinaryPpmReader;

impl PpmReader for BinaryPpmReader {
    fn read_ppm(&self, data: &[u8]) -> Result<RgbImage> {
        debug!("Decoding PPM image, {} bytes", data.len());

        let mut header = HeaderCursor::new(data);
        header.expect_magic()?;
        let width = header.next_positive("width")?;
        let height = header.next_positive("height")?;
        let max_color_val = header.next_positive("max_color_val")?;
        let max_color_val = u16::try_from(max_color_val).map_err(|_| PipelineError::InvalidHeader {
            field: "max_color_val",
            value: max_color_val.to_string(),
            reason: "exceeds 65535",
        })?;

        let count = pixel_count(width, height)?;
        let expected = count
            .checked_mul(3)
            .ok_or(PipelineError::InvalidDimensions(width, height))?;
        let payload = header.remaining();
        if payload.len() < expected {
            return Err(PipelineError::TruncatedPixelData {
                expected,
                actual: payload.len(),
            });
        }
        if payload.len() > expected {
            debug!("Ignoring {} trailing bytes", payload.len() - expected);
        }

        let pixels: Vec<Rgb> = payload[..expected]
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0] as u16, c[1] as u16, c[2] as u16))
            .collect();

        debug!("Decoded image: {}x{}, max {}", width, height, max_color_val);

        RgbImage::new(width, height, max_color_val, pixels)
    }
}

struct HeaderCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Next token and the single whitespace byte ending it, or `None` when
    /// the input runs out first.
    fn next_token(&mut self) -> Option<&'a [u8]> {
        let data: &'a [u8] = self.data;
        let rest = &data[self.pos..];
        let len = rest.iter().position(u8::is_ascii_whitespace)?;
        self.pos += len + 1;
        Some(&rest[..len])
    }

    fn expect_magic(&mut self) -> Result<()> {
        let data: &'a [u8] = self.data;
        let rest = &data[self.pos..];
        match self.next_token() {
            Some(token) if token == MAGIC.as_bytes() => Ok(()),
            Some(token) => Err(bad_magic(token)),
            None if rest == MAGIC.as_bytes() => Err(PipelineError::TruncatedHeader("width")),
            None => Err(bad_magic(rest)),
        }
    }

    fn next_positive(&mut self, field: &'static str) -> Result<u32> {
        let token = self
            .next_token()
            .ok_or(PipelineError::TruncatedHeader(field))?;

        let invalid = |reason| PipelineError::InvalidHeader {
            field,
            value: preview(token),
            reason,
        };

        if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
            return Err(invalid("not a decimal integer"));
        }
        // all-digit tokens are valid UTF-8
        let value: u32 = std::str::from_utf8(token)
            .map_err(|_| invalid("not a decimal integer"))?
            .parse()
            .map_err(|_| invalid("out of range"))?;
        if value == 0 {
            return Err(invalid("must be positive"));
        }
        Ok(value)
    }

    fn remaining(&self) -> &'a [u8] {
        let data: &'a [u8] = self.data;
        &data[self.pos..]
    }
}

fn bad_magic(found: &[u8]) -> PipelineError {
    PipelineError::BadMagic {
        expected: MAGIC,
        found: preview(found),
    }
}

fn preview(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&bytes[..bytes.len().min(PREVIEW_LEN)]).into_owned()
}

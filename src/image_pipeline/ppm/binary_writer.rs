use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::ppm::MAGIC;
use crate::image_pipeline::ppm::types::RgbImage;
use crate::image_pipeline::ppm::writer::PpmWriter;

/// Encoder for binary RGB PPM. Each channel is written as its low byte, so
/// values above 255 are truncated rather than rejected.
pub struct BinaryPpmWriter;

impl PpmWriter for BinaryPpmWriter {
    fn write_ppm(&self, image: &RgbImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PPM image: {}x{}", image.width(), image.height());

        let header = format!(
            "{}\n{} {}\n{}\n",
            MAGIC,
            image.width(),
            image.height(),
            image.max_color_val()
        );

        let mut buffer = Vec::with_capacity(header.len() + image.pixels().len() * 3);
        buffer.extend_from_slice(header.as_bytes());
        for pixel in image.pixels() {
            buffer.extend_from_slice(&[pixel.r as u8, pixel.g as u8, pixel.b as u8]);
        }

        output.write_all(&buffer)?;

        debug!("PPM encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

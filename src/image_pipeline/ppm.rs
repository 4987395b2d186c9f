//! PPM codec module
//!
//! Binary RGB ("P6") reading and writing, plus the in-memory raster types
//! the filters operate on.

mod reader;
mod writer;
mod binary_reader;
mod binary_writer;
pub mod types;

pub use reader::PpmReader;
pub use writer::PpmWriter;
pub use binary_reader::BinaryPpmReader;
pub use binary_writer::BinaryPpmWriter;
pub use types::{Rgb, RgbImage};

use crate::image_pipeline::common::error::Result;

/// Magic token of the binary RGB variant.
pub const MAGIC: &str = "P6";

/// Decodes a complete binary PPM byte stream.
pub fn decode(data: &[u8]) -> Result<RgbImage> {
    BinaryPpmReader.read_ppm(data)
}

/// Encodes an image into a new byte buffer.
pub fn encode(image: &RgbImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    // writing into a Vec cannot fail
    if let Err(e) = BinaryPpmWriter.write_ppm(image, &mut buffer) {
        unreachable!("in-memory PPM encoding failed: {}", e);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let pixels = (0..12u16)
            .map(|i| Rgb::new(i * 20, 255 - i * 20, (i * 7) % 200))
            .collect();
        let image = RgbImage::new(4, 3, 255, pixels).unwrap();

        assert_eq!(decode(&encode(&image)).unwrap(), image);
    }

    #[test]
    fn test_round_trip_small_max_color_val() {
        let image = RgbImage::new(2, 2, 7, vec![Rgb::new(7, 0, 3); 4]).unwrap();
        assert_eq!(decode(&encode(&image)).unwrap(), image);
    }
}

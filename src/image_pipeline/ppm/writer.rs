use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::ppm::types::RgbImage;

pub trait PpmWriter {
    fn write_ppm(&self, image: &RgbImage, output: &mut dyn Write) -> Result<()>;
}

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::ppm::types::RgbImage;

pub trait PpmReader {
    fn read_ppm(&self, data: &[u8]) -> Result<RgbImage>;
}

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::img::types::DecodedImage;

pub trait ImgReader {
    fn read_img(&self, data: &[u8]) -> Result<DecodedImage>;
}

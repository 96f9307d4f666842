//! IMG reader decoding the HSI column payload.
//!
//! Runs the whole container lifecycle on a byte buffer: variant detection,
//! header extraction and payload decode.

use tracing::debug;

use crate::image_pipeline::common::error::{DecodeError, Result};
use crate::image_pipeline::img::decoder::ImgDecoder;
use crate::image_pipeline::img::reader::ImgReader;
use crate::image_pipeline::img::types::{DecodeConfig, DecodedImage};

#[derive(Debug, Clone, Default)]
pub struct HsiImgReader {
    config: DecodeConfig,
}

impl HsiImgReader {
    pub fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }
}

impl ImgReader for HsiImgReader {
    /// Decodes an IMG container held in memory.
    ///
    /// # Returns
    ///
    /// * `Ok(DecodedImage)` - Decoded raster with its header, possibly partial
    ///   when the payload is truncated
    /// * `Err(DecodeError::InvalidFormat)` - Signature not recognised
    /// * `Err(DecodeError::InvalidDimensions)` - Header dimensions rejected by the config
    /// * `Err(DecodeError::DecodeFailure)` - Unexpected fault while decoding
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use xray_img_rs::image_pipeline::{HsiImgReader, ImgReader};
    ///
    /// let reader = HsiImgReader::default();
    /// let bytes = std::fs::read("scan.img").unwrap();
    /// let image = reader.read_img(&bytes).unwrap();
    /// println!("{}x{}", image.raster.width(), image.raster.height());
    /// ```
    fn read_img(&self, data: &[u8]) -> Result<DecodedImage> {
        debug!("Decoding IMG container, {} bytes", data.len());

        let mut decoder = ImgDecoder::with_config(data, self.config.clone());
        if !decoder.variant().is_valid() {
            return Err(DecodeError::InvalidFormat("signature mismatch".to_string()));
        }

        decoder.read_header()?;
        decoder.decode_image()
    }
}

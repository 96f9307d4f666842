//! IMG decoding configuration and result types

use crate::image_pipeline::img::column_decoder::ColumnSpan;
use crate::image_pipeline::img::format::FormatVariant;
use crate::image_pipeline::img::header::HeaderFields;
use crate::image_pipeline::raster::types::RgbRaster;

/// A fully decoded IMG container
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub variant: FormatVariant,
    pub header: HeaderFields,
    /// Column descriptors in payload order
    pub columns: Vec<ColumnSpan>,
    pub raster: RgbRaster,
    /// Whether the payload ended before `header.width` columns were read
    pub truncated: bool,
}

/// Configuration for IMG decoding
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Whether to reject headers with a zero or oversized dimension
    pub validate_dimensions: bool,
    /// Largest accepted width or height
    pub max_dimension: Option<usize>,
    /// Whether to run the edge enhancement filter over the intensity plane
    pub edge_enhance: bool,
    /// Worker threads for decoding; None uses the global rayon pool
    pub threads: Option<usize>,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: Some(u16::MAX as usize),
            edge_enhance: true,
            threads: None,
        }
    }
}

impl DecodeConfig {
    pub fn builder() -> DecodeConfigBuilder {
        DecodeConfigBuilder::default()
    }
}

/// Builder for DecodeConfig
#[derive(Default)]
pub struct DecodeConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    edge_enhance: Option<bool>,
    threads: Option<Option<usize>>,
}

impl DecodeConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn edge_enhance(mut self, enable: bool) -> Self {
        self.edge_enhance = Some(enable);
        self
    }

    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn build(self) -> DecodeConfig {
        let default = DecodeConfig::default();
        DecodeConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            edge_enhance: self.edge_enhance.unwrap_or(default.edge_enhance),
            threads: self.threads.unwrap_or(default.threads),
        }
    }
}

//! Image processing pipeline module
//!
//! This module decodes IMG radiographic containers into RGB rasters, with
//! separate modules for container parsing, raster assembly, and decode
//! orchestration.

pub mod img;
pub mod raster;
pub mod conversions;
pub mod common;

pub use common::{
    DecodeError,
    Result,
};

pub use img::{
    DecodeConfig,
    DecodeConfigBuilder,
    DecodedImage,
    FormatVariant,
    HeaderFields,
    HsiImgReader,
    ImgDecoder,
    ImgReader,
};

pub use raster::{
    RasterSink,
    RasterSummary,
    Rgb,
    RgbRaster,
};

pub use conversions::{
    ImgToRgbPipeline,
    PipelineTimings,
};

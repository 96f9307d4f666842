//! IMG container decoding module
//!
//! Byte access, variant detection, header extraction and the HSI column
//! payload decoder.

pub mod byte_source;
pub mod column_decoder;
pub mod decoder;
pub mod format;
pub mod header;
pub mod hsi_table;
mod hsi_reader;
mod reader;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use byte_source::ByteSource;
pub use column_decoder::{ColumnScan, ColumnSpan, DecodedColumn, HsiSample};
pub use decoder::ImgDecoder;
pub use format::FormatVariant;
pub use header::HeaderFields;
pub use hsi_reader::HsiImgReader;
pub use hsi_table::HsiLookupTable;
pub use reader::ImgReader;
pub use types::{DecodeConfig, DecodeConfigBuilder, DecodedImage};

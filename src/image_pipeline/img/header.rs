//! Fixed-offset header extraction for both IMG layouts.

use tracing::debug;

use crate::image_pipeline::common::error::{DecodeError, Result};
use crate::image_pipeline::img::byte_source::ByteSource;
use crate::image_pipeline::img::format::FormatVariant;

/// First payload byte for each layout.
pub const VARIANT1_PAYLOAD_START: usize = 825;
pub const VARIANT2_PAYLOAD_START: usize = 245;

/// Metadata read from the container header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFields {
    /// Width of the image in pixels (number of encoded columns)
    pub width: usize,
    /// Declared height of the image in pixels
    pub height: usize,
    /// Sequence number printed on the scan; 0 for Variant2
    pub sequence_number: u32,
    /// Scanner model
    pub model: String,
    /// Acquisition date as stored by the scanner
    pub date: String,
    /// Internal scanner identifier
    pub system_id: String,
    /// Declared size of the data block
    pub data_bytes: u32,
    /// Declared size of the encoded image within the data block
    pub image_bytes: u32,
    /// Tube voltage in kV, Variant1 only
    pub ray_intensity: Option<f64>,
    /// 1-indexed offset of the first column header
    pub payload_start: usize,
}

struct HeaderLayout {
    width: usize,
    height: usize,
    sequence_number: Option<usize>,
    model: (usize, usize),
    date: (usize, usize),
    system_id: (usize, usize),
    data_bytes: usize,
    image_bytes: usize,
    ray_intensity: Option<usize>,
    payload_start: usize,
}

const VARIANT1_LAYOUT: HeaderLayout = HeaderLayout {
    width: 649,
    height: 651,
    sequence_number: Some(661),
    model: (333, 344),
    date: (349, 368),
    system_id: (383, 393),
    data_bytes: 641,
    image_bytes: 657,
    ray_intensity: Some(799),
    payload_start: VARIANT1_PAYLOAD_START,
};

const VARIANT2_LAYOUT: HeaderLayout = HeaderLayout {
    width: 69,
    height: 71,
    sequence_number: None,
    model: (43, 51),
    date: (58, 78),
    system_id: (383, 393),
    data_bytes: 61,
    image_bytes: 77,
    ray_intensity: None,
    payload_start: VARIANT2_PAYLOAD_START,
};

pub fn read_header(source: &ByteSource<'_>, variant: FormatVariant) -> Result<HeaderFields> {
    let layout = match variant {
        FormatVariant::Variant1 => &VARIANT1_LAYOUT,
        FormatVariant::Variant2 => &VARIANT2_LAYOUT,
        FormatVariant::Invalid => {
            return Err(DecodeError::InvalidFormat(
                "header requested for an unrecognised container".to_string(),
            ));
        }
    };

    let header = HeaderFields {
        width: usize::from(source.read_u16_le(layout.width)),
        height: usize::from(source.read_u16_le(layout.height)),
        sequence_number: layout
            .sequence_number
            .map_or(0, |offset| source.read_u32_le(offset)),
        model: source.read_text(layout.model.0, layout.model.1),
        date: source.read_text(layout.date.0, layout.date.1),
        system_id: source.read_text(layout.system_id.0, layout.system_id.1),
        data_bytes: source.read_u32_le(layout.data_bytes),
        image_bytes: source.read_u32_le(layout.image_bytes),
        ray_intensity: layout
            .ray_intensity
            .map(|offset| f64::from(source.read_u16_le(offset)) / 10.0),
        payload_start: layout.payload_start,
    };

    debug!(
        width = header.width,
        height = header.height,
        model = %header.model,
        payload_start = header.payload_start,
        "Read IMG header"
    );

    Ok(header)
}

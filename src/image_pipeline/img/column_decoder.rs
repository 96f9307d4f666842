//! Payload decoding: column headers and their HSI pixel groups.
//!
//! The payload is a run of columns. Each starts with an 8 byte header
//! (column length, zero padding, 4 reserved bytes) followed by
//! `column_length` pixel groups of 4 bytes each.

use std::ops::Range;

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::image_pipeline::img::byte_source::ByteSource;
use crate::image_pipeline::img::header::HeaderFields;
use crate::image_pipeline::img::hsi_table::HsiLookupTable;

/// Reserved control bytes at the end of each column header. Skipped, never interpreted.
pub const RESERVED_BYTES: usize = 4;

/// Column length + zero padding + reserved.
pub const COLUMN_HEADER_BYTES: usize = 2 + 2 + RESERVED_BYTES;

pub const PIXEL_GROUP_BYTES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    /// 1-indexed offset of the column header
    pub offset: usize,
    /// Number of encoded pixel groups
    pub column_length: usize,
    /// Row at which the decoded values start
    pub zero_padding: usize,
}

impl ColumnSpan {
    pub fn rows(&self) -> Range<usize> {
        self.zero_padding..self.end_row()
    }

    pub fn end_row(&self) -> usize {
        self.zero_padding + self.column_length
    }

    pub fn data_offset(&self) -> usize {
        self.offset + COLUMN_HEADER_BYTES
    }

    /// Total bytes occupied by header and pixel groups.
    pub fn byte_len(&self) -> usize {
        COLUMN_HEADER_BYTES + self.column_length * PIXEL_GROUP_BYTES
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsiSample {
    pub hue: f64,
    pub saturation: f64,
    pub intensity: f64,
}

#[derive(Debug, Clone)]
pub struct DecodedColumn {
    pub span: ColumnSpan,
    /// One sample per pixel group, top of the column first
    pub samples: Vec<HsiSample>,
}

#[derive(Debug, Clone)]
pub struct ColumnScan {
    pub columns: Vec<DecodedColumn>,
    pub effective_height: usize,
    /// Set when fewer than `width` columns could be read
    pub truncated: bool,
}

impl ColumnScan {
    pub fn spans(&self) -> impl Iterator<Item = &ColumnSpan> {
        self.columns.iter().map(|c| &c.span)
    }
}

/// Decodes one 4-byte pixel group.
pub fn decode_group(table: &HsiLookupTable, [b0, b1, _b2, b3]: [u8; 4]) -> HsiSample {
    let combined = (usize::from(b1) << 3) | usize::from(b0 >> 5);
    HsiSample {
        hue: table.hue(b3),
        saturation: table.saturation(combined, b3),
        intensity: table.intensity(combined),
    }
}

/// Walks the column headers from the payload start.
///
/// Stops without error at the first column whose bytes run past the end of
/// the source or whose rows overflow the declared height.
pub fn scan_spans(source: &ByteSource<'_>, header: &HeaderFields) -> Vec<ColumnSpan> {
    let mut spans = Vec::with_capacity(header.width);
    let mut cursor = header.payload_start;

    while source.contains(cursor) && spans.len() < header.width {
        let span = ColumnSpan {
            offset: cursor,
            column_length: usize::from(source.read_u16_le(cursor)),
            zero_padding: usize::from(source.read_u16_le(cursor + 2)),
        };

        let last_byte = span.offset + span.byte_len() - 1;
        if last_byte > source.len() {
            debug!(column = spans.len(), last_byte, "Column runs past end of data");
            break;
        }
        if span.end_row() > header.height {
            debug!(
                column = spans.len(),
                end_row = span.end_row(),
                height = header.height,
                "Column overflows declared height"
            );
            break;
        }

        trace!(?span, "Column header");
        cursor += span.byte_len();
        spans.push(span);
    }

    spans
}

fn decode_span(source: &ByteSource<'_>, table: &HsiLookupTable, span: ColumnSpan) -> DecodedColumn {
    let data = span.data_offset();
    let samples = (0..span.column_length)
        .map(|g| decode_group(table, source.read_quad(data + g * PIXEL_GROUP_BYTES)))
        .collect();
    DecodedColumn { span, samples }
}

/// Scans the payload and decodes every accepted column in parallel.
pub fn decode_columns(source: &ByteSource<'_>, header: &HeaderFields) -> ColumnScan {
    let table = HsiLookupTable::shared();
    let spans = scan_spans(source, header);

    let columns: Vec<DecodedColumn> = spans
        .par_iter()
        .map(|&span| decode_span(source, table, span))
        .collect();

    let effective_height = columns
        .iter()
        .map(|c| c.span.end_row())
        .fold(header.height, usize::max);

    let truncated = columns.len() < header.width;
    if truncated {
        warn!(
            decoded = columns.len(),
            width = header.width,
            "IMG payload truncated, remaining columns left blank"
        );
    }

    ColumnScan {
        columns,
        effective_height,
        truncated,
    }
}

//! Synthetic IMG containers for tests.

use crate::image_pipeline::img::format::FormatVariant;
use crate::image_pipeline::img::header::{VARIANT1_PAYLOAD_START, VARIANT2_PAYLOAD_START};

pub(crate) struct FixtureColumn {
    pub zero_padding: u16,
    pub groups: Vec<[u8; 4]>,
    /// Overrides the column length written to the header
    pub declared_length: Option<u16>,
}

impl FixtureColumn {
    pub fn new(zero_padding: u16, groups: Vec<[u8; 4]>) -> Self {
        Self {
            zero_padding,
            groups,
            declared_length: None,
        }
    }
}

pub(crate) struct ImgBuilder {
    variant: FormatVariant,
    width: u16,
    height: u16,
    model: String,
    date: String,
    system_id: String,
    sequence_number: u32,
    ray_intensity_tenths: u16,
    data_bytes: u32,
    image_bytes: u32,
    columns: Vec<FixtureColumn>,
}

impl ImgBuilder {
    pub fn new(variant: FormatVariant, width: u16, height: u16) -> Self {
        Self {
            variant,
            width,
            height,
            model: String::new(),
            date: String::new(),
            system_id: String::new(),
            sequence_number: 0,
            ray_intensity_tenths: 0,
            data_bytes: 0,
            image_bytes: 0,
            columns: Vec::new(),
        }
    }

    pub fn model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn system_id(mut self, system_id: &str) -> Self {
        self.system_id = system_id.to_string();
        self
    }

    pub fn sequence_number(mut self, sequence_number: u32) -> Self {
        self.sequence_number = sequence_number;
        self
    }

    pub fn ray_intensity_tenths(mut self, tenths: u16) -> Self {
        self.ray_intensity_tenths = tenths;
        self
    }

    pub fn sizes(mut self, data_bytes: u32, image_bytes: u32) -> Self {
        self.data_bytes = data_bytes;
        self.image_bytes = image_bytes;
        self
    }

    pub fn column(mut self, column: FixtureColumn) -> Self {
        self.columns.push(column);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let payload_start = match self.variant {
            FormatVariant::Variant1 => VARIANT1_PAYLOAD_START,
            _ => VARIANT2_PAYLOAD_START,
        };
        let mut buf = vec![0u8; payload_start - 1];

        // Signature samples at offsets 5 and 13, the rest zero.
        put(&mut buf, 5, &[44]);
        put(&mut buf, 13, &[175]);

        match self.variant {
            FormatVariant::Variant1 => {
                put(&mut buf, 23, &[200]);
                put(&mut buf, 649, &self.width.to_le_bytes());
                put(&mut buf, 651, &self.height.to_le_bytes());
                put(&mut buf, 661, &self.sequence_number.to_le_bytes());
                put(&mut buf, 641, &self.data_bytes.to_le_bytes());
                put(&mut buf, 657, &self.image_bytes.to_le_bytes());
                put(&mut buf, 799, &self.ray_intensity_tenths.to_le_bytes());
                put_text(&mut buf, 333, &self.model);
                put_text(&mut buf, 349, &self.date);
                put_text(&mut buf, 383, &self.system_id);
            }
            FormatVariant::Variant2 => {
                put(&mut buf, 23, &[50]);
                put(&mut buf, 69, &self.width.to_le_bytes());
                put(&mut buf, 71, &self.height.to_le_bytes());
                put(&mut buf, 61, &self.data_bytes.to_le_bytes());
                put(&mut buf, 77, &self.image_bytes.to_le_bytes());
                put_text(&mut buf, 43, &self.model);
                put_text(&mut buf, 58, &self.date);
            }
            FormatVariant::Invalid => {
                put(&mut buf, 5, &[0]);
            }
        }

        for column in &self.columns {
            let length = column
                .declared_length
                .unwrap_or(column.groups.len() as u16);
            buf.extend_from_slice(&length.to_le_bytes());
            buf.extend_from_slice(&column.zero_padding.to_le_bytes());
            buf.extend_from_slice(&[0xAA, 0x55, 0xAA, 0x55]);
            for group in &column.groups {
                buf.extend_from_slice(group);
            }
        }

        buf
    }
}

/// Writes `bytes` at 1-indexed `offset`.
fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    buf[offset - 1..offset - 1 + bytes.len()].copy_from_slice(bytes);
}

/// Writes text one character per 2-byte slot, character `n` at offset `2n - 1`.
fn put_text(buf: &mut [u8], first: usize, text: &str) {
    for (i, b) in text.bytes().enumerate() {
        put(buf, (first + i) * 2 - 1, &[b, 0]);
    }
}

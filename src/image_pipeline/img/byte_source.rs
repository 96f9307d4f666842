//! Bounds-checked random access over the raw bytes of an IMG container.
//!
//! Offsets are 1-indexed, matching the byte numbers used by the container's
//! header layout. Reads outside `1..=len` yield `0` instead of failing, so
//! column headers at the tail of a truncated capture stay well-defined.

#[derive(Debug, Clone, Copy)]
pub struct ByteSource<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether `offset` addresses a byte inside the source.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= 1 && offset <= self.bytes.len()
    }

    pub fn read_u8(&self, offset: usize) -> u8 {
        if self.contains(offset) {
            self.bytes[offset - 1]
        } else {
            0
        }
    }

    pub fn read_u16_le(&self, offset: usize) -> u16 {
        u16::from(self.read_u8(offset)) | u16::from(self.read_u8(offset + 1)) << 8
    }

    pub fn read_u32_le(&self, offset: usize) -> u32 {
        u32::from(self.read_u8(offset))
            | u32::from(self.read_u8(offset + 1)) << 8
            | u32::from(self.read_u8(offset + 2)) << 16
            | u32::from(self.read_u8(offset + 3)) << 24
    }

    /// Reads the 4 raw bytes of one pixel group starting at `offset`.
    pub fn read_quad(&self, offset: usize) -> [u8; 4] {
        [
            self.read_u8(offset),
            self.read_u8(offset + 1),
            self.read_u8(offset + 2),
            self.read_u8(offset + 3),
        ]
    }

    /// Extracts a fixed-width text field.
    ///
    /// The container stores text as one character per 2-byte slot: character
    /// `n` of the field lives in the low byte at offset `2n - 1`. `first` and
    /// `end` are character positions, `end` exclusive. Trailing NUL and space
    /// padding is dropped.
    pub fn read_text(&self, first: usize, end: usize) -> String {
        let text: String = (first..end)
            .map(|n| char::from(self.read_u8((n * 2).saturating_sub(1))))
            .collect();
        text.trim_end_matches(['\0', ' ']).to_string()
    }
}

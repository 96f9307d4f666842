//! IMG layout variant detection.

use tracing::debug;

use crate::image_pipeline::img::byte_source::ByteSource;

/// Expected 2-byte samples at offsets 1, 3, .., 15.
const SIGNATURE: [u16; 8] = [0, 0, 44, 0, 0, 0, 175, 0];

/// Offset of the byte distinguishing the two layouts.
const DISCRIMINATOR_OFFSET: usize = 23;

/// Discriminator values above this mark the older, larger header.
const VARIANT1_THRESHOLD: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVariant {
    Invalid,
    Variant1,
    Variant2,
}

impl FormatVariant {
    pub fn is_valid(self) -> bool {
        self != FormatVariant::Invalid
    }
}

/// Classifies the container. Never fails; an unrecognised signature is
/// reported as [`FormatVariant::Invalid`].
pub fn detect(source: &ByteSource<'_>) -> FormatVariant {
    let signature_matches = SIGNATURE
        .iter()
        .enumerate()
        .all(|(i, &expected)| source.read_u16_le(2 * i + 1) == expected);

    if !signature_matches {
        debug!("IMG signature mismatch");
        return FormatVariant::Invalid;
    }

    let discriminator = source.read_u8(DISCRIMINATOR_OFFSET);
    let variant = if discriminator > VARIANT1_THRESHOLD {
        FormatVariant::Variant1
    } else {
        FormatVariant::Variant2
    };
    debug!(discriminator, ?variant, "IMG signature matched");
    variant
}

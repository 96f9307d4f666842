//! Stateful decoder for one IMG container.
//!
//! The container is classified on construction. The header must then be read
//! with [`ImgDecoder::read_header`] before [`ImgDecoder::decode_image`] can
//! decode the payload.

use tracing::{debug, info, warn};

use crate::image_pipeline::common::error::{DecodeError, Result};
use crate::image_pipeline::img::byte_source::ByteSource;
use crate::image_pipeline::img::column_decoder::{ColumnSpan, decode_columns};
use crate::image_pipeline::img::format::{FormatVariant, detect};
use crate::image_pipeline::img::header::{HeaderFields, read_header};
use crate::image_pipeline::img::types::{DecodeConfig, DecodedImage};
use crate::image_pipeline::raster::assembler::{assemble_hsi, assemble_rgb};
use crate::image_pipeline::raster::filter::edge_enhance;

pub struct ImgDecoder<'a> {
    source: ByteSource<'a>,
    variant: FormatVariant,
    header: Option<HeaderFields>,
    config: DecodeConfig,
}

impl<'a> ImgDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_config(data, DecodeConfig::default())
    }

    pub fn with_config(data: &'a [u8], config: DecodeConfig) -> Self {
        let source = ByteSource::new(data);
        let variant = {
            let _span = tracing::info_span!("detect_format", input_size = data.len()).entered();
            detect(&source)
        };
        Self {
            source,
            variant,
            header: None,
            config,
        }
    }

    pub fn variant(&self) -> FormatVariant {
        self.variant
    }

    pub fn header(&self) -> Option<&HeaderFields> {
        self.header.as_ref()
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(DecodeError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(DecodeError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    pub fn read_header(&mut self) -> Result<&HeaderFields> {
        let _span = tracing::info_span!("read_header", variant = ?self.variant).entered();
        let header = read_header(&self.source, self.variant)?;
        self.validate_dimensions(header.width, header.height)?;
        Ok(self.header.insert(header))
    }

    pub fn decode_image(&self) -> Result<DecodedImage> {
        if !self.variant.is_valid() {
            return Err(DecodeError::InvalidFormat(
                "payload requested for an unrecognised container".to_string(),
            ));
        }
        let header = self.header.as_ref().ok_or(DecodeError::SequencingError)?;

        match self.config.threads {
            Some(threads) => {
                debug!(threads, "Decoding on a dedicated thread pool");
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| DecodeError::failure(e.into()))?;
                pool.install(|| self.decode_payload(header))
            }
            None => self.decode_payload(header),
        }
    }

    fn decode_payload(&self, header: &HeaderFields) -> Result<DecodedImage> {
        let scan = {
            let _span = tracing::info_span!("decode_columns").entered();
            decode_columns(&self.source, header)
        };

        let planes = {
            let _span = tracing::info_span!(
                "assemble_hsi",
                width = header.width,
                height = scan.effective_height
            )
            .entered();
            assemble_hsi(header.width, scan.effective_height, &scan.columns)
                .map_err(DecodeError::failure)?
        };

        let filtered;
        let intensity = if self.config.edge_enhance {
            let _span = tracing::info_span!("edge_enhance").entered();
            filtered = edge_enhance(&planes.intensity);
            &filtered
        } else {
            &planes.intensity
        };

        let columns: Vec<ColumnSpan> = scan.spans().copied().collect();
        let raster = {
            let _span = tracing::info_span!("convert_rgb").entered();
            assemble_rgb(&planes, intensity, &columns).map_err(DecodeError::failure)?
        };

        info!(
            width = raster.width(),
            height = raster.height(),
            columns = columns.len(),
            truncated = scan.truncated,
            "IMG payload decoded"
        );

        Ok(DecodedImage {
            variant: self.variant,
            header: header.clone(),
            columns,
            raster,
            truncated: scan.truncated,
        })
    }
}

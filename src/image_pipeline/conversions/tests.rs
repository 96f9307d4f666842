#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::image_pipeline::common::error::{DecodeError, Result};
    use crate::image_pipeline::conversions::ImgToRgbPipeline;
    use crate::image_pipeline::img::column_decoder::decode_group;
    use crate::image_pipeline::img::fixtures::{FixtureColumn, ImgBuilder};
    use crate::image_pipeline::img::{
        DecodeConfig, DecodedImage, FormatVariant, HsiImgReader, HsiLookupTable, ImgReader,
    };
    use crate::image_pipeline::raster::{RasterSink, RasterSummary, Rgb, hsi_to_rgb};

    const GROUP_A: [u8; 4] = [0xE0, 0x90, 0x00, 0x10];
    const GROUP_B: [u8; 4] = [0x20, 0x40, 0x00, 0xB0];

    struct MockReader {
        should_fail: bool,
    }

    impl ImgReader for MockReader {
        fn read_img(&self, _data: &[u8]) -> Result<DecodedImage> {
            if self.should_fail {
                return Err(DecodeError::InvalidFormat("Mock decode error".to_string()));
            }
            HsiImgReader::default().read_img(&scenario())
        }
    }

    struct MockSink {
        should_fail: bool,
        received: Vec<(usize, usize)>,
    }

    impl RasterSink for MockSink {
        fn accept(&mut self, image: &DecodedImage) -> Result<()> {
            if self.should_fail {
                return Err(DecodeError::SinkError("Mock sink error".to_string()));
            }
            self.received.push((image.raster.width(), image.raster.height()));
            Ok(())
        }
    }

    fn assert_pixel(actual: Option<Rgb>, [r, g, b]: [f64; 3]) {
        let p = actual.unwrap();
        assert!(
            (p.r - r).abs() < 1e-6 && (p.g - g).abs() < 1e-6 && (p.b - b).abs() < 1e-6,
            "{p:?} != {:?}",
            [r, g, b]
        );
    }

    /// Variant2, 2x4, a single column of two groups starting at row 1.
    fn scenario() -> Vec<u8> {
        ImgBuilder::new(FormatVariant::Variant2, 2, 4)
            .model("S7")
            .column(FixtureColumn::new(1, vec![GROUP_A, GROUP_B]))
            .build()
    }

    #[test]
    fn test_config_builder() {
        let config = DecodeConfig::builder()
            .validate_dimensions(false)
            .max_dimension(Some(10000))
            .edge_enhance(false)
            .threads(Some(4))
            .build();

        assert!(!config.validate_dimensions);
        assert_eq!(config.max_dimension, Some(10000));
        assert!(!config.edge_enhance);
        assert_eq!(config.threads, Some(4));

        let default = DecodeConfig::builder().build();
        assert!(default.validate_dimensions);
        assert!(default.edge_enhance);
        assert_eq!(default.threads, None);
    }

    #[test]
    fn test_end_to_end_variant2_scenario() {
        let pipeline = ImgToRgbPipeline::new(DecodeConfig::default());
        let image = pipeline.decode(&scenario()).unwrap();
        let raster = &image.raster;

        assert_eq!(image.variant, FormatVariant::Variant2);
        assert_eq!(image.header.model, "S7");
        assert_eq!((raster.width(), raster.height()), (2, 4));
        assert_eq!(image.columns.len(), 1);
        assert!(image.truncated);

        assert_eq!(raster.pixel(0, 0), Some(Rgb::WHITE));
        assert_eq!(raster.pixel(0, 3), Some(Rgb::WHITE));
        assert!((0..4).all(|y| raster.pixel(1, y) == Some(Rgb::WHITE)));

        // Row 1 filters to intensity 0.98104615, row 2 clamps to 0.
        assert_pixel(raster.pixel(0, 1), [255.0, 235.685135514, 162.145720937]);
        assert_pixel(raster.pixel(0, 2), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_decode_without_edge_enhancement_uses_raw_intensity() {
        let config = DecodeConfig::builder().edge_enhance(false).build();
        let pipeline = ImgToRgbPipeline::new(config);
        let image = pipeline.decode(&scenario()).unwrap();

        let s = decode_group(HsiLookupTable::shared(), GROUP_B);
        assert_eq!(
            image.raster.pixel(0, 2),
            Some(hsi_to_rgb(s.hue, s.saturation, s.intensity))
        );
        assert_pixel(image.raster.pixel(0, 2), [50.860578923, 0.596174052, 255.0]);
    }

    #[test]
    fn test_decode_is_idempotent() {
        let data = ImgBuilder::new(FormatVariant::Variant1, 3, 6)
            .column(FixtureColumn::new(0, vec![[0x11, 0x22, 0x33, 0x44]; 6]))
            .column(FixtureColumn::new(2, vec![[0xF0, 0x7F, 0x00, 0x05]; 3]))
            .column(FixtureColumn::new(1, vec![[0x00, 0xFF, 0x00, 0xFF]; 4]))
            .build();
        let pipeline = ImgToRgbPipeline::new(DecodeConfig::default());

        let first = pipeline.decode(&data).unwrap();
        let second = pipeline.decode(&data).unwrap();

        assert_eq!(first.raster, second.raster);
        assert!(!first.truncated);
    }

    #[test]
    fn test_columns_after_rejected_column_stay_white() {
        let mut oversized = FixtureColumn::new(0, vec![[0x00, 0x80, 0x00, 0x20]; 2]);
        oversized.declared_length = Some(1000);
        let data = ImgBuilder::new(FormatVariant::Variant2, 3, 4)
            .column(FixtureColumn::new(0, vec![[0x00, 0x80, 0x00, 0x20]; 4]))
            .column(oversized)
            .column(FixtureColumn::new(0, vec![[0x00, 0x80, 0x00, 0x20]; 4]))
            .build();
        let pipeline = ImgToRgbPipeline::new(DecodeConfig::default());

        let image = pipeline.decode(&data).unwrap();

        assert_eq!(image.columns.len(), 1);
        assert!(image.truncated);
        for x in 1..3 {
            assert!((0..4).all(|y| image.raster.pixel(x, y) == Some(Rgb::WHITE)));
        }
    }

    #[test]
    fn test_invalid_signature_is_reported() {
        let pipeline = ImgToRgbPipeline::new(DecodeConfig::default());
        let result = pipeline.decode(b"definitely not an IMG container");

        assert!(matches!(result, Err(DecodeError::InvalidFormat(_))));
    }

    #[test]
    fn test_reader_failure() {
        let pipeline = ImgToRgbPipeline::with_custom(MockReader { should_fail: true });
        let result = pipeline.decode(b"fake img data");

        assert!(matches!(result, Err(DecodeError::InvalidFormat(_))));
    }

    #[test]
    fn test_decode_into_sink() {
        let pipeline = ImgToRgbPipeline::with_custom(MockReader { should_fail: false });
        let mut sink = MockSink { should_fail: false, received: Vec::new() };

        pipeline.decode_into(b"fake img data", &mut sink).unwrap();

        assert_eq!(sink.received, vec![(2, 4)]);
    }

    #[test]
    fn test_sink_failure() {
        let pipeline = ImgToRgbPipeline::with_custom(MockReader { should_fail: false });
        let mut sink = MockSink { should_fail: true, received: Vec::new() };

        let result = pipeline.decode_into(b"fake img data", &mut sink);

        assert!(matches!(result, Err(DecodeError::SinkError(_))));
    }

    #[test]
    fn test_raster_summary_means() {
        let pipeline = ImgToRgbPipeline::new(DecodeConfig::default());
        let data = ImgBuilder::new(FormatVariant::Variant2, 2, 2).build();
        let mut summary = RasterSummary::default();

        pipeline.decode_into(&data, &mut summary).unwrap();

        assert_eq!((summary.width, summary.height), (2, 2));
        assert_eq!(summary.mean_rgb, [255.0, 255.0, 255.0]);
    }

    #[test]
    fn test_decode_file_with_timings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&scenario()).unwrap();
        let pipeline = ImgToRgbPipeline::new(DecodeConfig::default());

        let (image, timings) = pipeline.decode_file_with_timings(file.path()).unwrap();

        assert_eq!(image.raster.height(), 4);
        assert!(timings.get_step("read_input_file").is_some());
        assert!(timings.get_step("decode_img").is_some());
        assert_eq!(timings.steps().len(), 2);
    }

    #[test]
    fn test_decode_file_into_sink() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&scenario()).unwrap();
        let pipeline = ImgToRgbPipeline::new(DecodeConfig::default());
        let mut sink = MockSink { should_fail: false, received: Vec::new() };

        let (image, timings) = pipeline.decode_file_into(file.path(), &mut sink).unwrap();

        assert_eq!(image.header.model, "S7");
        assert_eq!(sink.received, vec![(2, 4)]);
        let names: Vec<&str> = timings.steps().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["read_input_file", "decode_img", "deliver_raster"]);
    }

    #[test]
    fn test_decode_file_into_missing_file_skips_sink() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = ImgToRgbPipeline::new(DecodeConfig::default());
        let mut sink = MockSink { should_fail: false, received: Vec::new() };

        let result = pipeline.decode_file_into(dir.path().join("missing.img"), &mut sink);

        assert!(matches!(result, Err(DecodeError::InputReadError(_))));
        assert!(sink.received.is_empty());
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = ImgToRgbPipeline::new(DecodeConfig::default());

        let result = pipeline.decode_file(dir.path().join("missing.img"));

        assert!(matches!(result, Err(DecodeError::InputReadError(_))));
    }
}

use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::{
    common::error::{DecodeError, Result},
    conversions::timing::{PipelineTimings, Timer},
    img::{DecodeConfig, DecodedImage, HsiImgReader, ImgReader},
    raster::RasterSink,
};

pub struct ImgToRgbPipeline<R: ImgReader> {
    reader: R,
}

impl ImgToRgbPipeline<HsiImgReader> {
    pub fn new(config: DecodeConfig) -> Self {
        Self {
            reader: HsiImgReader::new(config),
        }
    }
}

impl<R: ImgReader> ImgToRgbPipeline<R> {
    pub fn with_custom(reader: R) -> Self {
        Self { reader }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn decode(&self, input_data: &[u8]) -> Result<DecodedImage> {
        info!("Starting IMG to RGB decode");

        let image = {
            let _span = tracing::info_span!("decode_img").entered();
            self.reader.read_img(input_data)?
        };

        info!(
            width = image.raster.width(),
            height = image.raster.height(),
            model = %image.header.model,
            "Decode complete"
        );
        Ok(image)
    }

    pub fn decode_with_timings(&self, input_data: &[u8]) -> Result<(DecodedImage, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        let timer = Timer::start("decode_img");
        let image = self.decode(input_data)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        Ok((image, timings))
    }

    /// Decodes and hands the result to `sink`.
    pub fn decode_into<S: RasterSink>(&self, input_data: &[u8], sink: &mut S) -> Result<DecodedImage> {
        let image = self.decode(input_data)?;
        {
            let _span = tracing::info_span!("deliver_raster").entered();
            sink.accept(&image)?;
        }
        Ok(image)
    }

    #[instrument(skip(self, input_path))]
    pub fn decode_file<P: AsRef<Path>>(&self, input_path: P) -> Result<DecodedImage> {
        let input_data = read_input(input_path.as_ref())?;
        self.decode(&input_data)
    }

    pub fn decode_file_with_timings<P: AsRef<Path>>(
        &self,
        input_path: P,
    ) -> Result<(DecodedImage, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        let timer = Timer::start("read_input_file");
        let input_data = read_input(input_path.as_ref())?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let (image, decode_timings) = self.decode_with_timings(&input_data)?;
        for step in decode_timings.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }

        Ok((image, timings))
    }

    /// Reads `input_path`, decodes it and hands the result to `sink`.
    pub fn decode_file_into<P: AsRef<Path>, S: RasterSink>(
        &self,
        input_path: P,
        sink: &mut S,
    ) -> Result<(DecodedImage, PipelineTimings)> {
        let (image, mut timings) = self.decode_file_with_timings(input_path)?;

        let timer = Timer::start("deliver_raster");
        {
            let _span = tracing::info_span!("deliver_raster").entered();
            sink.accept(&image)?;
        }
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        Ok((image, timings))
    }
}

fn read_input(input_path: &Path) -> Result<Vec<u8>> {
    info!(input = %input_path.display(), "Reading IMG file");
    let _span = tracing::info_span!("read_input_file").entered();
    std::fs::read(input_path)
        .map_err(|e| DecodeError::InputReadError(format!("{}: {}", input_path.display(), e)))
}

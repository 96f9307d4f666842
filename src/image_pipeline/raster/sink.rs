use tracing::info;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::img::types::DecodedImage;

/// Receives a finished raster, e.g. a viewer or an export step.
pub trait RasterSink {
    fn accept(&mut self, image: &DecodedImage) -> Result<()>;
}

/// Records per-channel means of the last raster it received.
#[derive(Debug, Default, Clone)]
pub struct RasterSummary {
    pub width: usize,
    pub height: usize,
    pub mean_rgb: [f64; 3],
}

impl RasterSink for RasterSummary {
    fn accept(&mut self, image: &DecodedImage) -> Result<()> {
        let raster = &image.raster;
        let cells = (raster.width() * raster.height()).max(1) as f64;
        let mean = |plane: &[f64]| plane.iter().sum::<f64>() / cells;

        self.width = raster.width();
        self.height = raster.height();
        self.mean_rgb = [
            mean(raster.r.as_slice()),
            mean(raster.g.as_slice()),
            mean(raster.b.as_slice()),
        ];

        info!(
            width = self.width,
            height = self.height,
            mean_r = self.mean_rgb[0],
            mean_g = self.mean_rgb[1],
            mean_b = self.mean_rgb[2],
            "Raster summary"
        );
        Ok(())
    }
}

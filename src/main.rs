use xray_img_rs::image_pipeline::{DecodeConfig, ImgToRgbPipeline, RasterSummary};
use xray_img_rs::logger;

use anyhow::Context;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    let input = std::env::args()
        .nth(1)
        .context("usage: xray_img_rs <file.img>")?;

    info!("Starting xray_img_rs...");

    let config = DecodeConfig::builder()
        .edge_enhance(true)
        .build();
    let pipeline = ImgToRgbPipeline::new(config);

    info!(
        "Edge enhancement: {}",
        if pipeline.reader().config().edge_enhance {
            "enabled"
        } else {
            "disabled"
        }
    );

    let mut summary = RasterSummary::default();
    match pipeline.decode_file_into(&input, &mut summary) {
        Ok((image, timings)) => {
            let header = &image.header;
            info!(
                variant = ?image.variant,
                model = %header.model,
                date = %header.date,
                system_id = %header.system_id,
                sequence = header.sequence_number,
                "Decoded {}x{} scan{}",
                image.raster.width(),
                image.raster.height(),
                if image.truncated { " (truncated)" } else { "" }
            );
            if let Some(kv) = header.ray_intensity {
                info!("Ray intensity: {kv:.1} kV");
            }
            timings.log_summary();
        }
        Err(e) => error!("Decode failed: {}", e),
    }

    Ok(())
}

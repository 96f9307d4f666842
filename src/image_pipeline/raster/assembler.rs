//! Scatters decoded columns into dense planes.

use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::img::column_decoder::{ColumnSpan, DecodedColumn};
use crate::image_pipeline::raster::color::{Rgb, hsi_to_rgb};
use crate::image_pipeline::raster::matrix::Matrix;
use crate::image_pipeline::raster::types::{HsiPlanes, RgbRaster};

/// Fill value for HSI cells no column covers.
pub const HSI_BACKGROUND: f64 = 1.0;

/// Builds the HSI planes. Column `k` of the scan lands in raster column `k`,
/// starting at its zero padding row; everything else keeps [`HSI_BACKGROUND`].
pub fn assemble_hsi(
    width: usize,
    height: usize,
    columns: &[DecodedColumn],
) -> anyhow::Result<HsiPlanes> {
    let mut planes = HsiPlanes {
        hue: Matrix::try_filled(width, height, HSI_BACKGROUND)?,
        saturation: Matrix::try_filled(width, height, HSI_BACKGROUND)?,
        intensity: Matrix::try_filled(width, height, HSI_BACKGROUND)?,
    };

    for (x, column) in columns.iter().enumerate().take(width) {
        for (y, sample) in column.span.rows().zip(&column.samples) {
            planes.hue[(y, x)] = sample.hue;
            planes.saturation[(y, x)] = sample.saturation;
            planes.intensity[(y, x)] = sample.intensity;
        }
    }

    debug!(width, height, columns = columns.len(), "Assembled HSI planes");
    Ok(planes)
}

/// Converts the covered cells to RGB. `intensity` is normally the
/// edge-enhanced plane; uncovered cells stay white.
pub fn assemble_rgb(
    planes: &HsiPlanes,
    intensity: &Matrix<f64>,
    spans: &[ColumnSpan],
) -> anyhow::Result<RgbRaster> {
    let (width, height) = (intensity.width(), intensity.height());
    let mut raster = RgbRaster {
        r: Matrix::try_filled(width, height, Rgb::WHITE.r)?,
        g: Matrix::try_filled(width, height, Rgb::WHITE.g)?,
        b: Matrix::try_filled(width, height, Rgb::WHITE.b)?,
    };
    if width == 0 {
        return Ok(raster);
    }

    let RgbRaster { r, g, b } = &mut raster;
    r.as_mut_slice()
        .par_chunks_mut(width)
        .zip(g.as_mut_slice().par_chunks_mut(width))
        .zip(b.as_mut_slice().par_chunks_mut(width))
        .enumerate()
        .for_each(|(y, ((r_row, g_row), b_row))| {
            for (x, span) in spans.iter().enumerate().take(width) {
                if !span.rows().contains(&y) {
                    continue;
                }
                let rgb = hsi_to_rgb(
                    planes.hue[(y, x)],
                    planes.saturation[(y, x)],
                    intensity[(y, x)],
                );
                r_row[x] = rgb.r;
                g_row[x] = rgb.g;
                b_row[x] = rgb.b;
            }
        });

    Ok(raster)
}

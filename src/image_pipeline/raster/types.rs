//! Raster types produced by the assembler

use crate::image_pipeline::raster::color::Rgb;
use crate::image_pipeline::raster::matrix::Matrix;

/// Dense hue, saturation and intensity planes, all in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct HsiPlanes {
    pub hue: Matrix<f64>,
    pub saturation: Matrix<f64>,
    pub intensity: Matrix<f64>,
}

/// Decoded RGB raster, one plane per channel with values in `[0, 255]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbRaster {
    pub r: Matrix<f64>,
    pub g: Matrix<f64>,
    pub b: Matrix<f64>,
}

impl RgbRaster {
    pub fn width(&self) -> usize {
        self.r.width()
    }

    pub fn height(&self) -> usize {
        self.r.height()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        Some(Rgb {
            r: self.r.get(y, x)?,
            g: self.g.get(y, x)?,
            b: self.b.get(y, x)?,
        })
    }

    /// Interleaved 8-bit RGB buffer [R, G, B, R, G, B, ...] for display consumers.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.r
            .as_slice()
            .iter()
            .zip(self.g.as_slice())
            .zip(self.b.as_slice())
            .flat_map(|((&r, &g), &b)| [r as u8, g as u8, b as u8])
            .collect()
    }
}

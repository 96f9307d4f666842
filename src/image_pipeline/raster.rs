//! Raster assembly module
//!
//! Dense planes built from decoded columns, the intensity edge filter and the
//! HSI to RGB conversion.

pub mod assembler;
pub mod color;
pub mod filter;
pub mod matrix;
mod sink;
pub mod types;


pub use color::{Rgb, hsi_to_rgb};
pub use matrix::Matrix;
pub use sink::{RasterSink, RasterSummary};
pub use types::{HsiPlanes, RgbRaster};

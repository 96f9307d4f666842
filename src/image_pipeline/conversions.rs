//! Pipeline conversions module
//!
//! This module contains orchestration logic for decoding IMG containers.

mod img_to_rgb;
mod timing;

#[cfg(test)]
mod tests;

pub use img_to_rgb::ImgToRgbPipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};

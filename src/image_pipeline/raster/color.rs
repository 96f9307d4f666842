//! HSI to RGB conversion.

use std::f64::consts::PI;

const SECTOR: f64 = 2.0 * PI / 3.0;

/// One RGB pixel, each channel in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255.0,
        g: 255.0,
        b: 255.0,
    };
}

/// Converts one HSI pixel to RGB.
///
/// `hue` is normalised to `[0, 1)` and mapped onto `[0, 2π)`; `saturation`
/// and `intensity` are in `[0, 1]`. Each output channel is clamped to `[0, 1]`
/// before scaling to `[0, 255]`.
pub fn hsi_to_rgb(hue: f64, saturation: f64, intensity: f64) -> Rgb {
    let h = hue * 2.0 * PI;
    let (s, i) = (saturation, intensity);

    let (r, g, b) = if (0.0..SECTOR).contains(&h) {
        let b = i * (1.0 - s);
        let r = i * (1.0 + s * h.cos() / (PI / 3.0 - h).cos());
        (r, 3.0 * i - (r + b), b)
    } else if (SECTOR..2.0 * SECTOR).contains(&h) {
        let h = h - SECTOR;
        let r = i * (1.0 - s);
        let g = i * (1.0 + s * h.cos() / (PI / 3.0 - h).cos());
        (r, g, 3.0 * i - (r + g))
    } else {
        // Assumes the hue was normalised into [0, 1).
        let h = h - 2.0 * SECTOR;
        let g = i * (1.0 - s);
        let b = i * (1.0 + s * h.cos() / (PI / 3.0 - h).cos());
        (3.0 * i - (g + b), g, b)
    };

    Rgb {
        r: r.clamp(0.0, 1.0) * 255.0,
        g: g.clamp(0.0, 1.0) * 255.0,
        b: b.clamp(0.0, 1.0) * 255.0,
    }
}

//! Calibration tables mapping raw pixel-group bytes to HSI components.
//!
//! Built once per process and shared read-only by every decode.

use std::sync::LazyLock;

/// Number of hue entries, one per byte value.
pub const HUE_ENTRIES: usize = 256;

/// Number of intensity entries, one per 11-bit combined index.
pub const INTENSITY_ENTRIES: usize = 1 << 11;

/// Highest hue byte used when indexing the saturation matrix.
pub const SATURATION_CLAMP: u8 = 32;

/// Saturation columns per intensity row.
pub const SATURATION_STRIDE: usize = SATURATION_CLAMP as usize + 1;

const INTENSITY_GAMMA: f64 = 1.0 / 2.2;

static TABLE: LazyLock<HsiLookupTable> = LazyLock::new(HsiLookupTable::build);

#[derive(Debug)]
pub struct HsiLookupTable {
    h_curve: Vec<f64>,
    i_curve: Vec<f64>,
    s_matrix: Vec<f64>,
}

impl HsiLookupTable {
    /// The process-wide table.
    pub fn shared() -> &'static HsiLookupTable {
        &TABLE
    }

    fn build() -> Self {
        let h_curve = (0..HUE_ENTRIES)
            .map(|b| b as f64 / HUE_ENTRIES as f64)
            .collect();

        let i_curve: Vec<f64> = (0..INTENSITY_ENTRIES)
            .map(|idx| (idx as f64 / (INTENSITY_ENTRIES - 1) as f64).powf(INTENSITY_GAMMA))
            .collect();

        // Chroma fades out towards black and white.
        let s_matrix = i_curve
            .iter()
            .flat_map(|&intensity| {
                let envelope = 4.0 * intensity * (1.0 - intensity);
                (0..SATURATION_STRIDE).map(move |c| {
                    (c as f64 / SATURATION_CLAMP as f64 * envelope).clamp(0.0, 1.0)
                })
            })
            .collect();

        Self {
            h_curve,
            i_curve,
            s_matrix,
        }
    }

    pub fn hue(&self, b: u8) -> f64 {
        self.h_curve[usize::from(b)]
    }

    /// `index` must be an 11-bit combined index.
    pub fn intensity(&self, index: usize) -> f64 {
        self.i_curve[index]
    }

    pub fn saturation(&self, index: usize, hue_byte: u8) -> f64 {
        let clamped = hue_byte.min(SATURATION_CLAMP);
        self.s_matrix[index * SATURATION_STRIDE + usize::from(clamped)]
    }

    pub fn h_curve(&self) -> &[f64] {
        &self.h_curve
    }

    pub fn i_curve(&self) -> &[f64] {
        &self.i_curve
    }

    pub fn s_matrix(&self) -> &[f64] {
        &self.s_matrix
    }
}

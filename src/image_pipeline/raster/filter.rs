//! Edge enhancement over the intensity plane.
//!
//! A fixed 3×7 kernel is applied with toroidal wrap on both axes: neighbour
//! rows are taken modulo the height and neighbour columns modulo the width.
//! Output cells are clamped to `[0, 1]`.

use rayon::prelude::*;

use crate::image_pipeline::raster::matrix::Matrix;

pub const KERNEL_ROWS: usize = 3;
pub const KERNEL_COLS: usize = 7;

#[rustfmt::skip]
pub const EDGE_KERNEL: [[f64; KERNEL_COLS]; KERNEL_ROWS] = [
    [-0.010561056105611,  0.190099009900990, -0.359075907590759, -1.351815181518151,  0.517491749174917, -0.052805280528053, 0.0],
    [ 0.039273927392740, -0.706930693069306,  1.335313531353137,  5.027062706270626, -1.924422442244224,  0.196369636963698, 0.0],
    [-0.018811881188119,  0.338613861386138, -0.639603960396040, -2.407920792079207,  0.921782178217821, -0.094059405940595, 0.0],
];

fn wrap(index: usize, offset: usize, centre: usize, extent: usize) -> usize {
    (index + offset + extent * centre - centre) % extent
}

pub fn edge_enhance(intensity: &Matrix<f64>) -> Matrix<f64> {
    let (width, height) = (intensity.width(), intensity.height());
    let mut out = intensity.clone();
    if width == 0 || height == 0 {
        return out;
    }

    out.as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                let mut acc = 0.0;
                for (ky, weights) in EDGE_KERNEL.iter().enumerate() {
                    let src = intensity.row(wrap(y, ky, KERNEL_ROWS / 2, height));
                    for (kx, &w) in weights.iter().enumerate() {
                        acc += src[wrap(x, kx, KERNEL_COLS / 2, width)] * w;
                    }
                }
                *cell = acc.clamp(0.0, 1.0);
            }
        });

    out
}

//! Dense row-major 2-D buffer.

use std::ops::{Index, IndexMut};

use anyhow::{Context, anyhow};

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy> Matrix<T> {
    /// Allocates a `width × height` matrix with every cell set to `value`.
    ///
    /// Allocation failures are returned rather than aborting, since the
    /// dimensions come straight from the file.
    pub fn try_filled(width: usize, height: usize, value: T) -> anyhow::Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or_else(|| anyhow!("matrix size {width}x{height} overflows"))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .with_context(|| format!("allocating {width}x{height} matrix"))?;
        data.resize(len, value);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> anyhow::Result<Self> {
        if data.len() != width * height {
            return Err(anyhow!(
                "buffer of {} cells does not match {width}x{height}",
                data.len()
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.width..(row + 1) * self.width]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(col < self.width, "column {col} out of bounds");
        &self.data[row * self.width + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(col < self.width, "column {col} out of bounds");
        &mut self.data[row * self.width + col]
    }
}

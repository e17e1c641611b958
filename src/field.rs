//! Dense storage for generated setup fields.
//!
//! Fields use contiguous `Vec<f64>` storage with a documented index layout
//! for cache-friendly sequential access. Horizontal layout matches
//! [`HorizontalGrid`](crate::grid::HorizontalGrid): `j`-major rows.

use std::fmt;

/// 2-D cell field.
///
/// Layout: `data[j * nx + i]` for column `i`, row `j`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field2D {
    nx: usize,
    ny: usize,
    data: Vec<f64>,
}

impl Field2D {
    /// Create a field with every cell set to `value`.
    pub fn filled(nx: usize, ny: usize, value: f64) -> Self {
        Self {
            nx,
            ny,
            data: vec![value; nx * ny],
        }
    }

    /// Create a zero field.
    pub fn zeros(nx: usize, ny: usize) -> Self {
        Self::filled(nx, ny, 0.0)
    }

    /// Number of cells in longitude.
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of cells in latitude.
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Value at cell (i, j).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[j * self.nx + i]
    }

    /// Set the value at cell (i, j).
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[j * self.nx + i] = value;
    }

    /// Flat view of the data in layout order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable flat view of the data in layout order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Min/max/mean summary of the field.
    pub fn statistics(&self) -> FieldStatistics {
        let min = self.data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = self.data.iter().sum::<f64>() / self.data.len() as f64;
        FieldStatistics { min, max, mean }
    }

    /// Fraction of cells satisfying a predicate.
    pub fn fraction_where<P: Fn(f64) -> bool>(&self, pred: P) -> f64 {
        let n = self.data.iter().filter(|&&v| pred(v)).count();
        n as f64 / self.data.len() as f64
    }
}

/// Min/max/mean summary of a field.
#[derive(Clone, Copy, Debug)]
pub struct FieldStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl fmt::Display for FieldStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min={:.3}, max={:.3}, mean={:.3}",
            self.min, self.max, self.mean
        )
    }
}

/// 3-D field over horizontal cells and vertical levels.
///
/// Layout: `data[(k * ny + j) * nx + i]`, level-major, so one horizontal
/// level is a contiguous slice.
#[derive(Clone, Debug, PartialEq)]
pub struct Field3D {
    nx: usize,
    ny: usize,
    nz: usize,
    data: Vec<f64>,
}

impl Field3D {
    /// Create a field with every entry set to `value`.
    pub fn filled(nx: usize, ny: usize, nz: usize, value: f64) -> Self {
        Self {
            nx,
            ny,
            nz,
            data: vec![value; nx * ny * nz],
        }
    }

    /// Create a zero field.
    pub fn zeros(nx: usize, ny: usize, nz: usize) -> Self {
        Self::filled(nx, ny, nz, 0.0)
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Number of vertical levels.
    #[inline]
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Value at cell (i, j), level k.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> f64 {
        self.data[(k * self.ny + j) * self.nx + i]
    }

    /// Set the value at cell (i, j), level k.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: f64) {
        self.data[(k * self.ny + j) * self.nx + i] = value;
    }

    /// The horizontal slab at level k.
    #[inline]
    pub fn level(&self, k: usize) -> &[f64] {
        let n = self.nx * self.ny;
        &self.data[k * n..(k + 1) * n]
    }

    /// Mutable horizontal slab at level k.
    #[inline]
    pub fn level_mut(&mut self, k: usize) -> &mut [f64] {
        let n = self.nx * self.ny;
        &mut self.data[k * n..(k + 1) * n]
    }

    /// Flat view of the data in layout order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Vertical column at cell (i, j), bottom-up ordering left to the caller.
    pub fn column(&self, i: usize, j: usize) -> Vec<f64> {
        (0..self.nz).map(|k| self.get(i, j, k)).collect()
    }
}

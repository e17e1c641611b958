//! Analytic shape kernels for composing idealized topography.
//!
//! Each kernel is a pure function of a position `x` already expressed
//! relative to a feature center (or edge) and a positive width `l`.
//! All kernels return values in [0, 1] and are flat outside their active
//! range, so features can be summed without long-range interference.
//!
//! # Kernels
//!
//! - [`bump`]: sine spike, 1 at the center, 0 at and beyond `|x| = l/2`
//! - [`cosine_bell`]: smooth bell, 1 at the center, 0 at and beyond `|x| = l`
//! - [`half_cosine_bell`]: one-sided quarter cosine, active on a single
//!   flank selected by [`Flank`]
//! - [`plateau`]: flat band indicator

use std::f64::consts::{FRAC_PI_2, PI};

/// Which side of a feature edge a one-sided slope faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flank {
    /// Active for positions north of (greater than) the edge.
    North,
    /// Active for positions south of (less than) the edge.
    South,
}

impl Flank {
    /// Sign of the active side: +1 for north, -1 for south.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Flank::North => 1.0,
            Flank::South => -1.0,
        }
    }

    /// The opposite flank.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Flank::North => Flank::South,
            Flank::South => Flank::North,
        }
    }
}

/// Sine-spike bump.
///
/// ```text
/// bump(x, l) = 1 - sin(pi * min(|x|/l, 0.5))
/// ```
///
/// Value 1 at `x = 0`, decaying to 0 at `|x| = l/2`, flat 0 beyond.
#[inline]
pub fn bump(x: f64, l: f64) -> f64 {
    1.0 - (PI * (x.abs() / l).min(0.5)).sin()
}

/// Cosine bell.
///
/// ```text
/// cosine_bell(x, l) = 0.5 * (1 + cos(pi * min(|x|/l, 1)))
/// ```
///
/// Value 1 at `x = 0`, smoothly 0 at `|x| = l` and beyond.
#[inline]
pub fn cosine_bell(x: f64, l: f64) -> f64 {
    0.5 * (1.0 + (PI * (x.abs() / l).min(1.0)).cos())
}

/// One-sided cosine bell.
///
/// On the active side of the edge (selected by `side`) this evaluates
/// `cos(pi/2 * min(|x|/l, 1))`: 1 at the edge, 0 at `|x| = l` and beyond.
/// On the inactive side it is identically 0, as if `x` were already
/// beyond the width.
#[inline]
pub fn half_cosine_bell(x: f64, l: f64, side: Flank) -> f64 {
    if x * side.sign() < 0.0 {
        return 0.0;
    }
    (FRAC_PI_2 * (x.abs() / l).min(1.0)).cos()
}

/// Flat band indicator: 1 for `|x| <= l`, 0 otherwise.
#[inline]
pub fn plateau(x: f64, l: f64) -> f64 {
    if x.abs() <= l { 1.0 } else { 0.0 }
}

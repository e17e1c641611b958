//! Northern-boundary sponge profile: damping rates and restoring targets.
//!
//! The sponge emulates an open boundary by damping model state toward a
//! fixed density-class stratification in a band along the northern edge of
//! the domain. This module only builds the static fields the restoring
//! term needs (a 2-D damping-rate field and a 3-D target interface-height
//! field); the time integration of the restoring itself belongs to the
//! host model.
//!
//! The damping rate ramps linearly with latitude, from zero at the
//! interior edge of the band to the configured rate at the boundary, and
//! is forced to zero over land so wall cells are never damped.

use crate::error::SetupError;
use crate::field::{Field2D, Field3D};
use crate::grid::HorizontalGrid;
use crate::topography::BottomDepth;

/// Target interface heights (m, non-increasing from the surface down),
/// one value per layer interface.
///
/// This is the reference stratification the sponge restores toward. It is
/// identical in every column and varies only with the interface index.
pub const TARGET_INTERFACE_HEIGHTS: [f64; 31] = [
    0.0, -25.0, -50.0, -80.0, -115.0, -155.0, -200.0, -250.0, -310.0, -380.0, -460.0, -550.0,
    -650.0, -760.0, -880.0, -1010.0, -1150.0, -1300.0, -1460.0, -1630.0, -1810.0, -2000.0,
    -2200.0, -2400.0, -2600.0, -2800.0, -3000.0, -3250.0, -3500.0, -3750.0, -4000.0,
];

/// Number of layers implied by the target interface profile.
pub const N_TARGET_LAYERS: usize = TARGET_INTERFACE_HEIGHTS.len() - 1;

/// The two sponge fields handed to the restoring subsystem.
#[derive(Clone, Debug)]
pub struct SpongeFields {
    /// Damping rate per cell (s^-1, >= 0).
    pub damping: Field2D,
    /// Target interface heights per cell and interface (m).
    pub target_interfaces: Field3D,
}

/// Builds the sponge fields for a grid and bathymetry.
#[derive(Clone, Copy, Debug)]
pub struct SpongeBuilder {
    rate: f64,
    width: f64,
    minimum_depth: f64,
}

impl SpongeBuilder {
    /// Create a builder.
    ///
    /// # Arguments
    ///
    /// * `rate` - Damping rate at the northern boundary (s^-1, >= 0)
    /// * `width` - Band width (degrees latitude, >= 0; zero disables the
    ///   sponge entirely)
    /// * `minimum_depth` - Depth at or below which a cell is land (m)
    pub fn new(rate: f64, width: f64, minimum_depth: f64) -> Result<Self, SetupError> {
        for (name, value) in [
            ("sponge_rate", rate),
            ("sponge_width", width),
            ("minimum_depth", minimum_depth),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(SetupError::InvalidParameter {
                    name,
                    reason: format!("must be non-negative and finite, got {}", value),
                });
            }
        }
        Ok(Self {
            rate,
            width,
            minimum_depth,
        })
    }

    /// Damping rate at a latitude, before the land mask is applied.
    ///
    /// Zero south of `north - width`, ramping linearly to `rate` at the
    /// northern boundary `north`.
    #[inline]
    pub fn damping_at(&self, lat: f64, north: f64) -> f64 {
        if self.width <= 0.0 {
            return 0.0;
        }
        let start = north - self.width;
        if lat <= start {
            return 0.0;
        }
        self.rate * ((lat - start) / self.width).min(1.0)
    }

    /// Build the damping field and the broadcast target-interface field.
    pub fn build(&self, grid: &HorizontalGrid, bathymetry: &BottomDepth) -> SpongeFields {
        let north = grid.north_lat();

        let mut damping = Field2D::zeros(grid.nx(), grid.ny());
        for j in 0..grid.ny() {
            for i in 0..grid.nx() {
                if bathymetry.is_land(i, j, self.minimum_depth) {
                    continue;
                }
                let gamma = self.damping_at(grid.lat(i, j), north);
                if gamma > 0.0 {
                    damping.set(i, j, gamma);
                }
            }
        }

        let n_interfaces = TARGET_INTERFACE_HEIGHTS.len();
        let mut target_interfaces = Field3D::zeros(grid.nx(), grid.ny(), n_interfaces);
        for (k, &height) in TARGET_INTERFACE_HEIGHTS.iter().enumerate() {
            target_interfaces.level_mut(k).fill(height);
        }

        SpongeFields {
            damping,
            target_interfaces,
        }
    }
}

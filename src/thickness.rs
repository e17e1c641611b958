//! Initial layer thicknesses from a nominal profile and the bathymetry.
//!
//! Interfaces are laid down from the bottom of each column upward. Every
//! layer is at least the minimum floor thick, and each interface is pinned
//! to its nominal height once the column is deep enough to reach it. Where
//! the bottom is shallower than the nominal column, the deep layers
//! collapse onto the floor and the remaining layers follow the nominal
//! profile, so interfaces never cross.

use crate::error::SetupError;
use crate::field::Field3D;
use crate::sponge::TARGET_INTERFACE_HEIGHTS;
use crate::topography::BottomDepth;

/// Nominal interface heights for a thickness profile.
///
/// Returns `nz + 1` heights, `e0[0] = 0` at the surface and each deeper
/// interface one layer thickness further down (negative).
pub fn nominal_interfaces(profile: &[f64]) -> Vec<f64> {
    let mut e0 = Vec::with_capacity(profile.len() + 1);
    e0.push(0.0);
    let mut z = 0.0;
    for &dz in profile {
        z -= dz;
        e0.push(z);
    }
    e0
}

/// The 30-layer thickness profile matching the sponge target
/// stratification, top to bottom. Convenient for tests and demo
/// configurations; production runs supply their own profile.
pub fn reference_thickness_profile() -> Vec<f64> {
    TARGET_INTERFACE_HEIGHTS
        .windows(2)
        .map(|w| w[0] - w[1])
        .collect()
}

/// Compute initial layer thicknesses for every column.
///
/// # Arguments
///
/// * `profile` - Nominal layer thicknesses (m, top to bottom, all > 0)
/// * `bathymetry` - Generated bottom depths
/// * `min_thickness` - Smallest permitted layer thickness (m, >= 0)
///
/// For a column exactly as deep as the profile total, every layer gets its
/// nominal thickness. Shallower columns fill bottom-up: layers whose
/// nominal interface lies below the bottom collapse to the floor, and the
/// first reachable interface absorbs the difference.
pub fn initialize_thickness(
    profile: &[f64],
    bathymetry: &BottomDepth,
    min_thickness: f64,
) -> Result<Field3D, SetupError> {
    if profile.is_empty() {
        return Err(SetupError::MissingParameter("init_thickness_profile"));
    }
    for (k, &dz) in profile.iter().enumerate() {
        if !(dz > 0.0) || !dz.is_finite() {
            return Err(SetupError::InvalidParameter {
                name: "init_thickness_profile",
                reason: format!("layer {} has non-positive thickness {}", k, dz),
            });
        }
    }
    if min_thickness < 0.0 || !min_thickness.is_finite() {
        return Err(SetupError::InvalidParameter {
            name: "min_thickness",
            reason: format!("must be non-negative and finite, got {}", min_thickness),
        });
    }

    let nz = profile.len();
    let e0 = nominal_interfaces(profile);
    let mut thickness = Field3D::zeros(bathymetry.nx(), bathymetry.ny(), nz);

    for j in 0..bathymetry.ny() {
        for i in 0..bathymetry.nx() {
            let mut interface = -bathymetry.depth(i, j);
            for k in (0..nz).rev() {
                let h = (e0[k] - interface).max(min_thickness);
                thickness.set(i, j, k, h);
                interface = e0[k].max(interface + h);
            }
        }
    }

    Ok(thickness)
}

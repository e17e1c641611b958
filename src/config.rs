//! Run-time configuration for basin setup.
//!
//! Parameters are normally filled in by the host model's parameter loader;
//! this module only defines the values, their defaults, and the validation
//! that runs before any field is generated. A missing required parameter
//! is a fatal error, reported before setup produces any output.

use crate::error::SetupError;

/// Seconds per day, for decay-time conversions.
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Default sponge decay time scale, days.
const DEFAULT_RESTORING_DAYS: f64 = 10.0;

/// Run-time parameters for the basin setup.
///
/// `max_depth` is required at construction; the initial thickness profile
/// is required but has no default and must be supplied with
/// [`with_thickness_profile`](Self::with_thickness_profile) before
/// [`validate`](Self::validate) passes.
#[derive(Clone, Debug)]
pub struct BasinConfig {
    /// Maximum basin depth (m). Must be positive.
    pub max_depth: f64,

    /// Damping rate at the northern boundary (s^-1).
    /// Default: 1 / (10 days).
    pub sponge_rate: f64,

    /// Meridional width of the sponge band (degrees latitude).
    /// Default: 5.0.
    pub sponge_width: f64,

    /// Depth at or below which a cell counts as land (m). Default: 0.0.
    pub minimum_depth: f64,

    /// Smallest permitted layer thickness (m), a vertical-grid constant
    /// supplied by the host model. Default: 1e-10.
    pub min_thickness: f64,

    /// Nominal top-to-bottom layer thicknesses (m), one per model layer.
    /// Required; there is no default.
    pub init_thickness_profile: Option<Vec<f64>>,
}

impl BasinConfig {
    /// Create a configuration with the given maximum depth and default
    /// values for everything else.
    pub fn new(max_depth: f64) -> Self {
        Self {
            max_depth,
            sponge_rate: 1.0 / (DEFAULT_RESTORING_DAYS * SECONDS_PER_DAY),
            sponge_width: 5.0,
            minimum_depth: 0.0,
            min_thickness: 1e-10,
            init_thickness_profile: None,
        }
    }

    /// Set the sponge damping rate (s^-1).
    pub fn with_sponge_rate(mut self, rate: f64) -> Self {
        self.sponge_rate = rate;
        self
    }

    /// Set the sponge band width (degrees latitude).
    pub fn with_sponge_width(mut self, width: f64) -> Self {
        self.sponge_width = width;
        self
    }

    /// Set the land threshold depth (m).
    pub fn with_minimum_depth(mut self, depth: f64) -> Self {
        self.minimum_depth = depth;
        self
    }

    /// Set the minimum layer thickness floor (m).
    pub fn with_min_thickness(mut self, floor: f64) -> Self {
        self.min_thickness = floor;
        self
    }

    /// Set the nominal layer thickness profile (m, top to bottom).
    pub fn with_thickness_profile(mut self, profile: Vec<f64>) -> Self {
        self.init_thickness_profile = Some(profile);
        self
    }

    /// Number of model layers, once a profile has been provided.
    pub fn n_layers(&self) -> Option<usize> {
        self.init_thickness_profile.as_ref().map(Vec::len)
    }

    /// Check the configuration before generation.
    ///
    /// Rejects missing required parameters, out-of-range scalars, and a
    /// thickness profile whose cumulative sum cannot tile the deepest
    /// possible column.
    pub fn validate(&self) -> Result<(), SetupError> {
        if !(self.max_depth > 0.0) || !self.max_depth.is_finite() {
            return Err(SetupError::InvalidParameter {
                name: "max_depth",
                reason: format!("must be positive and finite, got {}", self.max_depth),
            });
        }
        check_non_negative("sponge_rate", self.sponge_rate)?;
        check_non_negative("sponge_width", self.sponge_width)?;
        check_non_negative("minimum_depth", self.minimum_depth)?;
        check_non_negative("min_thickness", self.min_thickness)?;

        let profile = self
            .init_thickness_profile
            .as_ref()
            .ok_or(SetupError::MissingParameter("init_thickness_profile"))?;
        if profile.is_empty() {
            return Err(SetupError::InvalidParameter {
                name: "init_thickness_profile",
                reason: "profile has no layers".to_string(),
            });
        }
        for (k, &dz) in profile.iter().enumerate() {
            if !(dz > 0.0) || !dz.is_finite() {
                return Err(SetupError::InvalidParameter {
                    name: "init_thickness_profile",
                    reason: format!("layer {} has non-positive thickness {}", k, dz),
                });
            }
        }

        let total: f64 = profile.iter().sum();
        if total < self.max_depth * (1.0 - 1e-12) {
            return Err(SetupError::IncompatibleProfile(format!(
                "profile sums to {:.3} m but the basin is {:.3} m deep",
                total, self.max_depth
            )));
        }

        Ok(())
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), SetupError> {
    if value < 0.0 || !value.is_finite() {
        return Err(SetupError::InvalidParameter {
            name,
            reason: format!("must be non-negative and finite, got {}", value),
        });
    }
    Ok(())
}

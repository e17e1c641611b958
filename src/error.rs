//! Error taxonomy for setup-field generation.
//!
//! Every error here is fatal: setup either completes with a full set of
//! output fields or aborts before anything is handed to a collaborator.
//! There is no partial-result or degraded mode.

use thiserror::Error;

/// Error type for basin setup.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A required parameter was never provided.
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    /// A parameter value is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What is wrong with the value.
        reason: String,
    },

    /// The thickness profile cannot tile the configured water column.
    #[error("thickness profile incompatible with bathymetry: {0}")]
    IncompatibleProfile(String),

    /// The grid has no cells.
    #[error("grid has no cells")]
    EmptyGrid,
}

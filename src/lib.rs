//! # idealized-basin
//!
//! Setup-field generation for an idealized, zonally reentrant ocean-basin
//! test configuration: a channel with continental slopes, a land bridge
//! pierced by a narrow passage, and an island-arc ridge partially blocking
//! it.
//!
//! The crate produces three fields, once, at model setup:
//!
//! - a bottom-depth (bathymetry) field composed from analytic shape
//!   kernels plus an ordered pipeline of override rules,
//! - a northern-boundary sponge profile (damping rates and target
//!   interface heights) for the host model's restoring term,
//! - an initial per-column layer-thickness field consistent with a nominal
//!   profile and the generated bathymetry.
//!
//! Everything is a pure function of grid geometry and static
//! configuration: no hidden state, no ordering requirements between cells,
//! and bit-identical output on every run. The optional `parallel` feature
//! enables rayon-based generation for large grids.
//!
//! # Example
//!
//! ```
//! use idealized_basin::{BasinConfig, BasinSetup, HorizontalGrid};
//! use idealized_basin::reference_thickness_profile;
//!
//! let grid = HorizontalGrid::uniform(60, 140, 0.0, 60.0, -70.0, 140.0)?;
//! let config = BasinConfig::new(4000.0)
//!     .with_thickness_profile(reference_thickness_profile());
//!
//! let fields = BasinSetup::new(config).generate(&grid)?;
//! assert_eq!(fields.bathymetry.statistics().max, 4000.0);
//! # Ok::<(), idealized_basin::SetupError>(())
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod grid;
pub mod shape;
pub mod sponge;
pub mod thickness;
pub mod topography;

pub use config::{BasinConfig, SECONDS_PER_DAY};
pub use error::SetupError;
pub use field::{Field2D, Field3D, FieldStatistics};
pub use grid::HorizontalGrid;
pub use shape::{bump, cosine_bell, half_cosine_bell, plateau, Flank};
pub use sponge::{N_TARGET_LAYERS, SpongeBuilder, SpongeFields, TARGET_INTERFACE_HEIGHTS};
pub use thickness::{initialize_thickness, nominal_interfaces, reference_thickness_profile};
pub use topography::{
    ArcTopClamp, BottomDepth, DepthCap, DepthOverride, LandBridge, SpongeFlatten,
    TopographyConfig, TopographyGenerator,
};

/// The complete set of generated setup fields.
#[derive(Clone, Debug)]
pub struct BasinFields {
    /// Bottom depths (m), for the grid/bathymetry subsystem.
    pub bathymetry: BottomDepth,
    /// Damping rates and target interfaces, for the restoring subsystem.
    pub sponge: SpongeFields,
    /// Initial layer thicknesses (m), for the dynamical core.
    pub thickness: Field3D,
}

/// One-call orchestrator wiring the three generators in data-flow order.
///
/// Configuration is validated up front; any fatal error aborts setup
/// before a single field is produced.
#[derive(Clone, Debug)]
pub struct BasinSetup {
    config: BasinConfig,
    topography: TopographyConfig,
}

impl BasinSetup {
    /// Create a setup with the reference basin geometry.
    pub fn new(config: BasinConfig) -> Self {
        Self {
            config,
            topography: TopographyConfig::default(),
        }
    }

    /// Replace the basin geometry.
    pub fn with_topography(mut self, topography: TopographyConfig) -> Self {
        self.topography = topography;
        self
    }

    /// The run-time configuration.
    pub fn config(&self) -> &BasinConfig {
        &self.config
    }

    /// Generate all three fields for a grid.
    pub fn generate(&self, grid: &HorizontalGrid) -> Result<BasinFields, SetupError> {
        self.config.validate()?;

        let generator = TopographyGenerator::new(
            self.topography.clone(),
            self.config.max_depth,
            self.config.sponge_width,
        )?;
        let bathymetry = generator.generate(grid);

        let sponge = SpongeBuilder::new(
            self.config.sponge_rate,
            self.config.sponge_width,
            self.config.minimum_depth,
        )?
        .build(grid, &bathymetry);

        let profile = self
            .config
            .init_thickness_profile
            .as_deref()
            .ok_or(SetupError::MissingParameter("init_thickness_profile"))?;
        let thickness = initialize_thickness(profile, &bathymetry, self.config.min_thickness)?;

        Ok(BasinFields {
            bathymetry,
            sponge,
            thickness,
        })
    }
}

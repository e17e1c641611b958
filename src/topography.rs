//! Bottom-topography generation for the reentrant-channel basin.
//!
//! The bottom starts at full normalized depth (1.0) everywhere and a set
//! of analytic features is subtracted from it: continental shelves flanking
//! the meridional land bridge, an extra slope extension on the eastern
//! edge, a wall along the southern boundary, and a two-limbed island arc
//! partially blocking the channel east of the passage. A fixed sequence of
//! override passes then enforces the hard geometric rules before the field
//! is rescaled to meters:
//!
//! 1. arc-top clamp inside the interior window
//! 2. cap to the [0, 1] normalized range
//! 3. flatten the sponge band to full depth
//! 4. zero the land bridge outside the passage-gap window
//!
//! A later pass wins unconditionally over anything computed before it.
//! All feature positions, widths, and amplitudes live in
//! [`TopographyConfig`]; `Default` gives the reference basin.

use crate::error::SetupError;
use crate::field::{Field2D, FieldStatistics};
use crate::grid::HorizontalGrid;
use crate::shape::{bump, cosine_bell, half_cosine_bell, plateau, Flank};

// =============================================================================
// Configuration
// =============================================================================

/// Geometry of the basin features, in coordinates normalized to the unit
/// square (x eastward, y northward), except `arc_height` which is in
/// meters.
#[derive(Clone, Debug)]
pub struct TopographyConfig {
    /// Height of the island-arc ridge above the abyssal bottom (m).
    pub arc_height: f64,

    /// Southern edge of the reentrant channel.
    pub channel_south: f64,
    /// Northern edge of the reentrant channel.
    pub channel_north: f64,
    /// Meridional width of the passage opening beyond the channel edges;
    /// the land bridge stops half this width short of each edge.
    pub passage_width: f64,

    /// Western edge of the passage-gap longitude window. The land bridge
    /// fills the domain edges outside the window.
    pub gap_west: f64,
    /// Eastern edge of the passage-gap longitude window.
    pub gap_east: f64,

    /// Continental-shelf bump width.
    pub shelf_width: f64,
    /// Continental-shelf amplitude (fraction of full depth).
    pub shelf_amplitude: f64,
    /// Width of the extra slope extension on the eastern edge.
    pub east_slope_width: f64,
    /// Amplitude of the eastern slope extension.
    pub east_slope_amplitude: f64,
    /// Width of the southern-boundary wall bump.
    pub south_wall_width: f64,
    /// Amplitude of the southern-boundary wall.
    pub south_wall_amplitude: f64,

    /// Longitude of the arc ridge crest.
    pub arc_lon: f64,
    /// Zonal width of the arc core bells.
    pub arc_core_lon: f64,
    /// Zonal width of the arc slope bells.
    pub arc_slope_lon: f64,
    /// Latitude of the northern arc limb crest.
    pub arc_limb_north: f64,
    /// Latitude of the southern arc limb crest.
    pub arc_limb_south: f64,
    /// Meridional half-width of each limb's flat core.
    pub arc_core_lat: f64,
    /// Width of the inward-facing limb slopes.
    pub arc_inner_lat: f64,
    /// Width of the outward-facing limb slopes.
    pub arc_outer_lat: f64,

    /// Interior clamp window, kept away from the boundary slopes so the
    /// arc-top clamp cannot flatten the continental shelves.
    pub clamp_west: f64,
    pub clamp_east: f64,
    pub clamp_south: f64,
    pub clamp_north: f64,
}

impl Default for TopographyConfig {
    fn default() -> Self {
        Self {
            arc_height: 1500.0,
            channel_south: 0.075,
            channel_north: 0.225,
            passage_width: 0.05,
            gap_west: 0.05,
            gap_east: 0.95,
            shelf_width: 0.3,
            shelf_amplitude: 1.0,
            east_slope_width: 0.15,
            east_slope_amplitude: 0.35,
            south_wall_width: 0.075,
            south_wall_amplitude: 1.0,
            arc_lon: 0.2,
            arc_core_lon: 0.07,
            arc_slope_lon: 0.1,
            arc_limb_north: 0.2,
            arc_limb_south: 0.1,
            arc_core_lat: 0.04,
            arc_inner_lat: 0.06,
            arc_outer_lat: 0.03,
            clamp_west: 0.1,
            clamp_east: 0.9,
            clamp_south: 0.05,
            clamp_north: 0.95,
        }
    }
}

// =============================================================================
// Override passes
// =============================================================================

/// A hard override applied to the composed normalized depth field.
///
/// Overrides run in a fixed order after feature composition; a later pass
/// wins unconditionally over anything computed before it, which is what
/// resolves the overlapping rules (the land bridge crosses the sponge
/// band at the domain edges, and land wins there).
pub trait DepthOverride {
    /// Apply the override in place. Depths are normalized to [0, 1] at
    /// this stage.
    fn apply(&self, grid: &HorizontalGrid, depth: &mut Field2D);

    /// Short name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Forces cells inside the interior window that came out shallower than
/// the arc-top level back down to exactly that level.
///
/// The arc slope terms overlap between the limbs; without this pass the
/// overlap would carve the ridge crest shallower than the configured arc
/// height.
#[derive(Clone, Copy, Debug)]
pub struct ArcTopClamp {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
    /// Normalized depth of the ridge top, `1 - arc_height / max_depth`.
    pub level: f64,
}

impl DepthOverride for ArcTopClamp {
    fn apply(&self, grid: &HorizontalGrid, depth: &mut Field2D) {
        for j in 0..grid.ny() {
            for i in 0..grid.nx() {
                let (x, y) = grid.normalized(i, j);
                let inside = x >= self.west
                    && x <= self.east
                    && y >= self.south
                    && y <= self.north;
                if inside && depth.get(i, j) < self.level {
                    depth.set(i, j, self.level);
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "arc_top_clamp"
    }
}

/// Caps every cell to the valid normalized range [0, 1].
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthCap;

impl DepthOverride for DepthCap {
    fn apply(&self, grid: &HorizontalGrid, depth: &mut Field2D) {
        for j in 0..grid.ny() {
            for i in 0..grid.nx() {
                let d = depth.get(i, j);
                depth.set(i, j, d.clamp(0.0, 1.0));
            }
        }
    }

    fn name(&self) -> &'static str {
        "depth_cap"
    }
}

/// Flattens the sponge band along the northern boundary to full depth.
///
/// The restoring zone must have no bottom slope.
#[derive(Clone, Copy, Debug)]
pub struct SpongeFlatten {
    /// Band width, degrees latitude from the northern boundary.
    pub width: f64,
}

impl DepthOverride for SpongeFlatten {
    fn apply(&self, grid: &HorizontalGrid, depth: &mut Field2D) {
        let start = grid.north_lat() - self.width;
        for j in 0..grid.ny() {
            for i in 0..grid.nx() {
                if grid.lat(i, j) >= start {
                    depth.set(i, j, 1.0);
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "sponge_flatten"
    }
}

/// Zeroes the land bridge: cells outside the passage-gap longitude window
/// that lie in either excluded latitude band. This closes the basin except
/// through the passage.
#[derive(Clone, Copy, Debug)]
pub struct LandBridge {
    pub gap_west: f64,
    pub gap_east: f64,
    /// Cells strictly north of this are in the northern excluded band.
    pub north_limit: f64,
    /// Cells strictly south of this are in the southern excluded band.
    pub south_limit: f64,
}

impl DepthOverride for LandBridge {
    fn apply(&self, grid: &HorizontalGrid, depth: &mut Field2D) {
        for j in 0..grid.ny() {
            for i in 0..grid.nx() {
                let (x, y) = grid.normalized(i, j);
                let outside_gap = x < self.gap_west || x > self.gap_east;
                let excluded = y > self.north_limit || y < self.south_limit;
                if outside_gap && excluded {
                    depth.set(i, j, 0.0);
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "land_bridge"
    }
}

// =============================================================================
// Generator
// =============================================================================

/// Generated bottom-depth field in meters. Immutable after generation.
#[derive(Clone, Debug)]
pub struct BottomDepth {
    field: Field2D,
    max_depth: f64,
}

impl BottomDepth {
    /// Wrap an existing depth field. Mainly useful for tests; normal use
    /// goes through [`TopographyGenerator::generate`].
    pub fn new(field: Field2D, max_depth: f64) -> Self {
        Self { field, max_depth }
    }

    /// Depth at cell (i, j), meters (positive down).
    #[inline]
    pub fn depth(&self, i: usize, j: usize) -> f64 {
        self.field.get(i, j)
    }

    /// Whether the cell counts as land for the given threshold depth.
    #[inline]
    pub fn is_land(&self, i: usize, j: usize, minimum_depth: f64) -> bool {
        self.depth(i, j) <= minimum_depth
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.field.nx()
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.field.ny()
    }

    /// The configured maximum depth, meters.
    #[inline]
    pub fn max_depth(&self) -> f64 {
        self.max_depth
    }

    /// Borrow the underlying field.
    #[inline]
    pub fn field(&self) -> &Field2D {
        &self.field
    }

    /// Min/max/mean depth summary.
    pub fn statistics(&self) -> FieldStatistics {
        self.field.statistics()
    }

    /// Fraction of cells at or below the given land threshold.
    pub fn land_fraction(&self, minimum_depth: f64) -> f64 {
        self.field.fraction_where(|d| d <= minimum_depth)
    }
}

/// Composes the analytic features into a bottom-depth field and applies
/// the override pipeline.
#[derive(Clone, Debug)]
pub struct TopographyGenerator {
    config: TopographyConfig,
    max_depth: f64,
    sponge_width: f64,
}

impl TopographyGenerator {
    /// Create a generator.
    ///
    /// # Arguments
    ///
    /// * `config` - Feature geometry; [`TopographyConfig::default`] is the
    ///   reference basin
    /// * `max_depth` - Full basin depth (m, > 0)
    /// * `sponge_width` - Sponge band width (degrees latitude, >= 0)
    pub fn new(
        config: TopographyConfig,
        max_depth: f64,
        sponge_width: f64,
    ) -> Result<Self, SetupError> {
        validate(&config, max_depth, sponge_width)?;
        Ok(Self {
            config,
            max_depth,
            sponge_width,
        })
    }

    /// The feature geometry.
    #[inline]
    pub fn config(&self) -> &TopographyConfig {
        &self.config
    }

    /// Arc ridge height as a fraction of the full depth.
    #[inline]
    pub fn arc_fraction(&self) -> f64 {
        self.config.arc_height / self.max_depth
    }

    /// Generate the bottom-depth field for a grid.
    pub fn generate(&self, grid: &HorizontalGrid) -> BottomDepth {
        let mut field = Field2D::zeros(grid.nx(), grid.ny());
        for j in 0..grid.ny() {
            for i in 0..grid.nx() {
                let (x, y) = grid.normalized(i, j);
                field.set(i, j, self.composed_depth(x, y));
            }
        }
        self.finish(grid, field)
    }

    /// Generate the bottom-depth field using one rayon task per grid row.
    ///
    /// Bit-identical to [`generate`](Self::generate): every cell is an
    /// independent function of its own coordinates.
    #[cfg(feature = "parallel")]
    pub fn generate_parallel(&self, grid: &HorizontalGrid) -> BottomDepth {
        use rayon::prelude::*;

        let nx = grid.nx();
        let mut field = Field2D::zeros(nx, grid.ny());
        field
            .as_mut_slice()
            .par_chunks_mut(nx)
            .enumerate()
            .for_each(|(j, row)| {
                for (i, d) in row.iter_mut().enumerate() {
                    let (x, y) = grid.normalized(i, j);
                    *d = self.composed_depth(x, y);
                }
            });
        self.finish(grid, field)
    }

    /// The override passes in application order.
    pub fn override_passes(&self) -> Vec<Box<dyn DepthOverride>> {
        let c = &self.config;
        vec![
            Box::new(ArcTopClamp {
                west: c.clamp_west,
                east: c.clamp_east,
                south: c.clamp_south,
                north: c.clamp_north,
                level: 1.0 - self.arc_fraction(),
            }),
            Box::new(DepthCap),
            Box::new(SpongeFlatten {
                width: self.sponge_width,
            }),
            Box::new(LandBridge {
                gap_west: c.gap_west,
                gap_east: c.gap_east,
                north_limit: c.channel_north + 0.5 * c.passage_width,
                south_limit: c.channel_south - 0.5 * c.passage_width,
            }),
        ]
    }

    /// Normalized composed depth at a normalized position, before any
    /// override pass runs.
    pub fn composed_depth(&self, x: f64, y: f64) -> f64 {
        let c = &self.config;
        let sa = self.arc_fraction();
        let gate = self.outside_channel(y);

        let mut d = 1.0;

        // Continental shelves flanking the domain edges, absent inside the
        // reentrant channel.
        d -= c.shelf_amplitude * bump(x, c.shelf_width) * gate;
        d -= c.shelf_amplitude * bump(x - 1.0, c.shelf_width) * gate;
        // Gentler slope extension on the eastern side only.
        d -= c.east_slope_amplitude * cosine_bell(x - 1.0, c.east_slope_width) * gate;
        // Southern wall across the full zonal extent.
        d -= c.south_wall_amplitude * bump(y, c.south_wall_width);
        // Island arc: a northern and a southern ridge limb.
        d -= sa * self.arc_limb(x, y, c.arc_limb_north, Flank::North);
        d -= sa * self.arc_limb(x, y, c.arc_limb_south, Flank::South);

        d
    }

    /// Latitude gate for the boundary slopes: 1 outside the channel band,
    /// 0 inside it. Built from two plateau windows spanning everything
    /// north of the channel's northern edge and south of its southern edge.
    fn outside_channel(&self, y: f64) -> f64 {
        let c = &self.config;
        let north = plateau(
            y - 0.5 * (1.0 + c.channel_north),
            0.5 * (1.0 - c.channel_north),
        );
        let south = plateau(y - 0.5 * c.channel_south, 0.5 * c.channel_south);
        north.max(south)
    }

    /// One arc limb: a flat-topped core plus one-sided slopes on the side
    /// facing into the channel (inner) and away from it (outer). Returns
    /// the unscaled shape in [0, ~2]; the caller applies the arc fraction.
    fn arc_limb(&self, x: f64, y: f64, limb_lat: f64, outward: Flank) -> f64 {
        let c = &self.config;
        let dx = x - c.arc_lon;
        let s = outward.sign();
        let inward = outward.opposite();

        let core = cosine_bell(dx, c.arc_core_lon) * plateau(y - limb_lat, c.arc_core_lat);
        let inner = cosine_bell(dx, c.arc_slope_lon)
            * half_cosine_bell(y - (limb_lat - s * c.arc_core_lat), c.arc_inner_lat, inward);
        let outer = cosine_bell(dx, c.arc_slope_lon)
            * half_cosine_bell(y - (limb_lat + s * c.arc_core_lat), c.arc_outer_lat, outward);

        core + inner + outer
    }

    fn finish(&self, grid: &HorizontalGrid, mut field: Field2D) -> BottomDepth {
        for pass in self.override_passes() {
            pass.apply(grid, &mut field);
        }
        for d in field.as_mut_slice() {
            *d *= self.max_depth;
        }
        BottomDepth::new(field, self.max_depth)
    }
}

fn validate(
    config: &TopographyConfig,
    max_depth: f64,
    sponge_width: f64,
) -> Result<(), SetupError> {
    if !(max_depth > 0.0) || !max_depth.is_finite() {
        return Err(SetupError::InvalidParameter {
            name: "max_depth",
            reason: format!("must be positive and finite, got {}", max_depth),
        });
    }
    if !(config.arc_height >= 0.0) || config.arc_height > max_depth {
        return Err(SetupError::InvalidParameter {
            name: "arc_height",
            reason: format!(
                "must lie in [0, max_depth = {}], got {}",
                max_depth, config.arc_height
            ),
        });
    }
    if sponge_width < 0.0 {
        return Err(SetupError::InvalidParameter {
            name: "sponge_width",
            reason: format!("must be non-negative, got {}", sponge_width),
        });
    }

    let widths = [
        ("shelf_width", config.shelf_width),
        ("east_slope_width", config.east_slope_width),
        ("south_wall_width", config.south_wall_width),
        ("arc_core_lon", config.arc_core_lon),
        ("arc_slope_lon", config.arc_slope_lon),
        ("arc_core_lat", config.arc_core_lat),
        ("arc_inner_lat", config.arc_inner_lat),
        ("arc_outer_lat", config.arc_outer_lat),
    ];
    for (name, w) in widths {
        if !(w > 0.0) {
            return Err(SetupError::InvalidParameter {
                name,
                reason: format!("feature width must be positive, got {}", w),
            });
        }
    }

    if !(config.channel_south < config.channel_north) {
        return Err(SetupError::InvalidParameter {
            name: "channel_north",
            reason: format!(
                "channel edges crossed: south {} >= north {}",
                config.channel_south, config.channel_north
            ),
        });
    }
    if config.passage_width < 0.0 {
        return Err(SetupError::InvalidParameter {
            name: "passage_width",
            reason: format!("must be non-negative, got {}", config.passage_width),
        });
    }
    let south_limit = config.channel_south - 0.5 * config.passage_width;
    let north_limit = config.channel_north + 0.5 * config.passage_width;
    if south_limit < 0.0 || north_limit > 1.0 {
        return Err(SetupError::InvalidParameter {
            name: "passage_width",
            reason: format!(
                "excluded bands [0, {:.4}) and ({:.4}, 1] leave no room at the boundaries",
                south_limit, north_limit
            ),
        });
    }
    if !(config.gap_west < config.gap_east)
        || config.gap_west < 0.0
        || config.gap_east > 1.0
    {
        return Err(SetupError::InvalidParameter {
            name: "gap_west",
            reason: format!(
                "passage-gap window [{}, {}] is not a sub-interval of [0, 1]",
                config.gap_west, config.gap_east
            ),
        });
    }
    if !(config.clamp_west <= config.clamp_east) || !(config.clamp_south <= config.clamp_north)
    {
        return Err(SetupError::InvalidParameter {
            name: "clamp_west",
            reason: "interior clamp window is inverted".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn reference_generator() -> TopographyGenerator {
        TopographyGenerator::new(TopographyConfig::default(), 4000.0, 5.0).unwrap()
    }

    /// Grid with a single cell at the given normalized position, on the
    /// reference 60 x 140 degree domain.
    fn one_cell_grid(x: f64, y: f64) -> HorizontalGrid {
        HorizontalGrid::from_cells(
            1,
            1,
            vec![x * 60.0],
            vec![-70.0 + y * 140.0],
            0.0,
            60.0,
            -70.0,
            140.0,
        )
        .unwrap()
    }

    #[test]
    fn test_interior_is_full_depth() {
        let generator = reference_generator();
        assert!((generator.composed_depth(0.5, 0.5) - 1.0).abs() < TOL);
        assert!((generator.composed_depth(0.4, 0.7) - 1.0).abs() < TOL);
    }

    #[test]
    fn test_arc_core_center_depth() {
        let generator = reference_generator();
        let config = TopographyConfig::default();

        // The limb crest sits exactly at the arc-top level after the clamp.
        for limb in [config.arc_limb_north, config.arc_limb_south] {
            let grid = one_cell_grid(config.arc_lon, limb);
            let depth = generator.generate(&grid);
            assert_eq!(
                depth.depth(0, 0),
                2500.0,
                "arc crest at y = {} should sit at 1 - 1500/4000 of full depth",
                limb
            );
        }
    }

    #[test]
    fn test_arc_saddle_clamped() {
        let generator = reference_generator();
        let config = TopographyConfig::default();
        let mid = 0.5 * (config.arc_limb_north + config.arc_limb_south);

        // Between the limbs the overlapping slopes dig below the arc top;
        // the clamp must restore it exactly.
        let raw = generator.composed_depth(config.arc_lon, mid);
        assert!(raw < 0.625, "expected overlap to over-deepen, got {}", raw);

        let depth = generator.generate(&one_cell_grid(config.arc_lon, mid));
        assert_eq!(depth.depth(0, 0), 2500.0);
    }

    #[test]
    fn test_shelf_slope_outside_channel() {
        let generator = reference_generator();

        // Outside the channel the western shelf rises toward the edge.
        let deep = generator.composed_depth(0.14, 0.5);
        let shallow = generator.composed_depth(0.06, 0.5);
        assert!(shallow < deep, "shelf should shoal toward the boundary");

        // Inside the channel the gate removes the shelf entirely.
        let in_channel = generator.composed_depth(0.06, 0.15);
        assert!(in_channel > shallow);
    }

    #[test]
    fn test_southern_wall_reaches_zero() {
        let generator = reference_generator();
        assert!(generator.composed_depth(0.5, 0.0).abs() < TOL);
    }

    #[test]
    fn test_sponge_band_flattened() {
        let generator = reference_generator();
        // Latitude 68 is inside the 5-degree sponge band; the cell also
        // sits over the eastern slope, which the flatten pass must erase.
        let grid = one_cell_grid(0.93, (68.0 + 70.0) / 140.0);
        let depth = generator.generate(&grid);
        assert_eq!(depth.depth(0, 0), 4000.0);
    }

    #[test]
    fn test_land_bridge_wins_over_sponge() {
        let generator = reference_generator();
        // Same latitude as above but on the edge strip: the land bridge
        // runs after the sponge flatten and wins.
        let grid = one_cell_grid(0.02, (68.0 + 70.0) / 140.0);
        let depth = generator.generate(&grid);
        assert_eq!(depth.depth(0, 0), 0.0);
    }

    #[test]
    fn test_land_bridge_spares_the_passage() {
        let generator = reference_generator();
        let config = TopographyConfig::default();

        // Edge strip inside the excluded bands is land.
        let north_band = generator.generate(&one_cell_grid(0.02, 0.5));
        assert_eq!(north_band.depth(0, 0), 0.0);
        let south_band = generator.generate(&one_cell_grid(0.97, 0.02));
        assert_eq!(south_band.depth(0, 0), 0.0);

        // Edge strip at channel latitudes stays open water.
        let mid = 0.5 * (config.channel_south + config.channel_north);
        let passage = generator.generate(&one_cell_grid(0.02, mid));
        assert!(
            passage.depth(0, 0) > 0.0,
            "the passage must stay open through the land bridge"
        );
    }

    #[test]
    fn test_depth_bounds_on_reference_grid() {
        let generator = reference_generator();
        let grid = HorizontalGrid::uniform(60, 140, 0.0, 60.0, -70.0, 140.0).unwrap();
        let depth = generator.generate(&grid);

        for j in 0..grid.ny() {
            for i in 0..grid.nx() {
                let d = depth.depth(i, j);
                assert!(
                    (0.0..=4000.0).contains(&d),
                    "depth {} out of bounds at ({}, {})",
                    d,
                    i,
                    j
                );
            }
        }

        let stats = depth.statistics();
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 4000.0);
        assert!(depth.land_fraction(0.0) > 0.0);
        assert!(depth.land_fraction(0.0) < 0.5);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = reference_generator();
        let grid = HorizontalGrid::uniform(30, 70, 0.0, 60.0, -70.0, 140.0).unwrap();
        let first = generator.generate(&grid);
        let second = generator.generate(&grid);
        assert_eq!(first.field(), second.field());
    }

    #[test]
    fn test_override_order_is_auditable() {
        let generator = reference_generator();
        let names: Vec<_> = generator
            .override_passes()
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(
            names,
            vec!["arc_top_clamp", "depth_cap", "sponge_flatten", "land_bridge"]
        );
    }

    #[test]
    fn test_sponge_flatten_pass_in_isolation() {
        let grid = HorizontalGrid::uniform(2, 10, 0.0, 60.0, -70.0, 140.0).unwrap();
        let mut field = Field2D::filled(2, 10, 0.3);
        SpongeFlatten { width: 14.0 }.apply(&grid, &mut field);

        // Top row (lat 63) is inside the band, middle rows are not.
        assert_eq!(field.get(0, 9), 1.0);
        assert_eq!(field.get(0, 5), 0.3);
    }

    #[test]
    fn test_land_bridge_pass_in_isolation() {
        // 20 x 20 cells: normalized centers at 0.025, 0.075, ..., 0.975.
        let grid = HorizontalGrid::uniform(20, 20, 0.0, 60.0, -70.0, 140.0).unwrap();
        let mut field = Field2D::filled(20, 20, 1.0);
        LandBridge {
            gap_west: 0.05,
            gap_east: 0.95,
            north_limit: 0.25,
            south_limit: 0.05,
        }
        .apply(&grid, &mut field);

        // Corner cells: outside the gap window, inside an excluded band.
        assert_eq!(field.get(0, 19), 0.0);
        assert_eq!(field.get(19, 0), 0.0);
        // Interior cell untouched.
        assert_eq!(field.get(10, 10), 1.0);
        // Edge cell at channel latitudes untouched (y = 0.175).
        assert_eq!(field.get(0, 3), 1.0);
    }

    #[test]
    fn test_negative_passage_width_rejected() {
        let config = TopographyConfig {
            passage_width: -0.1,
            ..TopographyConfig::default()
        };
        assert!(TopographyGenerator::new(config, 4000.0, 5.0).is_err());
    }

    #[test]
    fn test_crossed_channel_edges_rejected() {
        let config = TopographyConfig {
            channel_south: 0.3,
            channel_north: 0.2,
            ..TopographyConfig::default()
        };
        assert!(TopographyGenerator::new(config, 4000.0, 5.0).is_err());
    }

    #[test]
    fn test_arc_taller_than_basin_rejected() {
        let config = TopographyConfig {
            arc_height: 5000.0,
            ..TopographyConfig::default()
        };
        assert!(TopographyGenerator::new(config, 4000.0, 5.0).is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let generator = reference_generator();
        let grid = HorizontalGrid::uniform(48, 96, 0.0, 60.0, -70.0, 140.0).unwrap();
        let serial = generator.generate(&grid);
        let parallel = generator.generate_parallel(&grid);
        assert_eq!(serial.field(), parallel.field());
    }
}

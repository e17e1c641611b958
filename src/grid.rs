//! Horizontal grid geometry.
//!
//! The generators only need per-cell longitude/latitude and the domain
//! extents; the full grid machinery (metrics, staggering, halos) lives in
//! the host model. A [`HorizontalGrid`] is read-only after construction
//! and can be shared freely across parallel workers.

use crate::error::SetupError;

/// Cell-center coordinates and domain extents for a rectangular grid.
///
/// Layout: `lon[j * nx + i]`, `lat[j * nx + i]` for column `i`, row `j`,
/// with `i` increasing eastward and `j` increasing northward.
#[derive(Clone, Debug)]
pub struct HorizontalGrid {
    nx: usize,
    ny: usize,
    lon: Vec<f64>,
    lat: Vec<f64>,
    west_lon: f64,
    south_lat: f64,
    len_lon: f64,
    len_lat: f64,
}

impl HorizontalGrid {
    /// Create a uniform grid with cell centers spanning the given extents.
    ///
    /// # Arguments
    ///
    /// * `nx`, `ny` - Number of cells in longitude and latitude
    /// * `west_lon` - Western domain edge (degrees)
    /// * `len_lon` - Zonal extent (degrees, > 0)
    /// * `south_lat` - Southern domain edge (degrees)
    /// * `len_lat` - Meridional extent (degrees, > 0)
    pub fn uniform(
        nx: usize,
        ny: usize,
        west_lon: f64,
        len_lon: f64,
        south_lat: f64,
        len_lat: f64,
    ) -> Result<Self, SetupError> {
        if nx == 0 || ny == 0 {
            return Err(SetupError::EmptyGrid);
        }
        check_extents(len_lon, len_lat)?;

        let dx = len_lon / nx as f64;
        let dy = len_lat / ny as f64;
        let mut lon = Vec::with_capacity(nx * ny);
        let mut lat = Vec::with_capacity(nx * ny);
        for j in 0..ny {
            let y = south_lat + (j as f64 + 0.5) * dy;
            for i in 0..nx {
                lon.push(west_lon + (i as f64 + 0.5) * dx);
                lat.push(y);
            }
        }

        Ok(Self {
            nx,
            ny,
            lon,
            lat,
            west_lon,
            south_lat,
            len_lon,
            len_lat,
        })
    }

    /// Create a grid from explicit per-cell coordinates.
    ///
    /// `lon` and `lat` must both have length `nx * ny` in the row-major
    /// layout documented on the type.
    pub fn from_cells(
        nx: usize,
        ny: usize,
        lon: Vec<f64>,
        lat: Vec<f64>,
        west_lon: f64,
        len_lon: f64,
        south_lat: f64,
        len_lat: f64,
    ) -> Result<Self, SetupError> {
        if nx == 0 || ny == 0 {
            return Err(SetupError::EmptyGrid);
        }
        check_extents(len_lon, len_lat)?;
        if lon.len() != nx * ny || lat.len() != nx * ny {
            return Err(SetupError::InvalidParameter {
                name: "grid coordinates",
                reason: format!(
                    "expected {} cells, got {} longitudes and {} latitudes",
                    nx * ny,
                    lon.len(),
                    lat.len()
                ),
            });
        }

        Ok(Self {
            nx,
            ny,
            lon,
            lat,
            west_lon,
            south_lat,
            len_lon,
            len_lat,
        })
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

    /// Total cell count.
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.nx * self.ny
    }

    /// Flat index of cell (i, j).
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        j * self.nx + i
    }

    /// Longitude of cell (i, j), degrees.
    #[inline]
    pub fn lon(&self, i: usize, j: usize) -> f64 {
        self.lon[self.index(i, j)]
    }

    /// Latitude of cell (i, j), degrees.
    #[inline]
    pub fn lat(&self, i: usize, j: usize) -> f64 {
        self.lat[self.index(i, j)]
    }

    /// Cell position normalized to the unit square.
    ///
    /// Returns `(x, y)` with `x = (lon - west) / len_lon` and
    /// `y = (lat - south) / len_lat`, both in [0, 1] for cells inside
    /// the domain.
    #[inline]
    pub fn normalized(&self, i: usize, j: usize) -> (f64, f64) {
        (
            (self.lon(i, j) - self.west_lon) / self.len_lon,
            (self.lat(i, j) - self.south_lat) / self.len_lat,
        )
    }

    /// Western domain edge, degrees.
    #[inline]
    pub fn west_lon(&self) -> f64 {
        self.west_lon
    }

    /// Southern domain edge, degrees.
    #[inline]
    pub fn south_lat(&self) -> f64 {
        self.south_lat
    }

    /// Zonal extent, degrees.
    #[inline]
    pub fn len_lon(&self) -> f64 {
        self.len_lon
    }

    /// Meridional extent, degrees.
    #[inline]
    pub fn len_lat(&self) -> f64 {
        self.len_lat
    }

    /// Northern domain edge, degrees.
    #[inline]
    pub fn north_lat(&self) -> f64 {
        self.south_lat + self.len_lat
    }
}

fn check_extents(len_lon: f64, len_lat: f64) -> Result<(), SetupError> {
    if !(len_lon > 0.0) || !(len_lat > 0.0) {
        return Err(SetupError::InvalidParameter {
            name: "domain extents",
            reason: format!("extents must be positive, got {} x {}", len_lon, len_lat),
        });
    }
    Ok(())
}

use crate::core::bounds::Bounds;
use crate::core::codec::{canonicalize, decode_bounds, encode};
use crate::core::constants::COORDINATE_DECIMALS;
use crate::util::coord::Coordinate;
use crate::util::error::DigipinError;
use crate::util::rounding::round_half_up;
use geo_types::{Point, Polygon};
use serde::Serialize;
use std::fmt;

/// A single level-10 cell of the DIGIPIN grid.
///
/// Holds the canonical `SSS-SSS-SSSS` code, the decoded center and the
/// cell rectangle.
///
/// # Example
///
/// ```
/// use digipin_rs::DigipinCell;
///
/// # fn main() -> Result<(), digipin_rs::DigipinError> {
/// let cell = DigipinCell::from_lat_lon(28.622788, 77.213033)?;
/// assert_eq!(cell.code, "39J-49L-L8T4");
/// println!("Center: ({}, {})", cell.latitude(), cell.longitude());
///
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigipinCell {
    /// Canonical code with separators
    pub code: String,
    /// Center latitude, rounded to 6 decimals
    pub lat: f64,
    /// Center longitude, rounded to 6 decimals
    pub lon: f64,
    /// Cell rectangle
    pub bounds: Bounds,
}

impl DigipinCell {
    /// Create the cell containing a latitude/longitude pair.
    pub fn from_lat_lon(lat: f64, lon: f64) -> Result<Self, DigipinError> {
        let code = encode(lat, lon)?;
        Self::from_code(&code)
    }

    /// Create a cell from a WGS84 coordinate (x = longitude, y = latitude).
    ///
    /// # Example
    /// ```
    /// use digipin_rs::DigipinCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), digipin_rs::DigipinError> {
    /// // From tuple
    /// let cell = DigipinCell::from_wgs84(&(77.5946, 12.9716))?;
    /// // From Point
    /// let same = DigipinCell::from_wgs84(&Point::new(77.5946, 12.9716))?;
    /// assert_eq!(cell, same);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate) -> Result<Self, DigipinError> {
        Self::from_lat_lon(coord.y(), coord.x())
    }

    /// Create a cell from a code in any accepted spelling.
    ///
    /// # Example
    /// ```
    /// use digipin_rs::DigipinCell;
    ///
    /// # fn main() -> Result<(), digipin_rs::DigipinError> {
    /// let cell = DigipinCell::from_code("39j49ll8t4")?;
    /// assert_eq!(cell.code, "39J-49L-L8T4");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(code: &str) -> Result<Self, DigipinError> {
        let canonical = canonicalize(code)?;
        let bounds = decode_bounds(&canonical)?;
        let (lat, lon) = bounds.center();

        Ok(Self {
            code: canonical,
            lat: round_half_up(lat, COORDINATE_DECIMALS),
            lon: round_half_up(lon, COORDINATE_DECIMALS),
            bounds,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.lat
    }

    pub fn longitude(&self) -> f64 {
        self.lon
    }

    /// Center as a `geo_types::Point` (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }

    /// Converts this cell to a closed rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bounds.to_polygon()
    }

    /// Returns `true` when the coordinate falls inside this cell.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.bounds.contains(coord.y(), coord.x())
    }
}

impl fmt::Display for DigipinCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

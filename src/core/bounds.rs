use crate::core::constants::{GRID_SIZE, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::core::symbols::GridPosition;
use crate::util::error::{Axis, DigipinError};
use geo_types::{Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

const GRID_F64: f64 = GRID_SIZE as f64;
const LAST_INDEX: i32 = GRID_SIZE as i32 - 1;

/// A closed latitude/longitude rectangle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// The region addressed by the whole code space.
pub const ROOT_BOUNDS: Bounds = Bounds::new(MIN_LAT, MAX_LAT, MIN_LON, MAX_LON);

impl Bounds {
    pub const fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height and width of one grid cell at the next level.
    fn divisions(&self) -> (f64, f64) {
        (self.lat_span() / GRID_F64, self.lon_span() / GRID_F64)
    }

    /// Returns `true` when the point lies inside the closed rectangle.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }

    /// Like [`Bounds::contains`] but reports the first violated bound.
    ///
    /// NaN fails the check against the lower bound.
    pub fn check(&self, lat: f64, lon: f64) -> Result<(), DigipinError> {
        check_axis(Axis::Latitude, lat, self.min_lat, self.max_lat)?;
        check_axis(Axis::Longitude, lon, self.min_lon, self.max_lon)
    }

    /// Grid cell of this rectangle that holds the point.
    ///
    /// Rows are counted from the north, so the band index measured from the
    /// south is inverted. Indices are clamped into the grid to absorb points
    /// sitting exactly on the northern or eastern edge.
    pub fn locate(&self, lat: f64, lon: f64) -> GridPosition {
        let (lat_div, lon_div) = self.divisions();

        let row = LAST_INDEX - ((lat - self.min_lat) / lat_div) as i32;
        let col = ((lon - self.min_lon) / lon_div) as i32;

        GridPosition::new_unchecked(
            row.clamp(0, LAST_INDEX) as u8,
            col.clamp(0, LAST_INDEX) as u8,
        )
    }

    /// Shrinks the rectangle to the cell at `position`.
    ///
    /// `max_lat` is derived from the old `min_lat`; the statement order is
    /// part of the code format and changes results in the last bits if
    /// rearranged.
    pub fn narrow(self, position: GridPosition) -> Bounds {
        let (lat_div, lon_div) = self.divisions();
        let row = position.row() as f64;
        let col = position.col() as f64;

        let max_lat = self.min_lat + lat_div * (GRID_F64 - row);
        let min_lat = self.min_lat + lat_div * (GRID_F64 - 1.0 - row);
        let min_lon = self.min_lon + lon_div * col;
        let max_lon = min_lon + lon_div;

        Bounds {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Unrounded `(lat, lon)` center.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Converts to a `geo_types::Rect` with x = longitude, y = latitude.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lon, y: self.min_lat },
            coord! { x: self.max_lon, y: self.max_lat },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}

impl Default for Bounds {
    fn default() -> Self {
        ROOT_BOUNDS
    }
}

fn check_axis(axis: Axis, value: f64, min: f64, max: f64) -> Result<(), DigipinError> {
    if value.is_nan() || value < min {
        return Err(DigipinError::OutOfBounds {
            axis,
            value,
            bound: min,
        });
    }
    if value > max {
        return Err(DigipinError::OutOfBounds {
            axis,
            value,
            bound: max,
        });
    }
    Ok(())
}

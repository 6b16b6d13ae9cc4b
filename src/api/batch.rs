use crate::api::cell::DigipinCell;
use crate::core::codec::{decode, encode_coord};
use crate::util::coord::Coordinate;
use crate::util::error::DigipinError;
use geo_types::Polygon;
use rayon::prelude::*;
use tracing::debug;

/// Encodes many coordinates in parallel.
///
/// Output order matches input order; a failing coordinate only fails its own slot.
///
/// # Example
/// ```
/// use digipin_rs::encode_all;
///
/// let codes = encode_all(&[(77.213033, 28.622788), (-0.1, 51.5)]);
/// assert_eq!(codes[0].as_deref(), Ok("39J-49L-L8T4"));
/// assert!(codes[1].is_err());
/// ```
pub fn encode_all<C: Coordinate + Sync>(coords: &[C]) -> Vec<Result<String, DigipinError>> {
    debug!(count = coords.len(), "encoding batch");
    coords.par_iter().map(encode_coord).collect()
}

/// Decodes many codes in parallel to `(lat, lon)` centers.
pub fn decode_all<S: AsRef<str> + Sync>(codes: &[S]) -> Vec<Result<(f64, f64), DigipinError>> {
    debug!(count = codes.len(), "decoding batch");
    codes.par_iter().map(|code| decode(code.as_ref())).collect()
}

/// Trait for working with collections of [`DigipinCell`]s.
///
/// Implemented for `[DigipinCell]` and therefore `Vec<DigipinCell>`.
pub trait DigipinCells {
    /// Cell rectangles as polygons, built in parallel.
    fn to_polygons(&self) -> Vec<Polygon<f64>>;
    /// Canonical codes in order.
    fn codes(&self) -> Vec<&str>;
}

impl DigipinCells for [DigipinCell] {
    fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.par_iter().map(|c: &DigipinCell| c.to_polygon()).collect()
    }

    fn codes(&self) -> Vec<&str> {
        self.iter().map(|c| c.code.as_str()).collect()
    }
}

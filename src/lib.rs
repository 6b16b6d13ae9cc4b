//! # digipin-rs
//!
//! DIGIPIN splits a fixed region (2.5°N to 38.5°N, 63.5°E to 99.5°E) into a
//! 4x4 grid ten times over and names each cell with one of 16 symbols,
//! producing a 10-symbol code such as `39J-49L-L8T4`.
//!
//! There are currently three main entry points.
//!
//! ### 1. `encode` / `decode` / `validate` - The Codec
//!
//! ```
//! use digipin_rs::{decode, encode, validate};
//!
//! # fn main() -> Result<(), digipin_rs::DigipinError> {
//! let code = encode(28.622788, 77.213033)?;
//! assert_eq!(code, "39J-49L-L8T4");
//! assert!(validate(code.as_str()));
//!
//! let (lat, lon) = decode(&code)?;
//! println!("{lat}, {lon}");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `DigipinCell` - Single Cell Operations
//!
//! ```
//! use digipin_rs::DigipinCell;
//!
//! # fn main() -> Result<(), digipin_rs::DigipinError> {
//! let cell = DigipinCell::from_wgs84(&(77.5946, 12.9716))?;
//! println!("{}", cell.code);
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToDigipin` - CSV File Conversion
//!
//! Convert CSV files with geometry columns (WKT or GeoJSON), coordinate
//! columns, or existing codes:
//!
//! ```no_run
//! use digipin_rs::{CsvDigipinConfig, CsvToDigipin, GeometryFormat};
//!
//! let config = CsvDigipinConfig::from_coords("Longitude", "Latitude")
//!     .with_cell_geometry(GeometryFormat::GeoJson);
//!
//! "input.csv".to_digipin_csv("output.csv", &config).unwrap();
//! ```
//!

pub mod api;
pub mod core;
pub mod geom;
pub mod util;

pub use api::{
    CoordinateSource, CsvDigipinConfig, CsvToDigipin, DigipinCell, DigipinCells,
    csv_to_digipin_csv, decode_all, encode_all,
};
pub use crate::core::{
    Bounds, COORDINATE_DECIMALS, DIGIPIN_LENGTH, GRID, GRID_SIZE, GridPosition, MAX_LAT, MAX_LON,
    MIN_LAT, MIN_LON, ROOT_BOUNDS, SEPARATOR, SYMBOLS, SymbolTable, canonicalize, decode,
    decode_bounds, encode, encode_coord, normalize, validate,
};
pub use geom::{GeometryFormat, geometry_points};
pub use util::{Axis, Coordinate, DigipinError, round_half_up};

pub use geo_types;

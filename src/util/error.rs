/// Coordinate axis, used to report which input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Latitude => write!(f, "Latitude"),
            Axis::Longitude => write!(f, "Longitude"),
        }
    }
}

/// Error type for digipin-rs operations.
#[derive(Debug, PartialEq)]
pub enum DigipinError {
    /// A coordinate lies outside the addressable region.
    OutOfBounds {
        axis: Axis,
        value: f64,
        /// The bound that was crossed.
        bound: f64,
    },
    /// The normalized code does not have exactly 10 symbols.
    InvalidFormat { length: usize },
    /// The normalized code contains a character outside the symbol table.
    InvalidCharacter(char),
    /// A grid row or column outside `0..4`.
    InvalidGridPosition { row: u8, col: u8 },
    /// File I/O error.
    IoError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for DigipinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigipinError::OutOfBounds { axis, value, bound } => {
                write!(f, "{} out of bounds: {} (bound {})", axis, value, bound)
            }
            DigipinError::InvalidFormat { length } => {
                write!(f, "Invalid digipin: expected 10 symbols, found {}", length)
            }
            DigipinError::InvalidCharacter(ch) => {
                write!(f, "Invalid character in digipin: {:?}", ch)
            }
            DigipinError::InvalidGridPosition { row, col } => {
                write!(f, "Invalid grid position: row {}, col {}", row, col)
            }
            DigipinError::IoError(msg) => write!(f, "IO error: {}", msg),
            DigipinError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            DigipinError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for DigipinError {}

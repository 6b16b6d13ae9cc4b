/// Number of rows and columns the current rectangle is split into at each level
pub const GRID_SIZE: usize = 4;

/// Number of symbols in a code, one per subdivision level
pub const DIGIPIN_LENGTH: usize = 10;

/// Presentational group separator
pub const SEPARATOR: char = '-';

/// Symbol counts after which a separator is emitted when formatting
pub(crate) const SEPARATOR_AFTER: [usize; 2] = [3, 6];

/// Decimal places kept on decoded coordinates
pub const COORDINATE_DECIMALS: usize = 6;

/// Southern edge of the addressable region (degrees)
pub const MIN_LAT: f64 = 2.5;
/// Northern edge of the addressable region (degrees)
pub const MAX_LAT: f64 = 38.5;
/// Western edge of the addressable region (degrees)
pub const MIN_LON: f64 = 63.5;
/// Eastern edge of the addressable region (degrees)
pub const MAX_LON: f64 = 99.5;

/// Symbol grid, row 0 is the northern band and column 0 the western band.
pub const GRID: [[char; GRID_SIZE]; GRID_SIZE] = [
    ['F', 'C', '9', '8'],
    ['J', '3', '2', '7'],
    ['K', '4', '5', '6'],
    ['L', 'M', 'P', 'T'],
];

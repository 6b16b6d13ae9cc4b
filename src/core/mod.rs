pub mod bounds;
pub mod codec;
pub mod constants;
pub mod symbols;

pub use bounds::{Bounds, ROOT_BOUNDS};
pub use codec::{canonicalize, decode, decode_bounds, encode, encode_coord, normalize, validate};
pub use constants::{
    COORDINATE_DECIMALS, DIGIPIN_LENGTH, GRID, GRID_SIZE, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON,
    SEPARATOR,
};
pub use symbols::{GridPosition, SYMBOLS, SymbolTable};

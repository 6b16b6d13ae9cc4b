use crate::core::bounds::{Bounds, ROOT_BOUNDS};
use crate::core::constants::{COORDINATE_DECIMALS, DIGIPIN_LENGTH, SEPARATOR, SEPARATOR_AFTER};
use crate::core::symbols::{GridPosition, SYMBOLS};
use crate::util::coord::Coordinate;
use crate::util::error::DigipinError;
use crate::util::rounding::round_half_up;

/// Strips separators, trims surrounding characters up to U+0020 and uppercases.
///
/// Only ASCII control characters and the space are trimmed; other Unicode
/// whitespace stays and fails validation.
///
/// ```
/// assert_eq!(digipin_rs::normalize(" 39j-49l-l8t4 "), "39J49LL8T4");
/// assert_eq!(digipin_rs::normalize("\u{a0}39j"), "\u{a0}39J");
/// ```
pub fn normalize(code: &str) -> String {
    code.replace(SEPARATOR, "")
        .trim_matches(|c: char| c <= ' ')
        .to_uppercase()
}

/// Returns `true` when `code` normalizes to exactly 10 known symbols.
///
/// Accepts `&str` or `Option<&str>`; `None` is never valid.
///
/// # Example
/// ```
/// use digipin_rs::validate;
///
/// assert!(validate("39J-49L-L8T4"));
/// assert!(validate("39j49ll8t4"));
/// assert!(!validate("39J-49L-L8T"));
/// assert!(!validate(None));
/// ```
pub fn validate<'a>(code: impl Into<Option<&'a str>>) -> bool {
    code.into().is_some_and(|c| parse_positions(c).is_ok())
}

/// Encodes a WGS84 point into a `SSS-SSS-SSSS` code.
///
/// # Process
///
/// Starting from the root bounds, each of the 10 levels splits the current
/// rectangle into a 4x4 grid, emits the symbol of the cell holding the point
/// and narrows the rectangle to that cell.
///
/// # Example
/// ```
/// use digipin_rs::encode;
///
/// # fn main() -> Result<(), digipin_rs::DigipinError> {
/// assert_eq!(encode(28.622788, 77.213033)?, "39J-49L-L8T4");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`DigipinError::OutOfBounds`] - `lat` or `lon` lies outside the root bounds
pub fn encode(lat: f64, lon: f64) -> Result<String, DigipinError> {
    ROOT_BOUNDS.check(lat, lon)?;

    let mut code = String::with_capacity(DIGIPIN_LENGTH + SEPARATOR_AFTER.len());
    let mut bounds = ROOT_BOUNDS;

    for level in 1..=DIGIPIN_LENGTH {
        let position = bounds.locate(lat, lon);
        code.push(SYMBOLS.symbol_of(position));
        if SEPARATOR_AFTER.contains(&level) {
            code.push(SEPARATOR);
        }
        bounds = bounds.narrow(position);
    }

    Ok(code)
}

/// Encodes any [`Coordinate`] (x = longitude, y = latitude).
pub fn encode_coord<C: Coordinate>(coord: &C) -> Result<String, DigipinError> {
    encode(coord.y(), coord.x())
}

/// Decodes a code to the `(lat, lon)` center of its cell, rounded to 6 decimals.
///
/// # Example
/// ```
/// use digipin_rs::decode;
///
/// # fn main() -> Result<(), digipin_rs::DigipinError> {
/// let (lat, lon) = decode("39J-49L-L8T4")?;
/// assert_eq!((lat, lon), (28.622793, 77.213049));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`DigipinError::InvalidFormat`] - normalized code is not 10 symbols long
/// - [`DigipinError::InvalidCharacter`] - a symbol is not in the table
pub fn decode(code: &str) -> Result<(f64, f64), DigipinError> {
    let (lat, lon) = decode_bounds(code)?.center();
    Ok((
        round_half_up(lat, COORDINATE_DECIMALS),
        round_half_up(lon, COORDINATE_DECIMALS),
    ))
}

/// Decodes a code to the bounds of its level-10 cell.
pub fn decode_bounds(code: &str) -> Result<Bounds, DigipinError> {
    let positions = parse_positions(code)?;
    Ok(positions
        .iter()
        .fold(ROOT_BOUNDS, |bounds, &position| bounds.narrow(position)))
}

/// Normalizes a code and regroups it as `SSS-SSS-SSSS`.
///
/// ```
/// # fn main() -> Result<(), digipin_rs::DigipinError> {
/// assert_eq!(digipin_rs::canonicalize("39j49-ll8t4")?, "39J-49L-L8T4");
/// # Ok(())
/// # }
/// ```
pub fn canonicalize(code: &str) -> Result<String, DigipinError> {
    let positions = parse_positions(code)?;

    let mut canonical = String::with_capacity(DIGIPIN_LENGTH + SEPARATOR_AFTER.len());
    for (i, position) in positions.iter().enumerate() {
        canonical.push(SYMBOLS.symbol_of(*position));
        if SEPARATOR_AFTER.contains(&(i + 1)) {
            canonical.push(SEPARATOR);
        }
    }
    Ok(canonical)
}

fn parse_positions(code: &str) -> Result<[GridPosition; DIGIPIN_LENGTH], DigipinError> {
    let normalized = normalize(code);

    let length = normalized.chars().count();
    if length != DIGIPIN_LENGTH {
        return Err(DigipinError::InvalidFormat { length });
    }

    let mut positions = [GridPosition::default(); DIGIPIN_LENGTH];
    for (slot, ch) in positions.iter_mut().zip(normalized.chars()) {
        *slot = SYMBOLS
            .position_of(ch)
            .ok_or(DigipinError::InvalidCharacter(ch))?;
    }
    Ok(positions)
}

use crate::core::constants::{GRID, GRID_SIZE};
use crate::util::error::DigipinError;
use serde::{Deserialize, Serialize};

/// A cell position inside one level's 4x4 grid.
///
/// `row` counts from the northern band, `col` from the western band. Both are
/// always in `0..GRID_SIZE`; deserialization goes through [`GridPosition::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGridPosition")]
pub struct GridPosition {
    row: u8,
    col: u8,
}

#[derive(Deserialize)]
struct RawGridPosition {
    row: u8,
    col: u8,
}

impl GridPosition {
    /// Returns `None` when either index falls outside the grid.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < GRID_SIZE && (col as usize) < GRID_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }
}

impl TryFrom<RawGridPosition> for GridPosition {
    type Error = DigipinError;

    fn try_from(raw: RawGridPosition) -> Result<Self, Self::Error> {
        GridPosition::new(raw.row, raw.col).ok_or(DigipinError::InvalidGridPosition {
            row: raw.row,
            col: raw.col,
        })
    }
}

const ASCII_RANGE: usize = 128;

/// Two-way mapping between grid positions and code symbols.
///
/// Built at compile time; a table with duplicate, lowercase or non-ASCII
/// symbols fails to build.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    grid: [[char; GRID_SIZE]; GRID_SIZE],
    reverse: [Option<GridPosition>; ASCII_RANGE],
}

impl SymbolTable {
    pub const fn new(grid: [[char; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut reverse = [None; ASCII_RANGE];
        let mut row = 0;
        while row < GRID_SIZE {
            let mut col = 0;
            while col < GRID_SIZE {
                let symbol = grid[row][col];
                if !(symbol.is_ascii_uppercase() || symbol.is_ascii_digit()) {
                    panic!("symbols must be ASCII digits or uppercase letters");
                }
                let slot = symbol as usize;
                if reverse[slot].is_some() {
                    panic!("symbols must be distinct");
                }
                reverse[slot] = Some(GridPosition::new_unchecked(row as u8, col as u8));
                col += 1;
            }
            row += 1;
        }
        Self { grid, reverse }
    }

    /// Symbol at `position`.
    pub const fn symbol_of(&self, position: GridPosition) -> char {
        self.grid[position.row as usize][position.col as usize]
    }

    /// Grid position of `symbol`, ignoring ASCII case.
    pub fn position_of(&self, symbol: char) -> Option<GridPosition> {
        if !symbol.is_ascii() {
            return None;
        }
        self.reverse[symbol.to_ascii_uppercase() as usize]
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.position_of(symbol).is_some()
    }

    /// All symbols in row-major order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.grid.iter().flat_map(|row| row.iter().copied())
    }
}

/// The DIGIPIN symbol table.
pub static SYMBOLS: SymbolTable = SymbolTable::new(GRID);

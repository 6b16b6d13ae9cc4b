pub mod batch;
pub mod cell;
pub mod digipin_csv;

pub use batch::{DigipinCells, decode_all, encode_all};
pub use cell::DigipinCell;
pub use digipin_csv::{CoordinateSource, CsvDigipinConfig, CsvToDigipin, csv_to_digipin_csv};

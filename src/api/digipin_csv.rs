use crate::api::cell::DigipinCell;
use crate::geom::points::geometry_points;
use crate::geom::write::GeometryFormat;
use crate::util::error::DigipinError;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// Resolved column positions for the configured source
enum SourceIndices {
    Geometry(usize),
    Coordinates { lon_idx: usize, lat_idx: usize },
    Code(usize),
}

/// Specifies how to extract location data from CSV rows.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry (WGS84)
    GeometryColumn(String),
    /// Separate longitude and latitude columns
    CoordinateColumns {
        lon_column: String,
        lat_column: String,
    },
    /// A column of existing codes to decode
    CodeColumn(String),
}

/// Configuration for CSV to DIGIPIN conversion.
#[derive(Debug, Clone)]
pub struct CsvDigipinConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub include_cell_geometry: Option<GeometryFormat>,
    pub skip_invalid: bool,
}

impl CsvDigipinConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use digipin_rs::CsvDigipinConfig;
    ///
    /// let config = CsvDigipinConfig::new("geometry");
    /// ```
    pub fn new(geometry_column: impl Into<String>) -> Self {
        Self::with_source(CoordinateSource::GeometryColumn(geometry_column.into()))
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use digipin_rs::CsvDigipinConfig;
    ///
    /// let config = CsvDigipinConfig::from_coords("Longitude", "Latitude");
    /// ```
    pub fn from_coords(lon_column: impl Into<String>, lat_column: impl Into<String>) -> Self {
        Self::with_source(CoordinateSource::CoordinateColumns {
            lon_column: lon_column.into(),
            lat_column: lat_column.into(),
        })
    }

    /// Create config that decodes an existing code column into
    /// `latitude`/`longitude` columns.
    pub fn from_codes(code_column: impl Into<String>) -> Self {
        Self::with_source(CoordinateSource::CodeColumn(code_column.into()))
    }

    fn with_source(source: CoordinateSource) -> Self {
        Self {
            source,
            exclude_columns: Vec::new(),
            include_cell_geometry: None,
            skip_invalid: false,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the cell rectangle in output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }

    /// Log and skip rows that cannot be converted instead of failing.
    pub fn skip_invalid(mut self) -> Self {
        self.skip_invalid = true;
        self
    }
}

pub trait CsvToDigipin {
    fn to_digipin_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvDigipinConfig,
    ) -> Result<(), DigipinError>;
}

impl<P: AsRef<Path>> CsvToDigipin for P {
    fn to_digipin_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvDigipinConfig,
    ) -> Result<(), DigipinError> {
        csv_to_digipin_csv(self, output_path, config)
    }
}

/// Drops repeated cells while keeping first-seen order.
fn dedup_cells(cells: Vec<DigipinCell>) -> Vec<DigipinCell> {
    let mut seen = HashSet::with_capacity(cells.len());
    cells
        .into_iter()
        .filter(|cell| seen.insert(cell.code.clone()))
        .collect()
}

fn field<'r>(
    record: &'r csv::StringRecord,
    idx: usize,
    what: &str,
) -> Result<&'r str, DigipinError> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| DigipinError::CsvError(format!("Missing {} column at index {}", what, idx)))
}

fn parse_float(s: &str, what: &str) -> Result<f64, DigipinError> {
    s.parse()
        .map_err(|_| DigipinError::CsvError(format!("Invalid {}: '{}'", what, s)))
}

fn record_to_cells(
    record: &csv::StringRecord,
    source: &SourceIndices,
) -> Result<Vec<DigipinCell>, DigipinError> {
    match source {
        SourceIndices::Geometry(idx) => {
            let cells = geometry_points(field(record, *idx, "geometry")?)?
                .iter()
                .map(DigipinCell::from_wgs84)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(dedup_cells(cells))
        }
        SourceIndices::Coordinates { lon_idx, lat_idx } => {
            let lon = parse_float(field(record, *lon_idx, "longitude")?, "longitude")?;
            let lat = parse_float(field(record, *lat_idx, "latitude")?, "latitude")?;
            Ok(vec![DigipinCell::from_lat_lon(lat, lon)?])
        }
        SourceIndices::Code(idx) => Ok(vec![DigipinCell::from_code(field(record, *idx, "code")?)?]),
    }
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize, DigipinError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DigipinError::CsvError(format!("Column '{}' not found", name)))
}

// ============================================================================
// CSV Conversion
// ============================================================================

/// Converts a CSV file with geometry, coordinate or code columns to a CSV file
/// keyed by DIGIPIN.
///
/// Streams output to minimize memory usage for large files. A geometry that
/// touches several cells produces one output row per distinct cell.
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use digipin_rs::{csv_to_digipin_csv, CsvDigipinConfig, GeometryFormat};
///
/// let config = CsvDigipinConfig::new("geometry")
///     .exclude(vec!["Geo Point".into()])
///     .with_cell_geometry(GeometryFormat::Wkt);
///
/// csv_to_digipin_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use digipin_rs::{csv_to_digipin_csv, CsvDigipinConfig};
///
/// let config = CsvDigipinConfig::from_coords("Longitude", "Latitude").skip_invalid();
///
/// csv_to_digipin_csv("post_offices.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_digipin_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvDigipinConfig,
) -> Result<(), DigipinError> {
    let csv_path = csv_path.as_ref();
    let file = File::open(csv_path).map_err(|e| DigipinError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| DigipinError::CsvError(e.to_string()))?
        .clone();

    // Source columns are always replaced by the generated ones
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = find_column(&headers, col)?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            lon_column,
            lat_column,
        } => {
            let lon_idx = find_column(&headers, lon_column)?;
            let lat_idx = find_column(&headers, lat_column)?;
            (
                SourceIndices::Coordinates { lon_idx, lat_idx },
                HashSet::from([lon_idx, lat_idx]),
            )
        }
        CoordinateSource::CodeColumn(col) => {
            let idx = find_column(&headers, col)?;
            (SourceIndices::Code(idx), HashSet::from([idx]))
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| DigipinError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let write_center = matches!(source_indices, SourceIndices::Code(_));

    let mut header_row: Vec<&str> = vec!["digipin"];
    if write_center {
        header_row.extend(["latitude", "longitude"]);
    }
    if config.include_cell_geometry.is_some() {
        header_row.push("digipin_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| DigipinError::CsvError(e.to_string()))?;

    debug!(path = %csv_path.display(), "converting csv");

    let mut rows_written = 0usize;
    let mut rows_skipped = 0usize;

    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|e| DigipinError::CsvError(e.to_string()))?;

        let cells = match record_to_cells(&record, &source_indices) {
            Ok(cells) => cells,
            Err(e) if config.skip_invalid => {
                warn!(row = line + 1, error = %e, "skipping row");
                rows_skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        for cell in cells {
            let mut row: Vec<String> = vec![cell.code.clone()];

            if write_center {
                row.push(cell.latitude().to_string());
                row.push(cell.longitude().to_string());
            }

            if let Some(format) = config.include_cell_geometry {
                row.push(format.format_polygon(&cell.to_polygon()));
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| DigipinError::CsvError(e.to_string()))?;
            rows_written += 1;
        }
    }

    writer
        .flush()
        .map_err(|e| DigipinError::IoError(e.to_string()))?;

    debug!(rows_written, rows_skipped, "csv conversion finished");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::encode;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_input(path: &Path, lines: &[&str]) -> Result<(), DigipinError> {
        let mut file = File::create(path).map_err(|e| DigipinError::IoError(e.to_string()))?;
        for line in lines {
            writeln!(file, "{}", line).map_err(|e| DigipinError::IoError(e.to_string()))?;
        }
        Ok(())
    }

    fn read_output(path: &Path) -> Result<Vec<Vec<String>>, DigipinError> {
        let mut reader =
            csv::Reader::from_path(path).map_err(|e| DigipinError::CsvError(e.to_string()))?;
        let mut rows = vec![
            reader
                .headers()
                .map_err(|e| DigipinError::CsvError(e.to_string()))?
                .iter()
                .map(String::from)
                .collect(),
        ];
        for record in reader.records() {
            let record = record.map_err(|e| DigipinError::CsvError(e.to_string()))?;
            rows.push(record.iter().map(String::from).collect());
        }
        Ok(rows)
    }

    #[test]
    fn test_csv_from_coords() -> Result<(), DigipinError> {
        let dir = tempdir().map_err(|e| DigipinError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        write_input(
            &csv_path,
            &[
                "ID,Longitude,Latitude,Description",
                "1,77.213033,28.622788,Dak Bhawan",
                "2,77.5946,12.9716,Bengaluru",
            ],
        )?;

        let config = CsvDigipinConfig::from_coords("Longitude", "Latitude");
        csv_path.to_digipin_csv(&output_path, &config)?;

        let rows = read_output(&output_path)?;
        assert_eq!(rows[0], vec!["digipin", "ID", "Description"]);
        assert_eq!(rows[1], vec!["39J-49L-L8T4", "1", "Dak Bhawan"]);
        assert_eq!(rows[2][0], "4P3-JK8-52C9");
        Ok(())
    }

    #[test]
    fn test_csv_geometry_column() -> Result<(), DigipinError> {
        let dir = tempdir().map_err(|e| DigipinError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        write_input(
            &csv_path,
            &[
                "ASSET_ID,TYPE,geometry",
                "A1,Office,\"POINT(77.213033 28.622788)\"",
                "A2,Box,\"{\"\"type\"\":\"\"Point\"\",\"\"coordinates\"\":[72.8777,19.076]}\"",
            ],
        )?;

        let config = CsvDigipinConfig::new("geometry").with_cell_geometry(GeometryFormat::Wkt);
        csv_to_digipin_csv(&csv_path, &output_path, &config)?;

        let rows = read_output(&output_path)?;
        assert_eq!(rows[0], vec!["digipin", "digipin_geometry", "ASSET_ID", "TYPE"]);
        assert_eq!(rows[1][0], "39J-49L-L8T4");
        assert!(rows[1][1].starts_with("POLYGON"));
        assert_eq!(rows[2][0], "4FK-595-8823");
        Ok(())
    }

    #[test]
    fn test_csv_linestring_dedups_cells() -> Result<(), DigipinError> {
        let dir = tempdir().map_err(|e| DigipinError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        write_input(
            &csv_path,
            &[
                "ID,geometry",
                "r1,\"LINESTRING(77.213033 28.622788, 77.213034 28.622789, 77.5946 12.9716)\"",
            ],
        )?;

        let config = CsvDigipinConfig::new("geometry");
        csv_to_digipin_csv(&csv_path, &output_path, &config)?;

        let rows = read_output(&output_path)?;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["39J-49L-L8T4", "r1"]);
        assert_eq!(rows[2], vec!["4P3-JK8-52C9", "r1"]);
        Ok(())
    }

    #[test]
    fn test_csv_from_codes() -> Result<(), DigipinError> {
        let dir = tempdir().map_err(|e| DigipinError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        write_input(&csv_path, &["pin,Name", "39j49ll8t4,Dak Bhawan"])?;

        let config = CsvDigipinConfig::from_codes("pin");
        csv_to_digipin_csv(&csv_path, &output_path, &config)?;

        let rows = read_output(&output_path)?;
        assert_eq!(rows[0], vec!["digipin", "latitude", "longitude", "Name"]);
        assert_eq!(
            rows[1],
            vec!["39J-49L-L8T4", "28.622793", "77.213049", "Dak Bhawan"]
        );
        Ok(())
    }

    #[test]
    fn test_csv_invalid_row_fails() -> Result<(), DigipinError> {
        let dir = tempdir().map_err(|e| DigipinError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        write_input(&csv_path, &["lon,lat", "77.2,28.6", "-0.1,51.5"])?;

        let config = CsvDigipinConfig::from_coords("lon", "lat");
        let result = csv_to_digipin_csv(&csv_path, &output_path, &config);
        assert!(matches!(result, Err(DigipinError::OutOfBounds { .. })));
        Ok(())
    }

    #[test]
    fn test_csv_skip_invalid() -> Result<(), DigipinError> {
        let dir = tempdir().map_err(|e| DigipinError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        write_input(
            &csv_path,
            &[
                "lon,lat,name",
                "-0.1,51.5,London",
                "abc,28.6,Broken",
                "77.213033,28.622788,Delhi",
            ],
        )?;

        let config = CsvDigipinConfig::from_coords("lon", "lat").skip_invalid();
        csv_to_digipin_csv(&csv_path, &output_path, &config)?;

        let rows = read_output(&output_path)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["39J-49L-L8T4", "Delhi"]);
        Ok(())
    }

    #[test]
    fn test_csv_empty_geometry_row() -> Result<(), DigipinError> {
        let dir = tempdir().map_err(|e| DigipinError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        write_input(
            &csv_path,
            &["id,geometry", "r1,POLYGON EMPTY", "r2,\"POINT(77.2 28.6)\""],
        )?;

        let config = CsvDigipinConfig::new("geometry");
        let result = csv_to_digipin_csv(&csv_path, &output_path, &config);
        assert_eq!(
            result,
            Err(DigipinError::GeometryParseError("geometry has no cells".to_string()))
        );

        let config = config.skip_invalid();
        csv_to_digipin_csv(&csv_path, &output_path, &config)?;

        let rows = read_output(&output_path)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], "r2");
        assert_eq!(rows[1][0], encode(28.6, 77.2)?);
        Ok(())
    }

    #[test]
    fn test_csv_missing_column() -> Result<(), DigipinError> {
        let dir = tempdir().map_err(|e| DigipinError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        write_input(&csv_path, &["a,b", "1,2"])?;

        let config = CsvDigipinConfig::new("geometry");
        let result = csv_to_digipin_csv(&csv_path, &output_path, &config);
        assert!(matches!(result, Err(DigipinError::CsvError(_))));
        Ok(())
    }
}

use digipin_rs::{DigipinCell, DigipinError, decode, encode};

fn main() -> Result<(), DigipinError> {
    let lat = 28.622788;
    let lon = 77.213033;

    let code = encode(lat, lon)?;
    println!("DIGIPIN: {}", code);

    let (center_lat, center_lon) = decode(&code)?;
    println!("Center: ({}, {})", center_lat, center_lon);

    let cell = DigipinCell::from_code(&code)?;
    let json =
        serde_json::to_string_pretty(&cell).map_err(|e| DigipinError::IoError(e.to_string()))?;
    println!("Cell: {}", json);

    let polygon = cell.to_polygon();
    println!("Polygon: {:?}", polygon);

    Ok(())
}

use geo_types::Polygon;
use wkt::ToWkt;

/// Output format for cell geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON geometry object
    GeoJson,
}

impl GeometryFormat {
    pub fn format_polygon(self, polygon: &Polygon<f64>) -> String {
        match self {
            GeometryFormat::Wkt => polygon.wkt_string(),
            GeometryFormat::GeoJson => geojson::Geometry::from(polygon).to_string(),
        }
    }
}

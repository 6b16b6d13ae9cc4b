use crate::util::error::DigipinError;
use geo::Centroid;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use std::fmt::Display;
use std::str::FromStr;
use wkt::Wkt;

fn geometry_error(reason: impl Display) -> DigipinError {
    DigipinError::GeometryParseError(reason.to_string())
}

/// Reads a WKT or GeoJSON string. A leading `{` selects GeoJSON.
fn read_geometry(text: &str) -> Result<Geometry<f64>, DigipinError> {
    let text = text.trim();
    if !text.starts_with('{') {
        let wkt = Wkt::<f64>::from_str(text).map_err(geometry_error)?;
        return Geometry::try_from(wkt).map_err(|_| geometry_error("unsupported WKT geometry"));
    }

    let geometry = match text.parse::<GeoJson>().map_err(geometry_error)? {
        GeoJson::Geometry(geometry) => geometry,
        GeoJson::Feature(feature) => feature
            .geometry
            .ok_or_else(|| geometry_error("feature has no geometry"))?,
        GeoJson::FeatureCollection(_) => {
            return Err(geometry_error("one geometry per row, got a FeatureCollection"));
        }
    };
    Geometry::try_from(geometry).map_err(geometry_error)
}

/// Pushes the points a geometry is addressed by: every vertex of point and
/// line features, the centroid of each areal part.
fn push_points(geometry: Geometry<f64>, out: &mut Vec<Point<f64>>) {
    match geometry {
        Geometry::Point(point) => out.push(point),
        Geometry::MultiPoint(multi) => out.extend(multi),
        Geometry::Line(line) => out.extend([line.start_point(), line.end_point()]),
        Geometry::LineString(line) => out.extend(line.points()),
        Geometry::MultiLineString(multi) => {
            out.extend(multi.iter().flat_map(|line| line.points()));
        }
        Geometry::Polygon(polygon) => out.extend(polygon.centroid()),
        Geometry::MultiPolygon(multi) => {
            out.extend(multi.iter().filter_map(|polygon| polygon.centroid()));
        }
        Geometry::Rect(rect) => out.push(rect.centroid()),
        Geometry::Triangle(triangle) => out.push(triangle.centroid()),
        Geometry::GeometryCollection(collection) => {
            for member in collection {
                push_points(member, out);
            }
        }
    }
}

/// Parses a WKT or GeoJSON geometry into the WGS84 points to encode.
///
/// Points and line vertices are returned as-is, polygons contribute their
/// centroid and collections are flattened. Repeated points are kept; callers
/// dedup at the cell level.
///
/// # Errors
///
/// [`DigipinError::GeometryParseError`] when the text is neither WKT nor a
/// GeoJSON geometry/feature, or when the geometry yields no point at all
/// (`POLYGON EMPTY`, an empty multi-geometry).
///
/// # Example
/// ```
/// use digipin_rs::geometry_points;
///
/// # fn main() -> Result<(), digipin_rs::DigipinError> {
/// let points = geometry_points("LINESTRING(77.2 28.6, 77.3 28.7)")?;
/// assert_eq!(points.len(), 2);
///
/// assert!(geometry_points("POLYGON EMPTY").is_err());
/// # Ok(())
/// # }
/// ```
pub fn geometry_points(text: &str) -> Result<Vec<Point<f64>>, DigipinError> {
    let mut points = Vec::new();
    push_points(read_geometry(text)?, &mut points);
    if points.is_empty() {
        return Err(geometry_error("geometry has no cells"));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wkt_and_geojson_points_agree() -> Result<(), DigipinError> {
        let from_wkt = geometry_points("POINT(77.213033 28.622788)")?;
        let from_json =
            geometry_points(r#"{"type":"Point","coordinates":[77.213033,28.622788]}"#)?;
        assert_eq!(from_wkt, vec![Point::new(77.213033, 28.622788)]);
        assert_eq!(from_wkt, from_json);
        Ok(())
    }

    #[test]
    fn test_feature_geometry() -> Result<(), DigipinError> {
        let json = r#"{"type":"Feature","properties":{"name":"Mumbai"},"geometry":{"type":"Point","coordinates":[72.8777,19.076]}}"#;
        assert_eq!(geometry_points(json)?, vec![Point::new(72.8777, 19.076)]);

        let bare = r#"{"type":"Feature","properties":{},"geometry":null}"#;
        assert!(geometry_points(bare).is_err());
        Ok(())
    }

    #[test]
    fn test_feature_collection_rejected() {
        let json = r#"{"type":"FeatureCollection","features":[]}"#;
        let result = geometry_points(json);
        assert!(matches!(result, Err(DigipinError::GeometryParseError(_))));
    }

    #[test]
    fn test_line_vertices() -> Result<(), DigipinError> {
        let wkt = "MULTILINESTRING((77.2 28.6, 77.3 28.7), (72.8 19.0, 72.9 19.1))";
        let points = geometry_points(wkt)?;
        assert_eq!(points.len(), 4);
        assert_eq!(points[2], Point::new(72.8, 19.0));
        Ok(())
    }

    #[test]
    fn test_polygon_centroids() -> Result<(), DigipinError> {
        let square = geometry_points("POLYGON((77 28, 78 28, 78 29, 77 29, 77 28))")?;
        assert_eq!(square, vec![Point::new(77.5, 28.5)]);

        let wkt = "MULTIPOLYGON(((77 28, 78 28, 78 29, 77 29, 77 28)), \
                   ((72 19, 74 19, 74 21, 72 21, 72 19)))";
        let pair = geometry_points(wkt)?;
        assert_eq!(pair, vec![Point::new(77.5, 28.5), Point::new(73.0, 20.0)]);
        Ok(())
    }

    #[test]
    fn test_collection_is_flattened() -> Result<(), DigipinError> {
        let points = geometry_points(
            "GEOMETRYCOLLECTION(POINT(77.2 28.6), POLYGON((77 28, 78 28, 78 29, 77 29, 77 28)))",
        )?;
        assert_eq!(points, vec![Point::new(77.2, 28.6), Point::new(77.5, 28.5)]);
        Ok(())
    }

    #[test]
    fn test_empty_geometries_have_no_cells() {
        let no_cells = DigipinError::GeometryParseError("geometry has no cells".to_string());
        for text in [
            "POLYGON EMPTY",
            r#"{"type":"MultiPoint","coordinates":[]}"#,
            r#"{"type":"LineString","coordinates":[]}"#,
            r#"{"type":"MultiPolygon","coordinates":[]}"#,
        ] {
            assert_eq!(geometry_points(text).as_ref(), Err(&no_cells), "{text}");
        }
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(geometry_points("not a geometry").is_err());
        assert!(geometry_points("{not json").is_err());
    }
}

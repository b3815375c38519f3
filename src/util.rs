use std::io::Read;

use geojson::{Feature, GeoJson, Geometry, Value};
use rayon::prelude::*;

use crate::error::Result;
use crate::types::{GeoPoint, RectangularBound};


/// Compute the length in meters of one degree latitude and longitude at given latitude degree.
pub fn lat_lon(lat: f64) -> (f64, f64) {
    // Port of http://msi.nga.mil/MSISiteContent/StaticFiles/Calculators/degree.html
    let lat = lat.to_radians();
    let m1 = 111132.92;
    let m2 = -559.82;
    let m3 = 1.175;
    let m4 = -0.0023;
    let p1 = 111412.84;
    let p2 = -93.5;
    let p3 = 0.118;

    // Calculate the length of a degree of latitude and longitude in meters
    let latlen = m1 + (m2 * (2.0 * lat).cos()) + (m3 * (4.0 * lat).cos()) +
                 (m4 * (6.0 * lat).cos());
    let longlen = (p1 * lat.cos()) + (p2 * (3.0 * lat).cos()) + (p3 * (5.0 * lat).cos());
    (latlen, longlen)
}

/// Approximate (height, width) of the fence in meters, measured at its central latitude.
pub fn extent_meters(bound: &RectangularBound) -> (f64, f64) {
    let (lat_len, lon_len) = lat_lon(bound.center().lat);
    (lat_len * bound.range_lat(), lon_len * bound.range_lng())
}


// The geojson parser rejects positions shorter than two values.
fn to_point(pos: &[f64]) -> GeoPoint {
    GeoPoint::new(pos[1], pos[0])
}

fn collect_positions(value: &Value, out: &mut Vec<GeoPoint>) {
    match *value {
        Value::Point(ref pos) => out.push(to_point(pos)),
        Value::MultiPoint(ref positions) |
        Value::LineString(ref positions) => out.extend(positions.iter().map(|p| to_point(p))),
        Value::MultiLineString(ref lines) => {
            out.extend(lines.iter().flat_map(|l| l.iter()).map(|p| to_point(p)))
        }
        Value::GeometryCollection(ref geometries) => {
            for g in geometries {
                collect_positions(&g.value, out);
            }
        }
        // Areas are fences, not tracked positions.
        Value::Polygon(_) | Value::MultiPolygon(_) => (),
    }
}

/// Return every tracked position in a GeoJSON document, in document order. Points, multipoints
/// and the vertices of line strings are read; polygons are skipped.
pub fn points_from_json<R: Read>(mut reader: R) -> Result<Vec<GeoPoint>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let json = text.parse::<GeoJson>()?;
    let mut points = Vec::new();
    match json {
        GeoJson::FeatureCollection(ref collection) => {
            for feature in &collection.features {
                if let Some(ref geometry) = feature.geometry {
                    collect_positions(&geometry.value, &mut points);
                }
            }
        }
        GeoJson::Feature(ref feature) => {
            if let Some(ref geometry) = feature.geometry {
                collect_positions(&geometry.value, &mut points);
            }
        }
        GeoJson::Geometry(ref geometry) => collect_positions(&geometry.value, &mut points),
    }
    debug!("read {} positions", points.len());
    Ok(points)
}

/// Read a fence in the `{"southWest": {...}, "northEast": {...}}` shape.
pub fn bound_from_json<R: Read>(reader: R) -> Result<RectangularBound> {
    Ok(::serde_json::from_reader(reader)?)
}

/// Build a polygon feature tracing the fence counterclockwise from its south-west corner. A
/// fence across the antimeridian keeps increasing longitude past 180 on its east side.
pub fn bound_to_geojson(bound: &RectangularBound) -> Feature {
    let south = bound.south_west.lat;
    let north = bound.north_east.lat;
    let west = bound.south_west.lng;
    let east = west + bound.range_lng();
    let ring = vec![vec![west, south],
                    vec![east, south],
                    vec![east, north],
                    vec![west, north],
                    vec![west, south]];
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
        id: None,
        properties: None,
        foreign_members: None,
    }
}


/// Classify every point against the fence in parallel. Output order matches input order.
pub fn classify_all(bound: &RectangularBound, points: &[GeoPoint]) -> Vec<bool> {
    points.par_iter().map(|p| bound.contains(p)).collect()
}

/// Sequential version of `classify_all`.
pub fn classify_all_slow(bound: &RectangularBound, points: &[GeoPoint]) -> Vec<bool> {
    points.iter().map(|p| bound.contains(p)).collect()
}

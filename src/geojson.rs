//! GeoJSON conversion for cells.
//!
//! Coordinates follow GeoJSON order, `[lng, lat]`, and the feature `bbox` is
//! `[min_lng, min_lat, max_lng, max_lat]`.

use crate::bbox::{Bbox, Cell};
use crate::compute::validation::validate_bit_depth;
use crate::error::{GeohashError, Result};
use crate::hashing::decode_unchecked;
use crate::types::Coordinates;
use ::geojson::{Feature, Geometry, JsonObject, PolygonType, Value};

/// Closed exterior ring SW, SE, NE, NW, SW.
fn cell_ring(bbox: &Bbox) -> PolygonType {
    vec![vec![
        vec![bbox.min_lng, bbox.min_lat],
        vec![bbox.max_lng, bbox.min_lat],
        vec![bbox.max_lng, bbox.max_lat],
        vec![bbox.min_lng, bbox.max_lat],
        vec![bbox.min_lng, bbox.min_lat],
    ]]
}

fn geojson_bbox(bbox: &Bbox) -> Vec<f64> {
    vec![bbox.min_lng, bbox.min_lat, bbox.max_lng, bbox.max_lat]
}

fn coordinates_properties(coords: &Coordinates) -> Result<JsonObject> {
    match serde_json::to_value(coords)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(GeohashError::SerializationErrorWithContext(format!(
            "Expected cell properties to serialize as an object, got: {}",
            other
        ))),
    }
}

fn polygon_feature(coords: &Coordinates) -> Result<Feature> {
    let bbox = coords.bbox();

    Ok(Feature {
        bbox: Some(geojson_bbox(&bbox)),
        geometry: Some(Geometry::new(Value::Polygon(cell_ring(&bbox)))),
        id: None,
        properties: Some(coordinates_properties(coords)?),
        foreign_members: None,
    })
}

/// Converts a cell into a `Polygon` feature.
///
/// The feature properties hold the decoded center and error:
/// `{"lat", "lng", "error": {"lat", "lng"}}`.
pub fn hash_int_to_polygon(hash: u64, bit_depth: u8) -> Result<Feature> {
    validate_bit_depth(bit_depth)?;
    polygon_feature(&decode_unchecked(hash, bit_depth))
}

/// Converts a base-32 cell into a `Polygon` feature.
///
/// # Examples
///
/// ```
/// use spatio_geohash::geojson::hash_base32_to_polygon;
///
/// let feature = hash_base32_to_polygon("gbsuv")?;
/// assert_eq!(
///     feature.bbox,
///     Some(vec![-4.3505859375, 48.6474609375, -4.306640625, 48.69140625])
/// );
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn hash_base32_to_polygon(hash: &str) -> Result<Feature> {
    let cell = Cell::from_base32(hash)?;
    polygon_feature(&cell.decode())
}

fn multi_polygon_feature(extents: Vec<Bbox>) -> Feature {
    let bbox = extents.iter().copied().reduce(|acc, extent| Bbox {
        min_lat: acc.min_lat.min(extent.min_lat),
        min_lng: acc.min_lng.min(extent.min_lng),
        max_lat: acc.max_lat.max(extent.max_lat),
        max_lng: acc.max_lng.max(extent.max_lng),
    });
    let polygons = extents.iter().map(cell_ring).collect();

    Feature {
        bbox: bbox.as_ref().map(geojson_bbox),
        geometry: Some(Geometry::new(Value::MultiPolygon(polygons))),
        id: None,
        properties: None,
        foreign_members: None,
    }
}

/// Converts cells, possibly of different depths, into one `MultiPolygon`
/// feature. Polygons keep the input order.
pub fn hash_int_array_to_multi_polygon(cells: &[Cell]) -> Feature {
    multi_polygon_feature(cells.iter().map(Cell::bbox).collect())
}

/// Converts base-32 cells into one `MultiPolygon` feature.
pub fn hash_base32_array_to_multi_polygon<S: AsRef<str>>(hashes: &[S]) -> Result<Feature> {
    let extents = hashes
        .iter()
        .map(|hash| Cell::from_base32(hash.as_ref()).map(|cell| cell.bbox()))
        .collect::<Result<Vec<_>>>()?;

    Ok(multi_polygon_feature(extents))
}

//! Cell Cover Example
//!
//! Covers Manhattan with cells of one length and prints the cover as a
//! GeoJSON `MultiPolygon` feature.

use spatio_geohash::geojson::hash_base32_array_to_multi_polygon;
use spatio_geohash::{Bbox, encode_bbox, hashes_within_box_base32};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Southwest corner (Battery Park), northeast corner (Inwood)
    let manhattan = Bbox::new(40.6829, -74.0479, 40.8820, -73.9067);

    if let Some(cell) = encode_bbox(
        manhattan.min_lat,
        manhattan.min_lng,
        manhattan.max_lat,
        manhattan.max_lng,
    )? {
        eprintln!(
            "Enclosing cell: {} at depth {} ({})",
            cell.hash(),
            cell.bit_depth(),
            cell.to_base32().unwrap_or_else(|_| "-".to_string())
        );
    }

    let cells = hashes_within_box_base32(
        manhattan.min_lat,
        manhattan.min_lng,
        manhattan.max_lat,
        manhattan.max_lng,
        5,
    )?;
    eprintln!("{} cells of length 5", cells.len());

    let feature = hash_base32_array_to_multi_polygon(&cells)?;
    println!("{}", serde_json::to_string_pretty(&feature)?);

    Ok(())
}

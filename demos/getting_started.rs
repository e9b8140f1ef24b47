//! Getting Started Example
//!
//! This example walks through encoding, decoding, neighbors and range
//! queries with both integer and base-32 hashes.

use spatio_geohash::prelude::*;
use spatio_geohash::{hashes_within_box_base32, neighbors_base32};
use std::error::Error;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Spatio Geohash - Getting Started ===\n");

    // ========================================
    // 1. Base-32 hashes
    // ========================================
    println!("1. Base-32 hashes");
    println!("-----------------");

    let hash = encode_base32(37.8324, 112.5584, 9)?;
    let coords = decode_base32(&hash)?;
    println!("   (37.8324, 112.5584) -> {}", hash);
    println!(
        "   {} -> ({:.6}, {:.6}) ± ({:.6}°, {:.6}°)",
        hash, coords.lat, coords.lng, coords.error.lat, coords.error.lng
    );

    // ========================================
    // 2. Integer hashes
    // ========================================
    println!("\n2. Integer hashes");
    println!("-----------------");

    for bit_depth in [16u8, 32, 52] {
        let hash = encode(40.7128, -74.0060, bit_depth)?;
        let bbox = decode_bbox(hash, bit_depth)?;
        println!(
            "   depth {:>2}: {:>16} covers {:.6}° x {:.6}°",
            bit_depth,
            hash,
            bbox.height(),
            bbox.width()
        );
    }

    // ========================================
    // 3. Neighbors
    // ========================================
    println!("\n3. Neighbors of szpssgq");
    println!("-----------------------");

    for (direction, neighbor) in neighbors_base32("szpssgq")?.iter() {
        println!("   {:<10} {}", direction, neighbor);
    }

    // ========================================
    // 4. Enclosing cell and range
    // ========================================
    println!("\n4. Bounding boxes");
    println!("-----------------");

    let query = Bbox::new(40.1825, 44.512, 40.185, 44.516);
    match encode_bbox(query.min_lat, query.min_lng, query.max_lat, query.max_lng)? {
        Some(cell) => println!(
            "   Smallest enclosing cell: {} at depth {}",
            cell.hash(), cell.bit_depth()
        ),
        None => println!("   No single cell encloses the box"),
    }

    let cells = hashes_within_box_base32(query.min_lat, query.min_lng, query.max_lat, query.max_lng, 7)?;
    println!("   {} cells of length 7 cover the box: {:?}", cells.len(), cells);

    // ========================================
    // 5. Fixed-precision geohasher
    // ========================================
    println!("\n5. Geohasher");
    println!("------------");

    let hasher = GeohasherBuilder::new()
        .bit_depth(30)
        .neighbor_wrap(NeighborWrap::None)
        .build()?;
    let hash = hasher.encode(0.0, 179.99)?;
    match hasher.neighbor(hash, Direction::East) {
        Ok(east) => println!("   East of {} is {}", hash, east),
        Err(e) => println!("   {}", e),
    }

    println!("\n=== Done ===");
    Ok(())
}

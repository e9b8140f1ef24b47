//! Enumeration of every cell overlapping a rectangle.

use crate::base32::int_to_base32_unchecked;
use crate::bbox::decode_bbox_unchecked;
use crate::compute::validation::{validate_base32_length, validate_bbox, validate_bit_depth};
use crate::error::Result;
use crate::hashing::{decode_unchecked, encode_unchecked};
use crate::BASE32_BITS_PER_CHAR;

/// Lists the integer hashes of all cells at `bit_depth` whose extent
/// overlaps the rectangle, partially covered edge cells included.
///
/// Cells that only share an edge with the rectangle are left out, on every
/// side. A degenerate rectangle (a point or a line) yields the cells holding
/// it, following the encode rule that a value on a cell edge belongs to the
/// cell north or east of it.
///
/// The walk starts at the center of the cell holding the southwest corner and
/// steps one cell at a time up to the cell holding the northeast corner. All
/// cells of one depth share the same size, so the step is constant. Rows run
/// south to north, cells within a row west to east; callers should not rely
/// on that order.
///
/// The result grows with the covered area and the bit depth. No limit is
/// applied here.
///
/// # Examples
///
/// ```
/// use spatio_geohash::hashes_within_box;
///
/// let mut hashes = hashes_within_box(
///     40.17520776009799,
///     44.50734670780776,
///     40.18798176349887,
///     44.51627726366204,
///     32,
/// )?;
/// hashes.sort_unstable();
/// assert_eq!(hashes.len(), 10);
/// assert_eq!(hashes[0], 3354102829);
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn hashes_within_box(
    min_lat: f64,
    min_lng: f64,
    max_lat: f64,
    max_lng: f64,
    bit_depth: u8,
) -> Result<Vec<u64>> {
    validate_bbox(min_lat, min_lng, max_lat, max_lng)?;
    validate_bit_depth(bit_depth)?;

    Ok(hashes_within_box_unchecked(
        min_lat, min_lng, max_lat, max_lng, bit_depth,
    ))
}

fn hashes_within_box_unchecked(
    min_lat: f64,
    min_lng: f64,
    max_lat: f64,
    max_lng: f64,
    bit_depth: u8,
) -> Vec<u64> {
    let south_west = decode_unchecked(encode_unchecked(min_lat, min_lng, bit_depth), bit_depth);
    let north_east = decode_bbox_unchecked(encode_unchecked(max_lat, max_lng, bit_depth), bit_depth);

    let lat_step = south_west.error.lat * 2.0;
    let lng_step = south_west.error.lng * 2.0;

    // Both spans are whole multiples of the step, so rounding only strips
    // the representation of an exact integer.
    let mut rows = ((north_east.max_lat - (south_west.lat - south_west.error.lat)) / lat_step)
        .round() as usize;
    let mut columns = ((north_east.max_lng - (south_west.lng - south_west.error.lng)) / lng_step)
        .round() as usize;

    // A max edge lying on a cell boundary encodes into the next cell over,
    // which only touches the rectangle.
    if rows > 1 && north_east.min_lat == max_lat {
        rows -= 1;
    }
    if columns > 1 && north_east.min_lng == max_lng {
        columns -= 1;
    }

    let mut hashes = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        let lat = south_west.lat + row as f64 * lat_step;
        for column in 0..columns {
            let lng = south_west.lng + column as f64 * lng_step;
            hashes.push(encode_unchecked(lat, lng, bit_depth));
        }
    }

    log::debug!(
        "Enumerated {} cells ({} rows x {} columns) at bit depth {}",
        hashes.len(),
        rows,
        columns,
        bit_depth
    );

    hashes
}

/// Lists the base-32 hashes of all cells of `length` symbols overlapping the
/// rectangle. See [`hashes_within_box`].
pub fn hashes_within_box_base32(
    min_lat: f64,
    min_lng: f64,
    max_lat: f64,
    max_lng: f64,
    length: usize,
) -> Result<Vec<String>> {
    validate_bbox(min_lat, min_lng, max_lat, max_lng)?;
    validate_base32_length(length)?;

    let bit_depth = length as u8 * BASE32_BITS_PER_CHAR;
    Ok(
        hashes_within_box_unchecked(min_lat, min_lng, max_lat, max_lng, bit_depth)
            .into_iter()
            .map(|hash| int_to_base32_unchecked(hash, length))
            .collect(),
    )
}

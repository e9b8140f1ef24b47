//! Cell extents and smallest-enclosing-cell search.

use crate::base32::{int_to_base32_unchecked, parse_base32};
use crate::compute::validation::{validate_bbox, validate_bit_depth};
use crate::error::{GeohashError, Result};
use crate::hashing::{decode_unchecked, encode_unchecked};
use crate::types::Coordinates;
use crate::{BASE32_BITS_PER_CHAR, BASE32_HASH_MAX_LENGTH, MAX_BIT_DEPTH};
use geo::{Rect, coord};
use serde::{Deserialize, Serialize};

/// A latitude/longitude rectangle in degrees.
///
/// Used both for cell extents and for query rectangles. All comparisons are
/// inclusive on every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bbox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl Bbox {
    /// Create a rectangle from its southwest and northeast corners.
    ///
    /// No validation happens here; operations taking a `Bbox` validate it.
    pub fn new(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
        }
    }

    /// Check if `other` lies entirely within this rectangle (edges included).
    pub fn contains(&self, other: &Bbox) -> bool {
        self.min_lat <= other.min_lat
            && self.min_lng <= other.min_lng
            && self.max_lat >= other.max_lat
            && self.max_lng >= other.max_lng
    }

    /// Check if a point lies within this rectangle (edges included).
    pub fn contains_point(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }

    /// Check if the two rectangles share at least one point.
    pub fn intersects(&self, other: &Bbox) -> bool {
        !(self.max_lat < other.min_lat
            || self.min_lat > other.max_lat
            || self.max_lng < other.min_lng
            || self.min_lng > other.max_lng)
    }

    /// Check if the two rectangles share a region of positive area.
    ///
    /// Cells of one bit depth tile the plane, so neighbors touch but never
    /// overlap.
    pub fn overlaps(&self, other: &Bbox) -> bool {
        self.min_lat < other.max_lat
            && other.min_lat < self.max_lat
            && self.min_lng < other.max_lng
            && other.min_lng < self.max_lng
    }

    /// Get the center as `(lat, lng)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// Get the latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Get the longitude span in degrees.
    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Convert to a `geo::Rect` (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            coord! { x: self.min_lng, y: self.min_lat },
            coord! { x: self.max_lng, y: self.max_lat },
        )
    }
}

impl From<Bbox> for Rect {
    fn from(bbox: Bbox) -> Self {
        bbox.to_rect()
    }
}

impl From<Rect> for Bbox {
    fn from(rect: Rect) -> Self {
        Self::new(rect.min().y, rect.min().x, rect.max().y, rect.max().x)
    }
}

/// An integer hash paired with the bit depth it is read at.
///
/// The same integer names different cells at different depths, so the two
/// always travel together. A `Cell` always holds a depth in [1, 52] and no
/// bits above it; deserialization goes through [`Cell::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    hash: u64,
    bit_depth: u8,
}

#[derive(Deserialize)]
struct RawCell {
    hash: u64,
    bit_depth: u8,
}

impl TryFrom<RawCell> for Cell {
    type Error = GeohashError;

    fn try_from(raw: RawCell) -> Result<Self> {
        Cell::new(raw.hash, raw.bit_depth)
    }
}

impl Cell {
    /// Create a cell, rejecting invalid depths and hashes with bits set above
    /// `bit_depth`.
    pub fn new(hash: u64, bit_depth: u8) -> Result<Self> {
        validate_bit_depth(bit_depth)?;

        if hash >> bit_depth != 0 {
            return Err(GeohashError::InvalidInput(format!(
                "Hash {} has bits set above bit depth {}",
                hash, bit_depth
            )));
        }

        Ok(Self { hash, bit_depth })
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn bit_depth(&self) -> u8 {
        self.bit_depth
    }

    /// Parse a base-32 hash into a cell of `5 * hash.len()` bits.
    pub fn from_base32(hash: &str) -> Result<Self> {
        let (hash, bit_depth) = parse_base32(hash)?;
        Ok(Self { hash, bit_depth })
    }

    /// Render as base-32. Only depths that are a multiple of 5, up to 45,
    /// have a base-32 form.
    pub fn to_base32(&self) -> Result<String> {
        let symbol_bits = BASE32_BITS_PER_CHAR;
        if self.bit_depth % symbol_bits != 0
            || usize::from(self.bit_depth / symbol_bits) > BASE32_HASH_MAX_LENGTH
        {
            return Err(GeohashError::InvalidInput(format!(
                "Bit depth {} has no base-32 form",
                self.bit_depth
            )));
        }
        Ok(int_to_base32_unchecked(
            self.hash,
            usize::from(self.bit_depth / symbol_bits),
        ))
    }

    pub fn decode(&self) -> Coordinates {
        decode_unchecked(self.hash, self.bit_depth)
    }

    pub fn bbox(&self) -> Bbox {
        self.decode().bbox()
    }

    /// The enclosing cell one bit shallower, or `None` at depth 1.
    pub fn parent(&self) -> Option<Cell> {
        (self.bit_depth > 1).then(|| Cell {
            hash: self.hash >> 1,
            bit_depth: self.bit_depth - 1,
        })
    }
}

/// Computes the extent of the cell `hash` at `bit_depth`.
///
/// # Examples
///
/// ```
/// use spatio_geohash::{decode_bbox, encode};
///
/// let hash = encode(40.183868408203125, 44.51385498046875, 32)?;
/// let bbox = decode_bbox(hash, 32)?;
/// assert_eq!(bbox.min_lat, 40.1824951171875);
/// assert_eq!(bbox.max_lng, 44.5166015625);
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn decode_bbox(hash: u64, bit_depth: u8) -> Result<Bbox> {
    validate_bit_depth(bit_depth)?;
    Ok(decode_bbox_unchecked(hash, bit_depth))
}

pub(crate) fn decode_bbox_unchecked(hash: u64, bit_depth: u8) -> Bbox {
    decode_unchecked(hash, bit_depth).bbox()
}

/// Computes the extent of a base-32 cell.
pub fn decode_bbox_base32(hash: &str) -> Result<Bbox> {
    let (value, bit_depth) = parse_base32(hash)?;
    Ok(decode_bbox_unchecked(value, bit_depth))
}

/// Finds the smallest cell whose extent contains the rectangle.
///
/// The rectangle's midpoint is encoded at full depth and its prefixes are
/// tried from the longest down. Returns `Ok(None)` when no prefix covers the
/// rectangle. The first bit always splits the world at the prime meridian, so
/// a rectangle reaching into both the western and eastern hemispheres has no
/// enclosing cell at any depth from 1 to 52.
///
/// # Errors
///
/// Returns a domain error for out-of-range corners or an inverted rectangle.
///
/// # Examples
///
/// ```
/// use spatio_geohash::{Cell, encode_bbox};
///
/// let cell = encode_bbox(40.1825, 44.512, 40.185, 44.516)?;
/// assert_eq!(cell, Some(Cell::new(3354102846, 32)?));
///
/// // Spans the prime meridian
/// assert_eq!(encode_bbox(10.0, -104.5, 20.0, 120.5)?, None);
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn encode_bbox(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Result<Option<Cell>> {
    validate_bbox(min_lat, min_lng, max_lat, max_lng)?;

    let query = Bbox::new(min_lat, min_lng, max_lat, max_lng);
    let (mid_lat, mid_lng) = query.center();
    let full_hash = encode_unchecked(mid_lat, mid_lng, MAX_BIT_DEPTH);

    let found = (1..=MAX_BIT_DEPTH).rev().find_map(|bit_depth| {
        let hash = full_hash >> (MAX_BIT_DEPTH - bit_depth);
        decode_bbox_unchecked(hash, bit_depth)
            .contains(&query)
            .then_some(Cell { hash, bit_depth })
    });

    match found {
        Some(cell) => log::debug!(
            "Rectangle {:?} fits cell {} at bit depth {}",
            query,
            cell.hash,
            cell.bit_depth
        ),
        None => log::debug!("Rectangle {:?} is not representable by a single cell", query),
    }

    Ok(found)
}

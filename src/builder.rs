//! Geohasher builder for fixed-precision configuration
//!
//! The free functions take a precision on every call. A [`Geohasher`] binds a
//! validated [`Config`] once, so callers working at a single depth pass only
//! coordinates and hashes.

use crate::bbox::{Bbox, Cell, decode_bbox, encode_bbox};
use crate::error::Result;
use crate::hashing::{decode, decode_base32, encode, encode_base32};
use crate::neighbors::{
    Direction, NeighborWrap, Neighbors, neighbor_base32_with_wrap, neighbor_with_wrap,
    neighbors_base32_with_wrap, neighbors_with_wrap,
};
use crate::range::{hashes_within_box, hashes_within_box_base32};
use crate::types::{Config, Coordinates};

/// Builder for a [`Geohasher`] with a chosen precision and seam behavior.
#[derive(Debug, Clone, Default)]
pub struct GeohasherBuilder {
    config: Config,
}

impl GeohasherBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Bit depth for integer operations.
    pub fn bit_depth(mut self, bit_depth: u8) -> Self {
        self.config = self.config.with_bit_depth(bit_depth);
        self
    }

    /// Symbol count for base-32 operations.
    pub fn length(mut self, length: usize) -> Self {
        self.config = self.config.with_length(length);
        self
    }

    pub fn neighbor_wrap(mut self, wrap: NeighborWrap) -> Self {
        self.config = self.config.with_neighbor_wrap(wrap);
        self
    }

    /// Build the geohasher. Fails if the configuration is out of range.
    pub fn build(self) -> Result<Geohasher> {
        self.config.validate()?;
        log::debug!(
            "Built geohasher: bit depth {}, length {}, wrap {:?}",
            self.config.default_bit_depth,
            self.config.default_length,
            self.config.neighbor_wrap
        );
        Ok(Geohasher {
            config: self.config,
        })
    }
}

/// Geohash operations at a fixed precision.
///
/// # Example
///
/// ```rust
/// use spatio_geohash::{Direction, GeohasherBuilder};
///
/// let hasher = GeohasherBuilder::new().bit_depth(30).length(7).build()?;
///
/// let hash = hasher.encode(40.18, 44.51)?;
/// let coords = hasher.decode(hash)?;
/// assert!((coords.lat - 40.18).abs() <= coords.error.lat);
///
/// assert_eq!(hasher.neighbor_base32("szpssgq", Direction::North)?, "szpssgw");
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geohasher {
    config: Config,
}

impl Geohasher {
    /// Geohasher with the default configuration: 52 bits, 9 symbols,
    /// longitude wrap.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bit_depth(&self) -> u8 {
        self.config.default_bit_depth
    }

    pub fn length(&self) -> usize {
        self.config.default_length
    }

    pub fn encode(&self, lat: f64, lng: f64) -> Result<u64> {
        encode(lat, lng, self.bit_depth())
    }

    pub fn decode(&self, hash: u64) -> Result<Coordinates> {
        decode(hash, self.bit_depth())
    }

    /// The configured depth as a [`Cell`] holding the point.
    pub fn cell(&self, lat: f64, lng: f64) -> Result<Cell> {
        Cell::new(self.encode(lat, lng)?, self.bit_depth())
    }

    pub fn encode_base32(&self, lat: f64, lng: f64) -> Result<String> {
        encode_base32(lat, lng, self.length())
    }

    /// Decodes a base-32 hash of any valid length; the configured length is
    /// not enforced.
    pub fn decode_base32(&self, hash: &str) -> Result<Coordinates> {
        decode_base32(hash)
    }

    pub fn decode_bbox(&self, hash: u64) -> Result<Bbox> {
        decode_bbox(hash, self.bit_depth())
    }

    /// Deepest cell enclosing the rectangle. Independent of the configured
    /// depth.
    pub fn encode_bbox(&self, bbox: &Bbox) -> Result<Option<Cell>> {
        encode_bbox(bbox.min_lat, bbox.min_lng, bbox.max_lat, bbox.max_lng)
    }

    pub fn neighbor(&self, hash: u64, direction: Direction) -> Result<u64> {
        neighbor_with_wrap(hash, direction, self.bit_depth(), self.config.neighbor_wrap)
    }

    pub fn neighbors(&self, hash: u64) -> Result<Neighbors<u64>> {
        neighbors_with_wrap(hash, self.bit_depth(), self.config.neighbor_wrap)
    }

    pub fn neighbor_base32(&self, hash: &str, direction: Direction) -> Result<String> {
        neighbor_base32_with_wrap(hash, direction, self.config.neighbor_wrap)
    }

    pub fn neighbors_base32(&self, hash: &str) -> Result<Neighbors<String>> {
        neighbors_base32_with_wrap(hash, self.config.neighbor_wrap)
    }

    pub fn hashes_within_box(&self, bbox: &Bbox) -> Result<Vec<u64>> {
        hashes_within_box(
            bbox.min_lat,
            bbox.min_lng,
            bbox.max_lat,
            bbox.max_lng,
            self.bit_depth(),
        )
    }

    pub fn hashes_within_box_base32(&self, bbox: &Bbox) -> Result<Vec<String>> {
        hashes_within_box_base32(
            bbox.min_lat,
            bbox.min_lng,
            bbox.max_lat,
            bbox.max_lng,
            self.length(),
        )
    }
}

impl Default for Geohasher {
    fn default() -> Self {
        Self::new()
    }
}

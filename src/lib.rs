//! Geohash encoding for integer and base-32 hashes, with neighbor lookup,
//! bounding-box enclosure and range enumeration.
//!
//! ```rust
//! use spatio_geohash::{Direction, decode_base32, encode_base32, neighbor_base32};
//!
//! let hash = encode_base32(37.8324, 112.5584, 9)?;
//! assert_eq!(hash, "ww8p1r4t8");
//!
//! let coords = decode_base32(&hash)?;
//! assert!((coords.lat - 37.8324).abs() <= coords.error.lat);
//!
//! assert_eq!(neighbor_base32(&hash, Direction::East)?, "ww8p1r4t9");
//! # Ok::<(), spatio_geohash::GeohashError>(())
//! ```
//!
//! Integer hashes carry up to [`MAX_BIT_DEPTH`] bits and always travel with
//! the bit depth they are read at. Base-32 hashes carry 5 bits per symbol.

pub mod base32;
pub mod bbox;
pub mod builder;
pub mod compute;
pub mod error;
pub mod hashing;
pub mod neighbors;
pub mod range;
pub mod types;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use builder::{Geohasher, GeohasherBuilder};
pub use error::{GeohashError, Result};

pub use base32::{BASE32_DIGITS, base32_to_int, int_to_base32};
pub use bbox::{Bbox, Cell, decode_bbox, decode_bbox_base32, encode_bbox};
pub use hashing::{
    decode, decode_base32, encode, encode_base32, encode_max, latitude_bit_depth,
    longitude_bit_depth, merge_hashes, split_hash,
};
pub use neighbors::{
    Direction, NeighborWrap, Neighbors, neighbor, neighbor_base32, neighbor_base32_with_wrap,
    neighbor_with_wrap, neighbors, neighbors_base32, neighbors_base32_with_wrap,
    neighbors_with_wrap,
};
pub use range::{hashes_within_box, hashes_within_box_base32};
pub use types::{CellError, Config, Coordinates};

pub use geo::{Point, Rect};

/// Shortest base-32 hash.
pub const BASE32_HASH_MIN_LENGTH: usize = 1;
/// Longest base-32 hash, 45 bits.
pub const BASE32_HASH_MAX_LENGTH: usize = 9;
/// Bits carried by one base-32 symbol.
pub const BASE32_BITS_PER_CHAR: u8 = 5;

pub const MIN_BIT_DEPTH: u8 = 1;
/// Deepest integer hash. 52 bits keep every hash exactly representable as an
/// IEEE-754 double.
pub const MAX_BIT_DEPTH: u8 = 52;

pub const LATITUDE_MAX_VALUE: f64 = 90.0;
pub const LONGITUDE_MAX_VALUE: f64 = 180.0;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{GeohashError, Geohasher, GeohasherBuilder, Result};

    pub use crate::{Bbox, Cell, Config, Coordinates, Direction, NeighborWrap, Neighbors};

    pub use crate::{
        decode, decode_base32, decode_bbox, encode, encode_base32, encode_bbox, hashes_within_box,
        neighbor, neighbor_base32, neighbors,
    };

    pub use geo::{Point, Rect};
}

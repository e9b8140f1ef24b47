//! Bit-level Geohash encoding and decoding.
//!
//! A hash of `N` bits is read most significant bit first. Even positions
//! (0, 2, 4, ...) bisect the longitude range [-180, 180], odd positions bisect
//! the latitude range [-90, 90]. Longitude therefore receives `ceil(N / 2)`
//! bits and latitude `floor(N / 2)`, and any prefix of a hash is itself the
//! hash of the enclosing cell.
//!
//! Every midpoint and error is an exact binary fraction of 90 or 180, so the
//! arithmetic below is exact in `f64` for all supported depths.

use crate::base32::{int_to_base32_unchecked, parse_base32};
use crate::compute::validation::{validate_base32_length, validate_bit_depth, validate_lat_lng};
use crate::error::Result;
use crate::types::{CellError, Coordinates};
use crate::{BASE32_BITS_PER_CHAR, LATITUDE_MAX_VALUE, LONGITUDE_MAX_VALUE, MAX_BIT_DEPTH};

/// Running state of the binary search along one axis.
#[derive(Debug, Clone, Copy)]
struct Bisection {
    mid: f64,
    error: f64,
}

impl Bisection {
    const fn new(half_range: f64) -> Self {
        Self {
            mid: 0.0,
            error: half_range,
        }
    }

    /// Picks the half containing `value` and returns the bit for it.
    fn narrow_toward(&mut self, value: f64) -> u64 {
        let bit = u64::from(value >= self.mid);
        self.narrow(bit);
        bit
    }

    fn narrow(&mut self, bit: u64) {
        self.error /= 2.0;
        if bit == 1 {
            self.mid += self.error;
        } else {
            self.mid -= self.error;
        }
    }
}

#[inline]
const fn is_longitude_position(position: u8) -> bool {
    position % 2 == 0
}

/// Number of bits a hash of `bit_depth` bits spends on latitude.
pub const fn latitude_bit_depth(bit_depth: u8) -> u8 {
    bit_depth / 2
}

/// Number of bits a hash of `bit_depth` bits spends on longitude.
pub const fn longitude_bit_depth(bit_depth: u8) -> u8 {
    bit_depth - bit_depth / 2
}

/// Encodes coordinates into an integer hash of `bit_depth` bits.
///
/// # Errors
///
/// Returns a domain error if the latitude is outside [-90, 90], the
/// longitude outside [-180, 180], or `bit_depth` outside [1, 52].
///
/// # Examples
///
/// ```
/// use spatio_geohash::encode;
///
/// let hash = encode(40.183868408203125, 44.51385498046875, 32)?;
/// assert_eq!(hash, 0b11000111111010111000110000111110);
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn encode(lat: f64, lng: f64, bit_depth: u8) -> Result<u64> {
    validate_lat_lng(lat, lng)?;
    validate_bit_depth(bit_depth)?;
    Ok(encode_unchecked(lat, lng, bit_depth))
}

/// Encodes at the maximum bit depth of 52.
pub fn encode_max(lat: f64, lng: f64) -> Result<u64> {
    encode(lat, lng, MAX_BIT_DEPTH)
}

pub(crate) fn encode_unchecked(lat: f64, lng: f64, bit_depth: u8) -> u64 {
    let mut lat_search = Bisection::new(LATITUDE_MAX_VALUE);
    let mut lng_search = Bisection::new(LONGITUDE_MAX_VALUE);

    (0..bit_depth).fold(0u64, |hash, position| {
        let bit = if is_longitude_position(position) {
            lng_search.narrow_toward(lng)
        } else {
            lat_search.narrow_toward(lat)
        };
        (hash << 1) | bit
    })
}

/// Decodes an integer hash of `bit_depth` bits into the cell center and the
/// half-size of the cell on each axis.
///
/// Bits of `hash` above `bit_depth` are ignored.
///
/// # Examples
///
/// ```
/// use spatio_geohash::decode;
///
/// let coords = decode(0b11000111111010111000110000111110, 32)?;
/// assert_eq!(coords.lat, 40.183868408203125);
/// assert_eq!(coords.lng, 44.51385498046875);
/// assert_eq!(coords.error.lat, 0.001373291015625);
/// assert_eq!(coords.error.lng, 0.00274658203125);
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn decode(hash: u64, bit_depth: u8) -> Result<Coordinates> {
    validate_bit_depth(bit_depth)?;
    Ok(decode_unchecked(hash, bit_depth))
}

pub(crate) fn decode_unchecked(hash: u64, bit_depth: u8) -> Coordinates {
    let mut lat_search = Bisection::new(LATITUDE_MAX_VALUE);
    let mut lng_search = Bisection::new(LONGITUDE_MAX_VALUE);

    for position in 0..bit_depth {
        let bit = (hash >> (bit_depth - 1 - position)) & 1;
        if is_longitude_position(position) {
            lng_search.narrow(bit);
        } else {
            lat_search.narrow(bit);
        }
    }

    Coordinates {
        lat: lat_search.mid,
        lng: lng_search.mid,
        error: CellError {
            lat: lat_search.error,
            lng: lng_search.error,
        },
    }
}

/// Encodes coordinates into a base-32 hash of `length` symbols.
///
/// # Examples
///
/// ```
/// use spatio_geohash::encode_base32;
///
/// assert_eq!(encode_base32(37.8324, 112.5584, 9)?, "ww8p1r4t8");
/// assert_eq!(encode_base32(-90.0, -180.0, 9)?, "000000000");
/// assert_eq!(encode_base32(90.0, 180.0, 9)?, "zzzzzzzzz");
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn encode_base32(lat: f64, lng: f64, length: usize) -> Result<String> {
    validate_lat_lng(lat, lng)?;
    validate_base32_length(length)?;

    let hash = encode_unchecked(lat, lng, length as u8 * BASE32_BITS_PER_CHAR);
    Ok(int_to_base32_unchecked(hash, length))
}

/// Decodes a base-32 hash. Its bit depth is `5 * hash.len()`.
pub fn decode_base32(hash: &str) -> Result<Coordinates> {
    let (value, bit_depth) = parse_base32(hash)?;
    Ok(decode_unchecked(value, bit_depth))
}

/// Splits a hash into its latitude and longitude bit strings.
///
/// Returns `(lat_bits, lng_bits)`, each most significant bit first, holding
/// [`latitude_bit_depth`] and [`longitude_bit_depth`] bits respectively.
pub fn split_hash(hash: u64, bit_depth: u8) -> Result<(u64, u64)> {
    validate_bit_depth(bit_depth)?;

    let mut lat_bits = 0u64;
    let mut lng_bits = 0u64;
    for position in 0..bit_depth {
        let bit = (hash >> (bit_depth - 1 - position)) & 1;
        if is_longitude_position(position) {
            lng_bits = (lng_bits << 1) | bit;
        } else {
            lat_bits = (lat_bits << 1) | bit;
        }
    }

    Ok((lat_bits, lng_bits))
}

/// Interleaves latitude and longitude bit strings into a hash of `bit_depth`
/// bits. Inverse of [`split_hash`].
pub fn merge_hashes(lat_bits: u64, lng_bits: u64, bit_depth: u8) -> Result<u64> {
    validate_bit_depth(bit_depth)?;

    let mut lat_remaining = latitude_bit_depth(bit_depth);
    let mut lng_remaining = longitude_bit_depth(bit_depth);

    Ok((0..bit_depth).fold(0u64, |hash, position| {
        let bit = if is_longitude_position(position) {
            lng_remaining -= 1;
            (lng_bits >> lng_remaining) & 1
        } else {
            lat_remaining -= 1;
            (lat_bits >> lat_remaining) & 1
        };
        (hash << 1) | bit
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeohashError;

    fn given_hash(bits: &str) -> (u64, u8) {
        (u64::from_str_radix(bits, 2).unwrap(), bits.len() as u8)
    }

    #[test]
    fn test_axis_bit_split() {
        assert_eq!((latitude_bit_depth(1), longitude_bit_depth(1)), (0, 1));
        assert_eq!((latitude_bit_depth(31), longitude_bit_depth(31)), (15, 16));
        assert_eq!((latitude_bit_depth(52), longitude_bit_depth(52)), (26, 26));
    }

    #[test]
    fn test_split_hash() {
        let (hash, bit_depth) = given_hash("1100011111101011100011000011111");
        let (lat_bits, _) = given_hash("101110010010011");
        let (lng_bits, _) = given_hash("1001111110100111");

        assert_eq!(split_hash(hash, bit_depth).unwrap(), (lat_bits, lng_bits));
    }

    #[test]
    fn test_merge_hashes() {
        let (lat_bits, lat_depth) = given_hash("101110010010011");
        let (lng_bits, lng_depth) = given_hash("1001111110100111");
        let (expected, _) = given_hash("1100011111101011100011000011111");

        let hash = merge_hashes(lat_bits, lng_bits, lat_depth + lng_depth).unwrap();
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_decode_even_depth() {
        let (hash, bit_depth) = given_hash("11000111111010111000110000111110");

        let coords = decode(hash, bit_depth).unwrap();

        assert_eq!(coords.lat, 40.183868408203125);
        assert_eq!(coords.lng, 44.51385498046875);
        assert_eq!(coords.error.lat, 0.001373291015625);
        assert_eq!(coords.error.lng, 0.00274658203125);
    }

    #[test]
    fn test_decode_odd_depth() {
        let (hash, bit_depth) = given_hash("1100011111101011100011000011111");

        let coords = decode(hash, bit_depth).unwrap();

        assert_eq!(coords.lat, 40.18524169921875);
        assert_eq!(coords.lng, 44.51385498046875);
        assert_eq!(coords.error.lat, 0.00274658203125);
        assert_eq!(coords.error.lng, 0.00274658203125);
    }

    #[test]
    fn test_decode_rejects_invalid_bit_depth() {
        let (hash, _) = given_hash("1100011111101011100011000011111");

        assert_eq!(decode(hash, 0), Err(GeohashError::InvalidBitDepth(0)));
        assert_eq!(decode(hash, 53), Err(GeohashError::InvalidBitDepth(53)));
    }

    #[test]
    fn test_decode_single_bit() {
        // One longitude bit, latitude untouched
        let west = decode(0, 1).unwrap();
        assert_eq!((west.lat, west.lng), (0.0, -90.0));
        assert_eq!((west.error.lat, west.error.lng), (90.0, 90.0));

        let east = decode(1, 1).unwrap();
        assert_eq!(east.lng, 90.0);
    }

    #[test]
    fn test_encode_even_and_odd_depth() {
        let (lat, lng) = (40.183868408203125, 44.51385498046875);

        assert_eq!(
            encode(lat, lng, 32).unwrap(),
            given_hash("11000111111010111000110000111110").0
        );
        assert_eq!(
            encode(lat, lng, 31).unwrap(),
            given_hash("1100011111101011100011000011111").0
        );
    }

    #[test]
    fn test_encode_rejects_out_of_domain() {
        assert_eq!(
            encode(-91.0, 0.0, 10),
            Err(GeohashError::InvalidLatitude(-91.0))
        );
        assert_eq!(
            encode(0.0, 181.0, 10),
            Err(GeohashError::InvalidLongitude(181.0))
        );
        assert_eq!(encode(0.0, 0.0, 0), Err(GeohashError::InvalidBitDepth(0)));
        assert_eq!(encode(0.0, 0.0, 53), Err(GeohashError::InvalidBitDepth(53)));
    }

    #[test]
    fn test_encode_max_uses_full_depth() {
        let hash = encode_max(37.8324, 112.5584).unwrap();
        assert_eq!(hash >> 7, encode(37.8324, 112.5584, 45).unwrap());
    }

    #[test]
    fn test_encode_base32() {
        assert_eq!(encode_base32(37.8324, 112.5584, 9).unwrap(), "ww8p1r4t8");
        assert_eq!(encode_base32(37.8324, 112.5584, 3).unwrap(), "ww8");
    }

    #[test]
    fn test_encode_base32_rejects_invalid_length() {
        assert_eq!(
            encode_base32(37.8324, 112.5584, 0),
            Err(GeohashError::InvalidLength(0))
        );
        assert_eq!(
            encode_base32(37.8324, 112.5584, 10),
            Err(GeohashError::InvalidLength(10))
        );
    }

    #[test]
    fn test_decode_base32() {
        let coords = decode_base32("ww8p1r4t8").unwrap();
        assert_eq!(coords.lat, 37.83238649368286);
        assert_eq!(coords.lng, 112.55838632583618);

        assert_eq!(
            decode_base32("wi8p1r4t8"),
            Err(GeohashError::InvalidCharacter('i'))
        );
    }

    #[test]
    fn test_encode_edge_coordinates() {
        let cases = [
            ((-90.0, -180.0), "000000000"),
            ((-90.0, 0.0), "h00000000"),
            ((-90.0, 180.0), "pbpbpbpbp"),
            ((0.0, -180.0), "800000000"),
            ((0.0, 0.0), "s00000000"),
            ((0.0, 180.0), "xbpbpbpbp"),
            ((90.0, -180.0), "bpbpbpbpb"),
            ((90.0, 0.0), "upbpbpbpb"),
            ((90.0, 180.0), "zzzzzzzzz"),
        ];

        for ((lat, lng), expected) in cases {
            assert_eq!(encode_base32(lat, lng, 9).unwrap(), expected);
        }
    }

    #[test]
    fn test_decode_edge_hashes() {
        let error = CellError {
            lat: 0.000021457672119140625,
            lng: 0.000021457672119140625,
        };
        let cases = [
            ("000000000", -89.99997854232788, -179.99997854232788),
            ("h00000000", -89.99997854232788, 0.000021457672119140625),
            ("pbpbpbpbp", -89.99997854232788, 179.99997854232788),
            ("800000000", 0.000021457672119140625, -179.99997854232788),
            ("s00000000", 0.000021457672119140625, 0.000021457672119140625),
            ("xbpbpbpbp", 0.000021457672119140625, 179.99997854232788),
            ("bpbpbpbpb", 89.99997854232788, -179.99997854232788),
            ("upbpbpbpb", 89.99997854232788, 0.000021457672119140625),
            ("zzzzzzzzz", 89.99997854232788, 179.99997854232788),
        ];

        for (hash, lat, lng) in cases {
            assert_eq!(decode_base32(hash).unwrap(), Coordinates { lat, lng, error });
        }
    }

    #[test]
    fn test_decode_ignores_bits_above_depth() {
        let (hash, bit_depth) = given_hash("1100011111101011100011000011111");
        let noisy = hash | (1 << 40);

        assert_eq!(decode(noisy, bit_depth), decode(hash, bit_depth));
    }
}

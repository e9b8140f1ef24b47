//! Adjacent cells at the same bit depth.
//!
//! A neighbor is found by moving the cell center one full cell width or
//! height in the requested direction and re-encoding it.

use crate::base32::{int_to_base32_unchecked, parse_base32};
use crate::compute::validation::validate_bit_depth;
use crate::error::{GeohashError, Result};
use crate::hashing::{decode_unchecked, encode_unchecked};
use crate::{BASE32_BITS_PER_CHAR, LATITUDE_MAX_VALUE, LONGITUDE_MAX_VALUE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// `(lat_sign, lng_sign)` per direction, indexed by discriminant.
const MULTIPLIERS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit step as `(lat_sign, lng_sign)`, each in {-1, 0, 1}.
    pub const fn multipliers(self) -> (i8, i8) {
        MULTIPLIERS[self as usize]
    }

    pub const fn opposite(self) -> Direction {
        Self::ALL[(self as usize + 4) % 8]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::NorthEast => "northEast",
            Direction::East => "east",
            Direction::SouthEast => "southEast",
            Direction::South => "south",
            Direction::SouthWest => "southWest",
            Direction::West => "west",
            Direction::NorthWest => "northWest",
        }
    }

    const fn abbreviation(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::NorthEast => "ne",
            Direction::East => "e",
            Direction::SouthEast => "se",
            Direction::South => "s",
            Direction::SouthWest => "sw",
            Direction::West => "w",
            Direction::NorthWest => "nw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GeohashError;

    /// Accepts the camelCase names (`northEast`) and compass abbreviations
    /// (`ne`), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        Direction::ALL
            .into_iter()
            .find(|direction| {
                direction.as_str().eq_ignore_ascii_case(s)
                    || direction.abbreviation().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| GeohashError::InvalidInput(format!("Unknown direction: {}", s)))
    }
}

/// What a step across the ±180° longitude seam does.
///
/// A step across a pole always fails with [`GeohashError::NoNeighbor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborWrap {
    /// Continue on the other side of the antimeridian.
    #[default]
    Longitude,
    /// Treat the antimeridian as an edge.
    None,
}

/// One value per direction, in N, NE, E, SE, S, SW, W, NW order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighbors<T> {
    pub north: T,
    pub north_east: T,
    pub east: T,
    pub south_east: T,
    pub south: T,
    pub south_west: T,
    pub west: T,
    pub north_west: T,
}

impl<T> Neighbors<T> {
    fn try_from_fn<F>(mut f: F) -> Result<Self>
    where
        F: FnMut(Direction) -> Result<T>,
    {
        Ok(Self {
            north: f(Direction::North)?,
            north_east: f(Direction::NorthEast)?,
            east: f(Direction::East)?,
            south_east: f(Direction::SouthEast)?,
            south: f(Direction::South)?,
            south_west: f(Direction::SouthWest)?,
            west: f(Direction::West)?,
            north_west: f(Direction::NorthWest)?,
        })
    }

    pub fn get(&self, direction: Direction) -> &T {
        match direction {
            Direction::North => &self.north,
            Direction::NorthEast => &self.north_east,
            Direction::East => &self.east,
            Direction::SouthEast => &self.south_east,
            Direction::South => &self.south,
            Direction::SouthWest => &self.south_west,
            Direction::West => &self.west,
            Direction::NorthWest => &self.north_west,
        }
    }

    /// Iterate `(direction, value)` pairs clockwise from north.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL
            .into_iter()
            .map(move |direction| (direction, self.get(direction)))
    }

    pub fn map<U, F>(self, mut f: F) -> Neighbors<U>
    where
        F: FnMut(T) -> U,
    {
        Neighbors {
            north: f(self.north),
            north_east: f(self.north_east),
            east: f(self.east),
            south_east: f(self.south_east),
            south: f(self.south),
            south_west: f(self.south_west),
            west: f(self.west),
            north_west: f(self.north_west),
        }
    }
}

/// Finds the adjacent cell in `direction`, wrapping across the antimeridian.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidBitDepth`] for a depth outside [1, 52] and
/// [`GeohashError::NoNeighbor`] when the step crosses a pole.
///
/// # Examples
///
/// ```
/// use spatio_geohash::{Direction, neighbor};
///
/// let hash = 0b110001111110101110001100001111;
/// assert_eq!(neighbor(hash, Direction::South, 30)?, 838525710);
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn neighbor(hash: u64, direction: Direction, bit_depth: u8) -> Result<u64> {
    neighbor_with_wrap(hash, direction, bit_depth, NeighborWrap::default())
}

/// Like [`neighbor`], with explicit antimeridian behavior.
pub fn neighbor_with_wrap(
    hash: u64,
    direction: Direction,
    bit_depth: u8,
    wrap: NeighborWrap,
) -> Result<u64> {
    validate_bit_depth(bit_depth)?;
    neighbor_unchecked(hash, direction, bit_depth, wrap)
}

fn neighbor_unchecked(
    hash: u64,
    direction: Direction,
    bit_depth: u8,
    wrap: NeighborWrap,
) -> Result<u64> {
    let coords = decode_unchecked(hash, bit_depth);
    let (lat_sign, lng_sign) = direction.multipliers();

    let lat = coords.lat + f64::from(lat_sign) * coords.error.lat * 2.0;
    let mut lng = coords.lng + f64::from(lng_sign) * coords.error.lng * 2.0;

    let no_neighbor = || GeohashError::NoNeighbor {
        direction,
        hash,
        bit_depth,
    };

    if lat.abs() > LATITUDE_MAX_VALUE {
        return Err(no_neighbor());
    }

    if lng.abs() > LONGITUDE_MAX_VALUE {
        match wrap {
            NeighborWrap::Longitude => lng -= 2.0 * LONGITUDE_MAX_VALUE * lng.signum(),
            NeighborWrap::None => return Err(no_neighbor()),
        }
    }

    log::trace!(
        "Neighbor {} of cell {} at depth {}: ({}, {}) -> ({}, {})",
        direction,
        hash,
        bit_depth,
        coords.lat,
        coords.lng,
        lat,
        lng
    );

    Ok(encode_unchecked(lat, lng, bit_depth))
}

/// Finds all eight adjacent cells.
///
/// Fails if any one of them does not exist, i.e. for cells touching a pole.
pub fn neighbors(hash: u64, bit_depth: u8) -> Result<Neighbors<u64>> {
    neighbors_with_wrap(hash, bit_depth, NeighborWrap::default())
}

/// Like [`neighbors`], with explicit antimeridian behavior.
pub fn neighbors_with_wrap(hash: u64, bit_depth: u8, wrap: NeighborWrap) -> Result<Neighbors<u64>> {
    validate_bit_depth(bit_depth)?;
    Neighbors::try_from_fn(|direction| neighbor_unchecked(hash, direction, bit_depth, wrap))
}

/// Finds the adjacent cell of a base-32 hash.
///
/// # Examples
///
/// ```
/// use spatio_geohash::{Direction, neighbor_base32};
///
/// assert_eq!(neighbor_base32("ww8p1r4t8", Direction::East)?, "ww8p1r4t9");
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn neighbor_base32(hash: &str, direction: Direction) -> Result<String> {
    neighbor_base32_with_wrap(hash, direction, NeighborWrap::default())
}

pub fn neighbor_base32_with_wrap(
    hash: &str,
    direction: Direction,
    wrap: NeighborWrap,
) -> Result<String> {
    let (value, bit_depth) = parse_base32(hash)?;
    let length = usize::from(bit_depth / BASE32_BITS_PER_CHAR);

    let adjacent = neighbor_unchecked(value, direction, bit_depth, wrap)?;
    Ok(int_to_base32_unchecked(adjacent, length))
}

/// Finds all eight adjacent cells of a base-32 hash.
pub fn neighbors_base32(hash: &str) -> Result<Neighbors<String>> {
    neighbors_base32_with_wrap(hash, NeighborWrap::default())
}

pub fn neighbors_base32_with_wrap(hash: &str, wrap: NeighborWrap) -> Result<Neighbors<String>> {
    let (value, bit_depth) = parse_base32(hash)?;
    let length = usize::from(bit_depth / BASE32_BITS_PER_CHAR);

    let adjacent = neighbors_with_wrap(value, bit_depth, wrap)?;
    Ok(adjacent.map(|cell| int_to_base32_unchecked(cell, length)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_bbox, encode};

    fn given_hash(bits: &str) -> (u64, u8) {
        (u64::from_str_radix(bits, 2).unwrap(), bits.len() as u8)
    }

    #[test]
    fn test_direction_multipliers() {
        let multipliers: Vec<(i8, i8)> = Direction::ALL
            .into_iter()
            .map(Direction::multipliers)
            .collect();

        assert_eq!(
            multipliers,
            vec![
                (1, 0),
                (1, 1),
                (0, 1),
                (-1, 1),
                (-1, 0),
                (-1, -1),
                (0, -1),
                (1, -1)
            ]
        );
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        assert_eq!(Direction::West.opposite(), Direction::East);
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_direction_parse_and_display() {
        assert_eq!("northEast".parse::<Direction>().unwrap(), Direction::NorthEast);
        assert_eq!("NE".parse::<Direction>().unwrap(), Direction::NorthEast);
        assert_eq!("south".parse::<Direction>().unwrap(), Direction::South);
        assert!("up".parse::<Direction>().is_err());

        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
        }
    }

    #[test]
    fn test_direction_serde() {
        assert_eq!(
            serde_json::to_string(&Direction::SouthWest).unwrap(),
            "\"southWest\""
        );
    }

    #[test]
    fn test_neighbor_int() {
        let (hash, bit_depth) = given_hash("110001111110101110001100001111");

        assert_eq!(neighbor(hash, Direction::South, bit_depth).unwrap(), 838525710);
    }

    #[test]
    fn test_neighbor_rejects_invalid_bit_depth() {
        let (hash, _) = given_hash("1100011111101011100011000011111");

        assert_eq!(
            neighbor(hash, Direction::South, 0),
            Err(GeohashError::InvalidBitDepth(0))
        );
        assert_eq!(
            neighbor(hash, Direction::South, 53),
            Err(GeohashError::InvalidBitDepth(53))
        );
        assert_eq!(neighbors(hash, 0), Err(GeohashError::InvalidBitDepth(0)));
        assert_eq!(neighbors(hash, 53), Err(GeohashError::InvalidBitDepth(53)));
    }

    #[test]
    fn test_neighbor_base32() {
        assert_eq!(
            neighbor_base32("ww8p1r4t8", Direction::East).unwrap(),
            "ww8p1r4t9"
        );
    }

    #[test]
    fn test_neighbors_int() {
        let (hash, bit_depth) = given_hash("110001111110101110001100001111");

        let all = neighbors(hash, bit_depth).unwrap();
        let hashes: Vec<u64> = all.iter().map(|(_, hash)| *hash).collect();

        assert_eq!(
            hashes,
            vec![
                838525722, 838525744, 838525733, 838525732, 838525710, 838525708, 838525709,
                838525720
            ]
        );
        assert_eq!(*all.get(Direction::South), 838525710);
    }

    #[test]
    fn test_neighbors_base32() {
        let all = neighbors_base32("szpssgq").unwrap();
        let hashes: Vec<&str> = all.iter().map(|(_, hash)| hash.as_str()).collect();

        assert_eq!(
            hashes,
            vec![
                "szpssgw", "szpssgx", "szpssgr", "szpssgp", "szpssgn", "szpssgj", "szpssgm",
                "szpssgt"
            ]
        );
    }

    #[test]
    fn test_neighbors_serialize_in_compass_order() {
        let all = neighbors_base32("szpssgq").unwrap();
        let json = serde_json::to_string(&all).unwrap();

        assert_eq!(
            json,
            r#"{"north":"szpssgw","northEast":"szpssgx","east":"szpssgr","southEast":"szpssgp","south":"szpssgn","southWest":"szpssgj","west":"szpssgm","northWest":"szpssgt"}"#
        );
    }

    #[test]
    fn test_neighbor_is_adjacent() {
        let (hash, bit_depth) = given_hash("110001111110101110001100001111");
        let cell = decode_bbox(hash, bit_depth).unwrap();

        let north = decode_bbox(neighbor(hash, Direction::North, bit_depth).unwrap(), bit_depth)
            .unwrap();
        assert_eq!(north.min_lat, cell.max_lat);
        assert_eq!(north.min_lng, cell.min_lng);

        let east = decode_bbox(neighbor(hash, Direction::East, bit_depth).unwrap(), bit_depth)
            .unwrap();
        assert_eq!(east.min_lng, cell.max_lng);
        assert_eq!(east.min_lat, cell.min_lat);
    }

    #[test]
    fn test_neighbor_wraps_across_antimeridian() {
        let west_edge = encode(0.0, -179.9, 10).unwrap();
        let east_edge = encode(0.0, 179.9, 10).unwrap();

        assert_eq!(neighbor(west_edge, Direction::West, 10).unwrap(), east_edge);
        assert_eq!(neighbor(east_edge, Direction::East, 10).unwrap(), west_edge);
    }

    #[test]
    fn test_neighbor_without_wrap_stops_at_antimeridian() {
        let west_edge = encode(0.0, -179.9, 10).unwrap();

        assert_eq!(
            neighbor_with_wrap(west_edge, Direction::West, 10, NeighborWrap::None),
            Err(GeohashError::NoNeighbor {
                direction: Direction::West,
                hash: west_edge,
                bit_depth: 10,
            })
        );
        assert!(neighbor_with_wrap(west_edge, Direction::East, 10, NeighborWrap::None).is_ok());
    }

    #[test]
    fn test_neighbor_across_pole_is_an_error() {
        let top = encode(89.9, 10.0, 20).unwrap();

        assert!(matches!(
            neighbor(top, Direction::North, 20),
            Err(GeohashError::NoNeighbor { .. })
        ));
        assert!(matches!(
            neighbor(top, Direction::NorthWest, 20),
            Err(GeohashError::NoNeighbor { .. })
        ));
        assert!(neighbor(top, Direction::South, 20).is_ok());
        assert!(neighbors(top, 20).is_err());
    }

    #[test]
    fn test_neighbors_at_single_bit() {
        // Two cells, each the other's east and west neighbor, no latitude room
        assert_eq!(neighbor(0, Direction::East, 1).unwrap(), 1);
        assert_eq!(neighbor(0, Direction::West, 1).unwrap(), 1);
        assert!(neighbor(0, Direction::North, 1).is_err());
    }
}

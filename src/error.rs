//! Error types for geohash operations.

use crate::neighbors::Direction;
use thiserror::Error;

/// Errors returned by every fallible operation in this crate.
///
/// All variants except [`GeohashError::SerializationErrorWithContext`] are
/// domain errors: the input was rejected before any computation happened.
/// A rectangle that no single cell can cover is not an error, see
/// [`crate::encode_bbox`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeohashError {
    #[error("Latitude out of range [-90.0, 90.0]: {0}")]
    InvalidLatitude(f64),

    #[error("Longitude out of range [-180.0, 180.0]: {0}")]
    InvalidLongitude(f64),

    #[error("Bit depth must be between 1 and 52, got: {0}")]
    InvalidBitDepth(u8),

    #[error("Number of chars must be between 1 and 9, got: {0}")]
    InvalidLength(usize),

    #[error("Unknown digit: {0:?}")]
    InvalidCharacter(char),

    #[error("Invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    /// The requested step leaves the valid coordinate domain.
    #[error("Cell {hash} at bit depth {bit_depth} has no {direction} neighbor")]
    NoNeighbor {
        direction: Direction,
        hash: u64,
        bit_depth: u8,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationErrorWithContext(String),
}

pub type Result<T> = std::result::Result<T, GeohashError>;

impl From<serde_json::Error> for GeohashError {
    fn from(e: serde_json::Error) -> Self {
        GeohashError::SerializationErrorWithContext(e.to_string())
    }
}

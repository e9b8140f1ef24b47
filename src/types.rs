//! Decoded cell values and crate configuration.
//!
//! All types here are plain serializable values. None of them hold state
//! across calls.
use crate::bbox::Bbox;
use crate::compute::validation::{validate_base32_length, validate_bit_depth};
use crate::error::{GeohashError, Result};
use crate::neighbors::NeighborWrap;
use crate::{BASE32_HASH_MAX_LENGTH, MAX_BIT_DEPTH};
use geo::Point;
use serde::{Deserialize, Serialize};

/// Half-size of a cell along each axis.
///
/// This is the maximum distance, in degrees, between the decoded center and
/// any point inside the cell on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellError {
    pub lat: f64,
    pub lng: f64,
}

/// The decoded center of a cell and its [`CellError`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
    pub error: CellError,
}

impl Coordinates {
    /// The cell extent, center widened by the error on each axis.
    pub fn bbox(&self) -> Bbox {
        Bbox {
            min_lat: self.lat - self.error.lat,
            min_lng: self.lng - self.error.lng,
            max_lat: self.lat + self.error.lat,
            max_lng: self.lng + self.error.lng,
        }
    }

    /// The center as a `geo::Point` (x = longitude, y = latitude).
    pub fn to_point(&self) -> Point {
        Point::new(self.lng, self.lat)
    }
}

impl From<Coordinates> for Point {
    fn from(coords: Coordinates) -> Self {
        coords.to_point()
    }
}

/// Default precision and seam behavior used by [`crate::Geohasher`].
///
/// # Example
///
/// ```rust
/// use spatio_geohash::{Config, NeighborWrap};
///
/// let config = Config::default();
/// assert_eq!(config.default_bit_depth, 52);
/// assert_eq!(config.default_length, 9);
///
/// // Load from JSON, missing fields take their defaults
/// let json = r#"{
///     "default_bit_depth": 32,
///     "neighbor_wrap": "none"
/// }"#;
/// let config = Config::from_json(json)?;
/// assert_eq!(config.default_bit_depth, 32);
/// assert_eq!(config.default_length, 9);
/// assert_eq!(config.neighbor_wrap, NeighborWrap::None);
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Bit depth for integer operations (1-52, default: 52)
    #[serde(default = "Config::default_bit_depth")]
    pub default_bit_depth: u8,

    /// Symbol count for base-32 operations (1-9, default: 9)
    #[serde(default = "Config::default_length")]
    pub default_length: usize,

    /// What a neighbor step across the antimeridian does
    #[serde(default)]
    pub neighbor_wrap: NeighborWrap,
}

impl Config {
    const fn default_bit_depth() -> u8 {
        MAX_BIT_DEPTH
    }

    const fn default_length() -> usize {
        BASE32_HASH_MAX_LENGTH
    }

    pub fn with_bit_depth(mut self, bit_depth: u8) -> Self {
        self.default_bit_depth = bit_depth;
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.default_length = length;
        self
    }

    pub fn with_neighbor_wrap(mut self, wrap: NeighborWrap) -> Self {
        self.neighbor_wrap = wrap;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        validate_bit_depth(self.default_bit_depth)?;
        validate_base32_length(self.default_length)?;
        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json).map_err(|e| {
            GeohashError::SerializationErrorWithContext(format!(
                "Failed to parse config JSON: {}",
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str).map_err(|e| {
            GeohashError::SerializationErrorWithContext(format!(
                "Failed to parse config TOML: {}",
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GeohashError::SerializationErrorWithContext(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_bit_depth: Self::default_bit_depth(),
            default_length: Self::default_length(),
            neighbor_wrap: NeighborWrap::default(),
        }
    }
}

//! Validation for geographic coordinates and hash parameters.

use crate::error::{GeohashError, Result};
use crate::{
    BASE32_HASH_MAX_LENGTH, BASE32_HASH_MIN_LENGTH, LATITUDE_MAX_VALUE, LONGITUDE_MAX_VALUE,
    MAX_BIT_DEPTH, MIN_BIT_DEPTH,
};

/// Validates a latitude is finite and within [-90.0, 90.0].
///
/// # Examples
///
/// ```
/// use spatio_geohash::compute::validation::validate_latitude;
///
/// assert!(validate_latitude(90.0).is_ok());
/// assert!(validate_latitude(90.1).is_err());
/// assert!(validate_latitude(f64::NAN).is_err());
/// ```
pub fn validate_latitude(lat: f64) -> Result<()> {
    if !lat.is_finite() {
        log::warn!("Rejecting non-finite latitude: {}", lat);
        return Err(GeohashError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !(-LATITUDE_MAX_VALUE..=LATITUDE_MAX_VALUE).contains(&lat) {
        return Err(GeohashError::InvalidLatitude(lat));
    }

    Ok(())
}

/// Validates a longitude is finite and within [-180.0, 180.0].
pub fn validate_longitude(lng: f64) -> Result<()> {
    if !lng.is_finite() {
        log::warn!("Rejecting non-finite longitude: {}", lng);
        return Err(GeohashError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lng
        )));
    }

    if !(-LONGITUDE_MAX_VALUE..=LONGITUDE_MAX_VALUE).contains(&lng) {
        return Err(GeohashError::InvalidLongitude(lng));
    }

    Ok(())
}

/// Validates a (latitude, longitude) pair.
///
/// # Examples
///
/// ```
/// use spatio_geohash::compute::validation::validate_lat_lng;
///
/// // Manhattan
/// assert!(validate_lat_lng(40.7128, -74.0060).is_ok());
///
/// // Arguments swapped
/// assert!(validate_lat_lng(-74.0060, 40.7128).is_ok());
/// assert!(validate_lat_lng(140.0, 40.7128).is_err());
/// ```
pub fn validate_lat_lng(lat: f64, lng: f64) -> Result<()> {
    validate_latitude(lat)?;
    validate_longitude(lng)
}

/// Validates a bit depth is within [1, 52].
pub fn validate_bit_depth(bit_depth: u8) -> Result<()> {
    if !(MIN_BIT_DEPTH..=MAX_BIT_DEPTH).contains(&bit_depth) {
        return Err(GeohashError::InvalidBitDepth(bit_depth));
    }
    Ok(())
}

/// Validates a base-32 hash length is within [1, 9].
pub fn validate_base32_length(length: usize) -> Result<()> {
    if !(BASE32_HASH_MIN_LENGTH..=BASE32_HASH_MAX_LENGTH).contains(&length) {
        return Err(GeohashError::InvalidLength(length));
    }
    Ok(())
}

/// Validates both corners of a rectangle and that it is not inverted.
///
/// # Examples
///
/// ```
/// use spatio_geohash::compute::validation::validate_bbox;
///
/// assert!(validate_bbox(40.0, -75.0, 41.0, -73.0).is_ok());
///
/// // Southwest corner north of the northeast corner
/// assert!(validate_bbox(41.0, -75.0, 40.0, -73.0).is_err());
/// ```
pub fn validate_bbox(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Result<()> {
    validate_lat_lng(min_lat, min_lng)?;
    validate_lat_lng(max_lat, max_lng)?;

    if min_lat > max_lat {
        return Err(GeohashError::InvalidBoundingBox(format!(
            "min latitude {} is greater than max latitude {}",
            min_lat, max_lat
        )));
    }

    if min_lng > max_lng {
        return Err(GeohashError::InvalidBoundingBox(format!(
            "min longitude {} is greater than max longitude {}",
            min_lng, max_lng
        )));
    }

    Ok(())
}

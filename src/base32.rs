//! Conversions between integer hashes and the Geohash base-32 alphabet.
//!
//! The alphabet is `0-9` followed by the lowercase letters without `a`, `i`,
//! `l` and `o`. Each symbol carries 5 bits, most significant symbol first.

use crate::BASE32_BITS_PER_CHAR;
use crate::compute::validation::validate_base32_length;
use crate::error::{GeohashError, Result};

/// The 32 symbols in value order.
pub const BASE32_DIGITS: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

const INVALID_DIGIT: u8 = 0xFF;

const DIGIT_VALUES: [u8; 128] = {
    let mut table = [INVALID_DIGIT; 128];
    let mut i = 0;
    while i < BASE32_DIGITS.len() {
        let digit = BASE32_DIGITS[i];
        table[digit as usize] = i as u8;
        table[digit.to_ascii_uppercase() as usize] = i as u8;
        i += 1;
    }
    table
};

const SYMBOL_MASK: u64 = (1 << BASE32_BITS_PER_CHAR) - 1;

/// Renders the low `length * 5` bits of `hash` as a base-32 string.
///
/// Bits above `length * 5` are ignored.
///
/// # Examples
///
/// ```
/// use spatio_geohash::int_to_base32;
///
/// assert_eq!(int_to_base32(0, 3)?, "000");
/// assert_eq!(int_to_base32(31 * 32 + 1, 2)?, "z1");
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn int_to_base32(hash: u64, length: usize) -> Result<String> {
    validate_base32_length(length)?;
    Ok(int_to_base32_unchecked(hash, length))
}

pub(crate) fn int_to_base32_unchecked(hash: u64, length: usize) -> String {
    let mut symbols = vec![0u8; length];
    let mut prefix = hash;

    for slot in symbols.iter_mut().rev() {
        *slot = BASE32_DIGITS[(prefix & SYMBOL_MASK) as usize];
        prefix >>= BASE32_BITS_PER_CHAR;
    }

    symbols.into_iter().map(char::from).collect()
}

/// Parses a base-32 string into its integer value.
///
/// Upper-case symbols are accepted. The string must hold 1 to 9 symbols.
pub fn base32_to_int(hash: &str) -> Result<u64> {
    parse_base32(hash).map(|(value, _)| value)
}

/// Parses a base-32 string into its integer value and bit depth.
pub(crate) fn parse_base32(hash: &str) -> Result<(u64, u8)> {
    let length = hash.chars().count();
    validate_base32_length(length)?;

    let value = hash.chars().try_fold(0u64, |acc, symbol| {
        Ok::<_, GeohashError>((acc << BASE32_BITS_PER_CHAR) | u64::from(digit_value(symbol)?))
    })?;

    // length <= 9, so the depth fits in a u8
    Ok((value, length as u8 * BASE32_BITS_PER_CHAR))
}

fn digit_value(symbol: char) -> Result<u8> {
    if symbol.is_ascii() {
        let value = DIGIT_VALUES[symbol as usize];
        if value != INVALID_DIGIT {
            return Ok(value);
        }
    }
    Err(GeohashError::InvalidCharacter(symbol))
}

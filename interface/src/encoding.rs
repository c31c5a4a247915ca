//! Canonical wire encoding primitives
//!
//! Every multi-byte field of a recipe instruction is built from these
//! helpers. Integers are little-endian, strings carry a `u32` byte length
//! prefix and nothing is padded or aligned, except the salt which always
//! occupies exactly [`SALT_LEN`] bytes.

use {crate::error::RecipeError, std::fmt::Display};

/// Width of the salt field in bytes
pub const SALT_LEN: usize = 32;

/// Encodes `value` as a little-endian `u32`.
pub fn encode_u32<T>(value: T) -> Result<[u8; 4], RecipeError>
where
    T: TryInto<u32> + Copy + Display,
{
    value
        .try_into()
        .map(u32::to_le_bytes)
        .map_err(|_| RecipeError::Encoding {
            width: u32::BITS,
            value: value.to_string(),
        })
}

/// Encodes `value` as a little-endian `u64`. Accepts wide integers such as
/// `u128` and `i128`, rejecting anything negative or above `u64::MAX`.
pub fn encode_u64<T>(value: T) -> Result<[u8; 8], RecipeError>
where
    T: TryInto<u64> + Copy + Display,
{
    value
        .try_into()
        .map(u64::to_le_bytes)
        .map_err(|_| RecipeError::Encoding {
            width: u64::BITS,
            value: value.to_string(),
        })
}

/// Encodes a string as its UTF-8 bytes preceded by the byte length as a
/// little-endian `u32`. The string is never truncated.
pub fn encode_length_prefixed_string(value: &str) -> Result<Vec<u8>, RecipeError> {
    let bytes = value.as_bytes();
    let mut buf = Vec::with_capacity(bytes.len().saturating_add(4));
    buf.extend_from_slice(&encode_u32(bytes.len())?);
    buf.extend_from_slice(bytes);
    Ok(buf)
}

/// Fixed-width salt field.
///
/// The UTF-8 bytes of the salt string are copied into a zeroed
/// [`SALT_LEN`]-byte array. Longer salts are cut at byte 32, which may split
/// a multi-byte character.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Salt([u8; SALT_LEN]);

impl Salt {
    /// Encodes a salt string into its fixed-width field
    pub fn new(salt: &str) -> Self {
        let src = salt.as_bytes();
        let len = src.len().min(SALT_LEN);
        let mut field = [0u8; SALT_LEN];
        field[..len].copy_from_slice(&src[..len]);
        Self(field)
    }

    /// Wraps an already encoded salt field
    pub const fn from_bytes(field: [u8; SALT_LEN]) -> Self {
        Self(field)
    }

    /// Raw salt field
    pub const fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }
}

impl From<&str> for Salt {
    fn from(salt: &str) -> Self {
        Self::new(salt)
    }
}

impl AsRef<[u8]> for Salt {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Encodes a salt string into the fixed 32-byte salt field.
pub fn encode_salt(salt: &str) -> [u8; SALT_LEN] {
    *Salt::new(salt).as_bytes()
}

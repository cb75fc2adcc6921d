//! Short-form UUID: a wrapper whose textual form is the fixed-width
//! 22-character Base58 encoding.
//!
//! [`ShortUuid`] guarantees a valid UUID once constructed. It accepts two
//! input syntaxes:
//! - the 22-character Base58 form ([`ShortUuid::parse`], [`FromStr`]);
//! - a 32-hex-digit UUID string, hyphenated or not, case-insensitive
//!   ([`ShortUuid::from_uuid_str`]).
//!
//! Output is either the Base58 form ([`Display`](fmt::Display),
//! [`ShortUuid::encode`]) or the canonical hyphenated lowercase hex form
//! ([`ShortUuid::to_uuid_string`]).

use std::{fmt, str::FromStr};

use uuid::Uuid;

use crate::encode::encode_raw;
use crate::{decode, Error, Result, RAW_LEN};

/// A UUID rendered as 22 Base58 characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShortUuid(Uuid);

impl ShortUuid {
    /// Generates a new random short UUID (RFC 4122 version 4).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Wraps 16 raw big-endian bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; RAW_LEN]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Parses the 22-character Base58 form.
    ///
    /// # Errors
    /// [`Error::InvalidEncoding`] with the underlying [`DecodeError`]
    /// (wrong length, character outside the alphabet, or overflow).
    ///
    /// [`DecodeError`]: crate::DecodeError
    pub fn parse(input: &str) -> Result<Self> {
        let raw = decode(input).map_err(|source| Error::InvalidEncoding {
            input: input.to_owned(),
            source,
        })?;
        Ok(Self(Uuid::from_bytes(raw)))
    }

    /// Parses a UUID hex string, hyphenated or not, case-insensitive.
    ///
    /// Exactly 32 hex digits must remain after removing hyphens.
    ///
    /// # Errors
    /// [`Error::InvalidUuid`] carrying the rejected input.
    pub fn from_uuid_str(input: &str) -> Result<Self> {
        let raw = parse_hex_uuid(input).ok_or_else(|| Error::InvalidUuid(input.to_owned()))?;
        Ok(Self(Uuid::from_bytes(raw)))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the raw big-endian bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; RAW_LEN] {
        self.0.as_bytes()
    }

    /// Renders the 22-character Base58 form.
    #[must_use]
    pub fn encode(&self) -> String {
        encode_raw(*self.0.as_bytes())
    }

    /// Renders the canonical hyphenated lowercase hex form.
    #[must_use]
    pub fn to_uuid_string(&self) -> String {
        self.0.hyphenated().to_string()
    }
}

impl Default for ShortUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShortUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for ShortUuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Uuid> for ShortUuid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ShortUuid> for Uuid {
    fn from(short: ShortUuid) -> Self {
        short.0
    }
}

/// Strips hyphens and packs exactly 32 case-insensitive hex digits.
#[allow(clippy::cast_possible_truncation)]
fn parse_hex_uuid(input: &str) -> Option<[u8; RAW_LEN]> {
    let mut raw = [0u8; RAW_LEN];
    let mut nibbles = 0usize;
    for ch in input.chars() {
        if ch == '-' {
            continue;
        }
        let digit = ch.to_digit(16)?;
        if nibbles == 2 * RAW_LEN {
            return None;
        }
        raw[nibbles / 2] = (raw[nibbles / 2] << 4) | digit as u8;
        nibbles += 1;
    }
    (nibbles == 2 * RAW_LEN).then_some(raw)
}

#[cfg(feature = "serde")]
impl serde::Serialize for ShortUuid {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ShortUuid {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

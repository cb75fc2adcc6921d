//! Fixed-width Base58 codec for UUIDs.
//!
//! A 128-bit UUID always encodes to exactly 22 characters of the Bitcoin
//! Base58 alphabet (no `0`, `O`, `I`, `l`), left-padded with `1`; decoding
//! accepts exactly 22 characters and nothing else. [`ShortUuid`] wraps the
//! codec around a standard [`uuid::Uuid`].

/// Bitcoin Base58 alphabet. Symbol order is the wire contract.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Raw payload width in bytes.
pub const RAW_LEN: usize = 16;

/// Encoded width in characters. 58^21 < 2^128 <= 58^22, so 22 digits always
/// suffice and are always emitted.
pub const ENCODED_LEN: usize = 22;

mod decode;
mod encode;
mod short;

pub use decode::{decode, DecodeError};
pub use encode::{encode, EncodeError};
pub use short::ShortUuid;

/// Error type for [`ShortUuid`] operations, carrying the offending input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input is not a 32-hex-digit UUID string (hyphens allowed).
    #[error("invalid UUID string: '{0}'")]
    InvalidUuid(String),
    /// Input is not a valid 22-character Base58 string.
    #[error("invalid short UUID '{input}'")]
    InvalidEncoding {
        input: String,
        #[source]
        source: DecodeError,
    },
}

/// Result type for [`ShortUuid`] operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Fixed-width Base58 encoding for 16-byte payloads.
//! The value is one big-endian u128; repeated divmod by 58 emits digits
//! most-significant-first into a buffer pre-filled with the zero symbol.

use crate::{ALPHABET, ENCODED_LEN, RAW_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Input is not exactly 16 bytes.
    #[error("expected 16 input bytes, got {0}")]
    InvalidLength(usize),
}

/// Encodes exactly 16 bytes into a 22-character Base58 string.
///
/// Output is left-padded with `1` (the zero symbol) to the full width, so
/// the all-zero payload encodes as twenty-two `1`s. Padding is never
/// stripped on decode; the width is part of the wire contract.
///
/// # Errors
/// - `InvalidLength(n)`: input is `n` bytes instead of 16.
#[inline]
pub fn encode(input: &[u8]) -> Result<String, EncodeError> {
    let raw: [u8; RAW_LEN] = input
        .try_into()
        .map_err(|_| EncodeError::InvalidLength(input.len()))?;
    Ok(encode_raw(raw))
}

/// Infallible path for callers that already hold 16 bytes.
#[must_use]
pub(crate) fn encode_raw(raw: [u8; RAW_LEN]) -> String {
    let mut value = u128::from_be_bytes(raw);
    let mut out = [ALPHABET[0]; ENCODED_LEN];
    let mut pos = ENCODED_LEN;
    // Zero emits no digits and keeps all 22 padding symbols.
    while value > 0 {
        pos -= 1;
        #[allow(clippy::cast_possible_truncation)]
        let digit = (value % 58) as usize;
        out[pos] = ALPHABET[digit];
        value /= 58;
    }
    out.iter().map(|&b| b as char).collect()
}

//! Fixed-width Base58 decoding for 16-byte payloads.
//! Precomp table for char->val; chars are validated upfront, then a Horner
//! pass (acc = acc * 58 + val) accumulates with a checked bound at every
//! step. Check order is fixed: format, length, charset, overflow.

use crate::{ALPHABET, ENCODED_LEN, RAW_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Empty input.
    #[error("empty input")]
    InvalidFormat,
    /// Input is not exactly 22 characters.
    #[error("expected 22 characters, got {0}")]
    InvalidLength(usize),
    /// Non-alphabet character at position.
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },
    /// Decoded value exceeds 2^128 - 1.
    #[error("value exceeds 128 bits")]
    Overflow,
}

/// Decodes a 22-character Base58 string into 16 big-endian bytes.
///
/// Exactly 22 characters are required; leading `1` padding is significant
/// and never trimmed, so twenty-two `1`s decode to the all-zero payload.
///
/// # Errors
/// - `InvalidFormat`: empty input.
/// - `InvalidLength(n)`: input is `n` characters instead of 22.
/// - `InvalidChar { ch, pos }`: `ch` at `pos` is outside the alphabet
///   (covers `0`, `O`, `I`, `l` and any non-ASCII character).
/// - `Overflow`: the accumulated value would exceed 2^128 - 1.
#[inline]
pub fn decode(input: &str) -> Result<[u8; RAW_LEN], DecodeError> {
    if input.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }
    let len = input.chars().count();
    if len != ENCODED_LEN {
        return Err(DecodeError::InvalidLength(len));
    }
    // Validate chars upfront; arithmetic only runs on a clean digit buffer.
    let mut digits = [0u8; ENCODED_LEN];
    for (pos, ch) in input.chars().enumerate() {
        let val = if ch.is_ascii() {
            DIGIT_TO_VAL[ch as usize]
        } else {
            SENTINEL
        };
        if val == SENTINEL {
            return Err(DecodeError::InvalidChar { ch, pos });
        }
        digits[pos] = val;
    }
    // u128::MAX is exactly 2^128 - 1, so checked ops are the bound check.
    let mut value: u128 = 0;
    for &val in &digits {
        value = value
            .checked_mul(58)
            .and_then(|acc| acc.checked_add(u128::from(val)))
            .ok_or(DecodeError::Overflow)?;
    }
    Ok(value.to_be_bytes())
}

const SENTINEL: u8 = 255;

const DIGIT_TO_VAL: [u8; 256] = {
    let mut table = [SENTINEL; 256];
    let mut i = 0usize;
    while i < 58 {
        #[allow(clippy::cast_possible_truncation)]
        let val = i as u8;
        table[ALPHABET[i] as usize] = val;
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn decode_all_padding_is_zero() {
        assert_eq!(decode("1111111111111111111111"), Ok([0u8; 16]));
    }

    #[test]
    fn decode_one() {
        let mut expected = [0u8; 16];
        expected[15] = 1;
        assert_eq!(decode("1111111111111111111112"), Ok(expected));
    }

    #[test]
    fn decode_max() {
        assert_eq!(decode("YcVfxkQb6JRzqk5kF2tNLv"), Ok([0xFFu8; 16]));
    }

    #[test]
    fn decode_known_uuid() {
        assert_eq!(
            decode("BWBeN28Vb7cMEx7Ym8AUzs"),
            Ok(hex!("550e8400e29b41d4a716446655440000"))
        );
    }

    #[test]
    fn decode_empty_is_format_error() {
        assert_eq!(decode(""), Err(DecodeError::InvalidFormat));
    }

    #[test]
    fn decode_rejects_wrong_length() {
        for input in ["1".to_string(), "1".repeat(21), "1".repeat(23), "1".repeat(100)] {
            assert_eq!(
                decode(&input),
                Err(DecodeError::InvalidLength(input.len())),
                "input: {input}"
            );
        }
    }

    #[test]
    fn decode_rejects_excluded_chars() {
        for excluded in ['0', 'O', 'I', 'l'] {
            let mut input = "1".repeat(22);
            input.replace_range(5..6, &excluded.to_string());
            assert_eq!(
                decode(&input),
                Err(DecodeError::InvalidChar {
                    ch: excluded,
                    pos: 5
                })
            );
        }
    }

    #[test]
    fn decode_rejects_non_ascii() {
        // 22 chars, one of them multibyte: a charset failure, not a length one.
        let input = format!("{}\u{e9}", "1".repeat(21));
        assert_eq!(
            decode(&input),
            Err(DecodeError::InvalidChar {
                ch: '\u{e9}',
                pos: 21
            })
        );
    }

    #[test]
    fn decode_rejects_whitespace_and_punctuation() {
        let input = format!("{} ", "1".repeat(21));
        assert!(matches!(
            decode(&input),
            Err(DecodeError::InvalidChar { ch: ' ', pos: 21 })
        ));
        let input = format!("{}!", "1".repeat(21));
        assert!(matches!(
            decode(&input),
            Err(DecodeError::InvalidChar { ch: '!', pos: 21 })
        ));
    }

    #[test]
    fn decode_overflow() {
        assert_eq!(decode(&"z".repeat(22)), Err(DecodeError::Overflow));
        // One past the maximum value.
        assert_eq!(decode("YcVfxkQb6JRzqk5kF2tNLw"), Err(DecodeError::Overflow));
    }

    #[test]
    fn decode_charset_wins_over_overflow() {
        // Invalid char in an otherwise overflowing string reports the char.
        let mut input = "z".repeat(22);
        input.replace_range(3..4, "0");
        assert!(matches!(
            decode(&input),
            Err(DecodeError::InvalidChar { ch: '0', pos: 3 })
        ));
    }

    #[test]
    fn roundtrip() {
        let samples: [[u8; 16]; 5] = [
            [0u8; 16],
            [0xFFu8; 16],
            hex!("550e8400e29b41d4a716446655440000"),
            hex!("f81d4fae7dec11d0a76500a0c91e6bf6"),
            hex!("00000000000000000000000000000001"),
        ];
        for raw in samples {
            let encoded = crate::encode(&raw).unwrap();
            assert_eq!(decode(&encoded), Ok(raw));
        }
    }
}

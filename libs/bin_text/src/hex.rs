//! Encodes bytes as hexadecimal text.
//!
//! Every byte is encoded as two characters: the high nibble followed by the
//! low nibble. Encoding always emits the uppercase digits `0-9A-F`, so
//! `[0x00, 0xFF, 0x1A]` becomes `00FF1A`.
//!
//! Decoding applies this in reverse and accepts both upper- and lowercase
//! digits. Any other character is rejected with
//! [`Error::InvalidCharacter`].
//!
//! Input with an odd amount of characters is rejected with
//! [`Error::InvalidLength`] instead of silently dropping the last character.
//! Decoding is all-or-nothing: on error, no bytes are returned or written.

use std::{fmt, io};

use smallvec::SmallVec;

use super::Error;
use crate::STACK_BYTES;
use crate::private::{ascii_str, ascii_string};

/// Amount of characters a single byte is encoded as.
const PACK: usize = 2;

/// The digits, indexed by their nibble value.
const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Marker in [`NIBBLES`] for bytes that aren't hex digits.
const INVALID: u8 = 0xFF;

/// Maps every byte to the nibble value of the digit it represents, or to
/// [`INVALID`]. Both cases are accepted.
static NIBBLES: [u8; 256] = nibble_table();

#[expect(clippy::cast_possible_truncation, reason = "index is at most 15")]
const fn nibble_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut index = 0;
    while index < DIGITS.len() {
        let digit = DIGITS[index];
        table[digit as usize] = index as u8;
        table[digit.to_ascii_lowercase() as usize] = index as u8;
        index += 1;
    }

    table
}

/// The amount of characters a specified count of bytes encodes to.
pub const fn encoded_len(byte_count: usize) -> usize {
    byte_count * PACK
}

/// The byte length a specified count of characters decodes to.
///
/// This can be used to reserve space in a buffer.
pub const fn decoded_len(char_count: usize) -> usize {
    char_count / PACK
}

/// Encodes bytes as uppercase hex, returning a [`String`] with the result.
///
/// Use [`from_str`] to reverse the operation.
///
/// # Examples
///
/// ```
/// assert_eq!(bin_text::hex::to_string(&[0x00, 0xFF, 0x1A]), "00FF1A");
/// assert_eq!(bin_text::hex::to_string(&[]), "");
/// ```
#[must_use]
pub fn to_string(bytes: &[u8]) -> String {
    let mut result = vec![0u8; encoded_len(bytes.len())];
    encode_into(&mut result, bytes);

    // SAFETY: `encode_into` only writes `DIGITS`, which are ascii
    unsafe { ascii_string(result) }
}

/// Encodes bytes as uppercase hex, writing them to a buffer.
///
/// The text is passed to `writer` in a single call. Up to 128 bytes of input
/// are encoded on the stack before that.
///
/// Use [`decode`] to reverse the operation.
///
/// # Errors
///
/// Returns [`Err`] if and only if `writer` returns [`Err`].
pub fn encode<W: fmt::Write>(mut writer: W, bytes: &[u8]) -> fmt::Result {
    let mut buf = <SmallVec<[u8; STACK_BYTES * PACK]>>::from_elem(0, encoded_len(bytes.len()));
    encode_into(&mut buf, bytes);

    // SAFETY: `encode_into` only writes `DIGITS`, which are ascii
    writer.write_str(unsafe { ascii_str(&buf) })
}

/// Decodes a string holding hex data.
///
/// # Errors
///
/// Returns [`Err`] if the input contains non-hex characters or has an odd
/// length.
pub fn from_str(input: &str) -> Result<Vec<u8>, Error> {
    let mut result = vec![0u8; decoded_len(input.len())];
    decode_into(&mut result, input)?;
    Ok(result)
}

/// Decodes a string holding hex data, writing the bytes to a buffer.
///
/// The input is fully validated before anything is written, so `writer` only
/// sees output for valid input.
///
/// # Errors
///
/// Returns [`Err`] if the input contains non-hex characters, has an odd
/// length, or `writer` returns [`Err`].
pub fn decode<W: io::Write>(mut writer: W, input: &str) -> Result<(), Error> {
    let mut buf = <SmallVec<[u8; STACK_BYTES]>>::from_elem(0, decoded_len(input.len()));
    decode_into(&mut buf, input)?;

    writer.write_all(&buf)?;
    Ok(())
}

/// Encodes `bytes` into `out`, which must be exactly [`encoded_len`] long.
fn encode_into(out: &mut [u8], bytes: &[u8]) {
    debug_assert_eq!(out.len(), encoded_len(bytes.len()), "output len must match");

    let (pairs, _) = out.as_chunks_mut::<PACK>();
    for (pair, &byte) in pairs.iter_mut().zip(bytes) {
        *pair = [
            DIGITS[usize::from(byte >> 4)],
            DIGITS[usize::from(byte & 0xF)],
        ];
    }
}

/// Decodes `input` into `out`, which must be exactly [`decoded_len`] long.
///
/// `out` may be partially written on error.
fn decode_into(out: &mut [u8], input: &str) -> Result<(), Error> {
    debug_assert_eq!(out.len(), decoded_len(input.len()), "output len must match");

    let (pairs, rest) = input.as_bytes().as_chunks::<PACK>();
    for (index, (byte, &[high, low])) in out.iter_mut().zip(pairs).enumerate() {
        let offset = index * PACK;
        *byte = (nibble(input, offset, high)? << 4) | nibble(input, offset + 1, low)?;
    }

    if let [last] = *rest {
        // report a bad trailing char over the length, same as any other position
        nibble(input, input.len() - 1, last)?;
        return Err(Error::InvalidLength {
            len: input.len(),
            multiple: PACK,
        });
    }

    Ok(())
}

/// Looks up the nibble value of the digit at `index`.
#[inline]
fn nibble(input: &str, index: usize, digit: u8) -> Result<u8, Error> {
    match NIBBLES[usize::from(digit)] {
        INVALID => Err(invalid_char(input, index)),
        value => Ok(value),
    }
}

#[cold]
fn invalid_char(input: &str, index: usize) -> Error {
    // every byte before `index` was an ascii digit, so `index` is a char boundary
    let char = input
        .get(index..)
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);

    Error::InvalidCharacter { char, index }
}

//! Encodes bytes as Base32 with the RFC 4648 alphabet.
//!
//! The input is processed in groups of 5 bytes. Each group is encoded as 8
//! characters, each holding 5 bits. No `=` padding is ever emitted; instead,
//! the input length must be a multiple of 5.
//!
//! The exact format is as follows:
//!
//! - The 5 bytes of a group are read as one big-endian 40-bit value.
//! - The value is split into eight 5-bit indices, most significant first.
//! - Each index selects a character from `ABCDEFGHIJKLMNOPQRSTUVWXYZ234567`.
//!
//! For the group `a, b, c, d, e` the characters therefore hold: the top 5 bits
//! of `a`; the bottom 3 bits of `a` and top 2 of `b`; the middle 5 bits of
//! `b`; the bottom bit of `b` and top 4 of `c`; the bottom 4 bits of `c` and
//! top bit of `d`; the middle 5 bits of `d`; the bottom 2 bits of `d` and top
//! 3 of `e`; the bottom 5 bits of `e`.
//!
//! There is no decoder.

use std::fmt;

use smallvec::SmallVec;

use super::Error;
use crate::STACK_BYTES;
use crate::private::{ascii_str, ascii_string};

/// Byte count of a group.
const GROUP: usize = 5;

/// Amount of characters a group is encoded as.
const PACK: usize = 8;

/// Bits held by each character.
const BITS: usize = 5;

/// The alphabet, indexed by 5-bit value.
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Output characters that fit into the stack buffer.
const STACK_CHARS: usize = STACK_BYTES / GROUP * PACK;

/// The amount of characters a specified count of bytes encodes to.
///
/// `byte_count` should be a multiple of 5. Any excess is not counted.
pub const fn encoded_len(byte_count: usize) -> usize {
    byte_count / GROUP * PACK
}

/// Encodes bytes as Base32, returning a [`String`] with the result.
///
/// # Errors
///
/// Returns [`Err`] if the length of `bytes` is not a multiple of 5.
///
/// # Examples
///
/// ```
/// assert_eq!(bin_text::base32::to_string(b"Hello")?, "JBSWY3DP");
/// assert!(bin_text::base32::to_string(b"Hi").is_err());
/// # Ok::<(), bin_text::Error>(())
/// ```
pub fn to_string(bytes: &[u8]) -> Result<String, Error> {
    check_len(bytes)?;

    let mut result = vec![0u8; encoded_len(bytes.len())];
    encode_into(&mut result, bytes);

    // SAFETY: `encode_into` only writes `ALPHABET`, which is ascii
    Ok(unsafe { ascii_string(result) })
}

/// Encodes bytes as Base32, writing them to a buffer.
///
/// The text is passed to `writer` in a single call. Up to 125 bytes of input
/// are encoded on the stack before that.
///
/// # Errors
///
/// Returns [`Err`] if the length of `bytes` is not a multiple of 5 or `writer`
/// returns [`Err`]. Nothing is written in the former case.
pub fn encode<W: fmt::Write>(mut writer: W, bytes: &[u8]) -> Result<(), Error> {
    check_len(bytes)?;

    let mut buf = <SmallVec<[u8; STACK_CHARS]>>::from_elem(0, encoded_len(bytes.len()));
    encode_into(&mut buf, bytes);

    // SAFETY: `encode_into` only writes `ALPHABET`, which is ascii
    writer.write_str(unsafe { ascii_str(&buf) })?;
    Ok(())
}

fn check_len(bytes: &[u8]) -> Result<(), Error> {
    if bytes.len().is_multiple_of(GROUP) {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            len: bytes.len(),
            multiple: GROUP,
        })
    }
}

/// Encodes `bytes` into `out`, which must be exactly [`encoded_len`] long.
fn encode_into(out: &mut [u8], bytes: &[u8]) {
    debug_assert_eq!(out.len(), encoded_len(bytes.len()), "output len must match");

    let (groups, _) = bytes.as_chunks::<GROUP>();
    let (packs, _) = out.as_chunks_mut::<PACK>();
    for (pack, &group) in packs.iter_mut().zip(groups) {
        *pack = encode_group(group);
    }
}

/// Converts a group of 5 bytes into 8 characters.
#[expect(clippy::cast_possible_truncation, reason = "masked to 5 bits")]
fn encode_group(group: [u8; GROUP]) -> [u8; PACK] {
    let [a, b, c, d, e] = group;
    let value = u64::from_be_bytes([0, 0, 0, a, b, c, d, e]);

    std::array::from_fn(|index| {
        let shift = (PACK - 1 - index) * BITS;
        ALPHABET[((value >> shift) & 0x1F) as usize]
    })
}

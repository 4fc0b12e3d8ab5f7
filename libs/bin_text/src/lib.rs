//! Encodes binary data as text and, where supported, converts that text back
//! into binary data.
//!
//! Each format lives in its own module and provides `to_string` and, where
//! supported, `from_str` convenience functions returning owned values.
//! Additionally there are `encode` and `decode` functions writing into
//! caller-provided sinks. "Encoding" takes bytes and returns strings whereas
//! "decoding" does the inverse.
//!
//! The most common entry points are also available at the crate root:
//!
//! ```
//! let hex = bin_text::encode_hex(&[0x00, 0xFF, 0x1A]);
//! assert_eq!(hex, "00FF1A");
//!
//! let bytes = bin_text::decode_hex("00ff1a")?;
//! assert_eq!(bytes, [0x00, 0xFF, 0x1A]);
//!
//! let base32 = bin_text::encode_base32(b"Hello")?;
//! assert_eq!(base32, "JBSWY3DP");
//! # Ok::<(), bin_text::Error>(())
//! ```
//!
//! See the documentation of sub-modules for more information.

use std::{fmt, io};

// for benchmarks
#[cfg(test)]
use criterion as _;

pub mod base32;
pub mod hex;
mod private;

pub use base32::to_string as encode_base32;
pub use hex::{from_str as decode_hex, to_string as encode_hex};

/// Input byte count up to which encoding and decoding happen in a stack
/// buffer. Larger inputs allocate a scratch buffer of the exact size.
const STACK_BYTES: usize = 128;

/// Error encoding or decoding [`bin_text`](self) data.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A character outside the format's alphabet was found.
    ///
    /// `index` is the byte offset of `char` in the input.
    #[error("invalid character {char:?} at index {index}")]
    InvalidCharacter { char: char, index: usize },
    /// The input length is not a multiple of what the format requires.
    #[error("input length {len} is not a multiple of {multiple}")]
    InvalidLength { len: usize, multiple: usize },
    /// The written byte buffer returned an error.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The written text buffer returned an error.
    #[error(transparent)]
    Fmt(#[from] fmt::Error),
}

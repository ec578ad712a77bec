/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of Base41.
 *
 * Base41 is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Base41 is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with Base41. If not, see <https://www.gnu.org/licenses/>.
 */

//! A fixed-radix binary-to-text codec over a 41-character printable
//! alphabet.
//!
//! Every 16-bit *cell* of input becomes exactly three base-41 digits, each
//! biased by 41 into the ASCII range `)` (41) through `Q` (81). The alphabet
//! contains no quotes or backslashes, so encoded data can be placed inside
//! JSON strings and similar contexts without escaping.
//!
//! Input may be bytes (taken in little-endian pairs), native [`u16`] words,
//! or native [`u32`] double-words (low half first); see [`Element`].
//!
//! Each operation comes in two forms:
//!
//! * Unchecked ([`encode_into`], [`decode_into`]) trusts the caller with
//!   input alignment, output capacity and, when decoding, the alphabet. A
//!   short output slice panics; other violations produce unspecified output
//!   in release builds and panic in debug builds.
//! * Checked ([`try_encode_into`], [`try_decode_into`]) validates everything
//!   before writing and returns [`Error`] otherwise, leaving the output
//!   untouched.
//!
//! ```
//! let data: [u8; 10] = [26, 168, 48, 178, 7, 162, 52, 188, 199, 36];
//! let mut buf = [0; 15];
//! assert_eq!(base41::try_encode_into(&data, &mut buf), Ok(15));
//! assert_eq!(&buf, b"BABA.DEDA.DECA.");
//!
//! let mut out = [0_u8; 10];
//! assert_eq!(base41::try_decode_into(&buf, &mut out), Ok(10));
//! assert_eq!(out, data);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "alloc")]
extern crate alloc;

use core::fmt::{self, Display, Formatter};

/// The radix of the encoding.
///
/// Three base-41 digits cover 41³ = 68921 values, the smallest radix for
/// which three digits span a 16-bit cell (40³ = 64000 does not).
pub const BASE: u16 = 41;

/// Added to each digit to produce its character.
pub const BIAS: u8 = 41;

/// The smallest character in the alphabet (`)`).
pub const MIN_CHAR: u8 = BIAS;

/// The largest character in the alphabet (`Q`).
pub const MAX_CHAR: u8 = BIAS + BASE as u8 - 1;

/// Number of characters encoding one 16-bit cell.
pub const CHARS_PER_CELL: usize = 3;

/// Written after the last character when NUL termination is requested.
/// Never part of the alphabet.
pub const TERMINATOR: u8 = 0;

macro_rules! reject {
    ($($args:tt)*) => {{
        log::debug!($($args)*);
        return Err(crate::Error::new());
    }};
}

#[macro_use]
mod digit;

pub mod decode;
pub mod element;
pub mod encode;
pub mod engine;
mod validate;

use digit::Digit;

pub use decode::{decode_into, try_decode_into};
#[cfg(feature = "alloc")]
pub use decode::decode_to_vec;
pub use element::{decoded_len, encoded_len, Element};
pub use encode::{encode_into, encode_into_with, EncodeConfig};
pub use encode::{encode_to_chars, encode_to_chars_with};
pub use encode::{try_encode_into, try_encode_into_with};
#[cfg(feature = "alloc")]
pub use encode::{encode_to_string, encode_to_string_with};
pub use engine::{Division, Engine, FixedPoint};
pub use validate::is_valid;

/// The arguments to a checked operation violated one of its preconditions.
///
/// The error deliberately carries no detail: misaligned input, insufficient
/// output capacity and characters outside the alphabet are all reported the
/// same way. The specific cause is logged at `debug` level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Error(());

impl Error {
    pub(crate) fn new() -> Self {
        Self(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "invalid base-41 arguments")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for Error {}

/// Alias of <code>[Result]\<T, [Error]></code>.
pub type CheckedResult<T> = Result<T, Error>;

mod sealed {
    pub trait Sealed {}
}

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

//! Functions and types for encoding base-41 data.

use super::element::{self, Element, MAX_GROUP_CHARS};
use super::engine::{Division, Engine};
use super::{CheckedResult, CHARS_PER_CELL, TERMINATOR};

use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::slice::ChunksExact;

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Used by the `*_with` functions to configure the encoding process.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct EncodeConfig {
    /// Whether to write a NUL ([`TERMINATOR`]) after the last character,
    /// for callers that treat the output as a C-style string. The
    /// terminator needs one extra byte of output. [default: false]
    pub nul_terminate: bool,
}

impl EncodeConfig {
    /// Returns the default configuration.
    pub const fn new() -> Self {
        Self {
            nul_terminate: false,
        }
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_group<E: Engine, T: Element>(group: &[T], out: &mut [u8]) {
    T::split(group)
        .iter()
        .take(T::GROUP_CELLS)
        .zip(out.chunks_exact_mut(CHARS_PER_CELL))
        .for_each(|(&cell, chars)| {
            chars.copy_from_slice(&E::encode_cell(cell));
        });
}

/// Encodes `input` into `output` without checking any preconditions.
///
/// Uses the [`Division`] engine and writes no terminator. Returns the
/// number of characters written.
///
/// `input.len()` should be a multiple of `T`'s group length (i.e., an even
/// number of bytes); see [`Element`].
///
/// # Panics
///
/// Panics if `output` is shorter than [`encoded_len`](element::encoded_len)
/// characters. Debug builds also panic if `input` is misaligned; release
/// builds ignore the trailing partial group.
pub fn encode_into<T: Element>(input: &[T], output: &mut [u8]) -> usize {
    encode_into_with::<Division, T>(input, output, EncodeConfig::new())
}

/// Encodes `input` into `output` with the given engine and config, without
/// checking any preconditions.
///
/// This function is like [`encode_into`], but `output` must also have room
/// for the terminator if [`EncodeConfig::nul_terminate`] is set.
pub fn encode_into_with<E: Engine, T: Element>(
    input: &[T],
    output: &mut [u8],
    config: EncodeConfig,
) -> usize {
    debug_assert!(
        input.len() % T::GROUP_LEN == 0,
        "input length ({}) is not a multiple of {}",
        input.len(),
        T::GROUP_LEN,
    );
    let len = input.len() / T::GROUP_LEN * T::GROUP_CHARS;
    input
        .chunks_exact(T::GROUP_LEN)
        .zip(output[..len].chunks_exact_mut(T::GROUP_CHARS))
        .for_each(|(group, out)| encode_group::<E, T>(group, out));
    if config.nul_terminate {
        output[len] = TERMINATOR;
    }
    len
}

/// Encodes `input` into `output`, checking alignment and capacity first.
///
/// Uses the [`Division`] engine and writes no terminator. Returns the
/// number of characters written. On error, `output` is left untouched.
pub fn try_encode_into<T: Element>(
    input: &[T],
    output: &mut [u8],
) -> CheckedResult<usize> {
    try_encode_into_with::<Division, T>(input, output, EncodeConfig::new())
}

/// Encodes `input` into `output` with the given engine and config, checking
/// alignment and capacity first.
///
/// This function is like [`try_encode_into`], but also requires room for
/// the terminator if [`EncodeConfig::nul_terminate`] is set.
pub fn try_encode_into_with<E: Engine, T: Element>(
    input: &[T],
    output: &mut [u8],
    config: EncodeConfig,
) -> CheckedResult<usize> {
    let len = match element::encoded_len::<T>(input.len()) {
        Some(len) => len,
        None => reject!(
            "input length ({}) is not a multiple of {}",
            input.len(),
            T::GROUP_LEN,
        ),
    };
    let required = len + usize::from(config.nul_terminate);
    if output.len() < required {
        reject!(
            "output holds {} bytes but {} are required",
            output.len(),
            required,
        );
    }
    Ok(encode_into_with::<E, T>(input, output, config))
}

/// Iterator returned by [`encode_to_chars`] and [`encode_to_chars_with`].
pub struct CharEncoder<'a, T, E = Division> {
    groups: ChunksExact<'a, T>,
    buf: [u8; MAX_GROUP_CHARS],
    pos: usize,
    end: usize,
    engine: PhantomData<E>,
}

impl<'a, T: Element, E: Engine> CharEncoder<'a, T, E> {
    pub(crate) fn new(input: &'a [T]) -> Self {
        Self {
            groups: input.chunks_exact(T::GROUP_LEN),
            buf: [0; MAX_GROUP_CHARS],
            pos: 0,
            end: 0,
            engine: PhantomData,
        }
    }
}

impl<'a, T: Element, E: Engine> Iterator for CharEncoder<'a, T, E> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.end {
            let group = self.groups.next()?;
            encode_group::<E, T>(group, &mut self.buf);
            self.pos = 0;
            self.end = T::GROUP_CHARS;
        }
        let c = self.buf[self.pos];
        self.pos += 1;
        Some(char::from(c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.groups.len() * T::GROUP_CHARS + (self.end - self.pos);
        (n, Some(n))
    }
}

impl<'a, T: Element, E: Engine> ExactSizeIterator for CharEncoder<'a, T, E> {}

impl<'a, T: Element, E: Engine> FusedIterator for CharEncoder<'a, T, E> {}

/// Encodes `input` as a sequence of [`char`]s using the [`Division`]
/// engine.
///
/// A trailing partial group (the last byte of an odd-length byte slice) is
/// ignored.
pub fn encode_to_chars<T: Element>(input: &[T]) -> CharEncoder<'_, T> {
    CharEncoder::new(input)
}

/// Encodes `input` as a sequence of [`char`]s using the engine `E`.
///
/// This function is like [`encode_to_chars`], but takes an engine type.
pub fn encode_to_chars_with<E: Engine, T: Element>(
    input: &[T],
) -> CharEncoder<'_, T, E> {
    CharEncoder::new(input)
}

/// Encodes `input` as a [`String`] using the [`Division`] engine.
///
/// Fails only if `input` is misaligned (an odd number of bytes).
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_string<T: Element>(input: &[T]) -> CheckedResult<String> {
    encode_to_string_with::<Division, T>(input)
}

/// Encodes `input` as a [`String`] using the engine `E`.
///
/// This function is like [`encode_to_string`], but takes an engine type.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_string_with<E: Engine, T: Element>(
    input: &[T],
) -> CheckedResult<String> {
    if element::encoded_len::<T>(input.len()).is_none() {
        reject!(
            "input length ({}) is not a multiple of {}",
            input.len(),
            T::GROUP_LEN,
        );
    }
    Ok(encode_to_chars_with::<E, T>(input).collect())
}

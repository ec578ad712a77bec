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

//! Functions for decoding base-41 data.

use super::element::{self, Element, MAX_GROUP_CELLS};
use super::engine;
use super::validate::is_valid;
use super::{CheckedResult, CHARS_PER_CELL};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

fn triple(chars: &[u8]) -> [u8; CHARS_PER_CELL] {
    [chars[0], chars[1], chars[2]]
}

fn decode_group<T: Element>(chars: &[u8], group: &mut [T]) {
    let mut cells = [0; MAX_GROUP_CELLS];
    chars
        .chunks_exact(CHARS_PER_CELL)
        .zip(&mut cells)
        .for_each(|(chars, cell)| *cell = engine::decode_cell(triple(chars)));
    T::join(cells, group);
}

/// Decodes `input` into `output` without checking any preconditions.
/// Returns the number of elements written.
///
/// `input` should satisfy [`is_valid`](crate::is_valid), its length should
/// be a multiple of `T`'s group size in characters (6 for [`u32`], 3
/// otherwise), and every triple should be one produced by an encoder.
/// Release builds decode invalid input to unspecified values.
///
/// # Panics
///
/// Panics if `output` is shorter than
/// [`decoded_len`](element::decoded_len) elements. Debug builds also panic
/// if `input` is misaligned or contains characters outside the alphabet.
pub fn decode_into<T, S>(input: &S, output: &mut [T]) -> usize
where
    T: Element,
    S: AsRef<[u8]> + ?Sized,
{
    let input = input.as_ref();
    debug_assert!(
        input.len() % T::GROUP_CHARS == 0,
        "input length ({}) is not a multiple of {}",
        input.len(),
        T::GROUP_CHARS,
    );
    let len = input.len() / T::GROUP_CHARS * T::GROUP_LEN;
    input
        .chunks_exact(T::GROUP_CHARS)
        .zip(output[..len].chunks_exact_mut(T::GROUP_LEN))
        .for_each(|(chars, group)| decode_group(chars, group));
    len
}

/// Decodes `input` into `output`, checking it first.
///
/// Fails if `input` is not [valid](crate::is_valid), if its length is not a
/// multiple of `T`'s group size in characters, if `output` is too short,
/// or if any triple denotes a value above `u16::MAX`. Returns the number
/// of elements written. On error, `output` is left untouched.
///
/// ```
/// let mut words = [0_u16; 2];
/// assert_eq!(base41::try_decode_into("BABA.D", &mut words), Ok(2));
/// assert_eq!(words, [0xa81a, 0xb230]);
///
/// let mut dwords = [0_u32; 2];
/// assert!(base41::try_decode_into("BABA.D", &mut dwords[..0]).is_err());
/// ```
pub fn try_decode_into<T, S>(
    input: &S,
    output: &mut [T],
) -> CheckedResult<usize>
where
    T: Element,
    S: AsRef<[u8]> + ?Sized,
{
    let input = input.as_ref();
    if !is_valid(input) {
        reject!("input ({} bytes) is not valid base-41", input.len());
    }
    let len = match element::decoded_len::<T>(input.len()) {
        Some(len) => len,
        None => reject!(
            "input length ({}) is not a multiple of {}",
            input.len(),
            T::GROUP_CHARS,
        ),
    };
    if output.len() < len {
        reject!(
            "output holds {} elements but {} are required",
            output.len(),
            len,
        );
    }
    if let Some(i) = input
        .chunks_exact(CHARS_PER_CELL)
        .position(|c| engine::try_decode_cell(triple(c)).is_none())
    {
        reject!(
            "triple at offset {} exceeds {}",
            i * CHARS_PER_CELL,
            u16::MAX,
        );
    }
    Ok(decode_into(input, output))
}

/// Decodes `input` into a [`Vec`].
///
/// This function performs the same checks as [`try_decode_into`].
///
/// ```
/// let bytes: Vec<u8> = base41::decode_to_vec("BABA.DEDA.DECA.").unwrap();
/// assert_eq!(bytes, [26, 168, 48, 178, 7, 162, 52, 188, 199, 36]);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn decode_to_vec<T, S>(input: &S) -> CheckedResult<Vec<T>>
where
    T: Element,
    S: AsRef<[u8]> + ?Sized,
{
    let input = input.as_ref();
    let len = element::decoded_len::<T>(input.len()).unwrap_or(0);
    let mut output = alloc::vec![T::default(); len];
    try_decode_into(input, &mut output)?;
    Ok(output)
}

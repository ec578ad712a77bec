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

//! Element widths and the length arithmetic that goes with them.

use super::sealed::Sealed;
use super::CHARS_PER_CELL;

/// Most cells any element type packs into one group.
pub(crate) const MAX_GROUP_CELLS: usize = 2;

/// Most characters any element type encodes one group as.
pub(crate) const MAX_GROUP_CHARS: usize = MAX_GROUP_CELLS * CHARS_PER_CELL;

/// An integer type that can be encoded as base-41.
///
/// Elements are consumed in *groups*, the smallest run of elements that
/// covers a whole number of 16-bit cells:
///
/// | Type    | Elements per group | Cells per group | Characters |
/// |---------|--------------------|-----------------|------------|
/// | [`u8`]  | 2                  | 1               | 3          |
/// | [`u16`] | 1                  | 1               | 3          |
/// | [`u32`] | 1                  | 2               | 6          |
///
/// Byte pairs are little-endian. A [`u32`] is encoded low half first.
///
/// This trait is sealed.
pub trait Element: Copy + Default + Sealed {
    /// Number of elements in one group.
    const GROUP_LEN: usize;

    /// Number of cells in one group.
    const GROUP_CELLS: usize;

    /// Number of characters one group encodes to.
    const GROUP_CHARS: usize = Self::GROUP_CELLS * CHARS_PER_CELL;

    /// Splits a group of exactly [`Self::GROUP_LEN`] elements into cells.
    /// Only the first [`Self::GROUP_CELLS`] cells are meaningful.
    #[doc(hidden)]
    fn split(group: &[Self]) -> [u16; MAX_GROUP_CELLS];

    /// Reassembles a group of exactly [`Self::GROUP_LEN`] elements from
    /// the first [`Self::GROUP_CELLS`] cells.
    #[doc(hidden)]
    fn join(cells: [u16; MAX_GROUP_CELLS], group: &mut [Self]);
}

impl Sealed for u8 {}

impl Element for u8 {
    const GROUP_LEN: usize = 2;
    const GROUP_CELLS: usize = 1;

    fn split(group: &[Self]) -> [u16; MAX_GROUP_CELLS] {
        [u16::from_le_bytes([group[0], group[1]]), 0]
    }

    fn join(cells: [u16; MAX_GROUP_CELLS], group: &mut [Self]) {
        group.copy_from_slice(&cells[0].to_le_bytes());
    }
}

impl Sealed for u16 {}

impl Element for u16 {
    const GROUP_LEN: usize = 1;
    const GROUP_CELLS: usize = 1;

    fn split(group: &[Self]) -> [u16; MAX_GROUP_CELLS] {
        [group[0], 0]
    }

    fn join(cells: [u16; MAX_GROUP_CELLS], group: &mut [Self]) {
        group[0] = cells[0];
    }
}

impl Sealed for u32 {}

impl Element for u32 {
    const GROUP_LEN: usize = 1;
    const GROUP_CELLS: usize = 2;

    fn split(group: &[Self]) -> [u16; MAX_GROUP_CELLS] {
        let n = group[0];
        [n as u16, (n >> 16) as u16]
    }

    fn join(cells: [u16; MAX_GROUP_CELLS], group: &mut [Self]) {
        let [low, high] = cells;
        group[0] = u32::from(low) | (u32::from(high) << 16);
    }
}

/// Number of characters `n` elements of type `T` encode to, not counting a
/// terminator.
///
/// Returns [`None`] if `n` is not a multiple of `T`'s group length (i.e.,
/// an odd number of bytes) or if the result would overflow.
pub fn encoded_len<T: Element>(n: usize) -> Option<usize> {
    if n % T::GROUP_LEN != 0 {
        return None;
    }
    (n / T::GROUP_LEN).checked_mul(T::GROUP_CHARS)
}

/// Number of elements of type `T` that `len` characters decode to.
///
/// Returns [`None`] if `len` is not a multiple of the number of characters
/// in one of `T`'s groups (3, or 6 for [`u32`]).
pub fn decoded_len<T: Element>(len: usize) -> Option<usize> {
    if len % T::GROUP_CHARS != 0 {
        return None;
    }
    (len / T::GROUP_CHARS).checked_mul(T::GROUP_LEN)
}

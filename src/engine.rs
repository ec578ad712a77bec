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

//! Cell-level arithmetic: one 16-bit cell to and from three characters.

use super::sealed::Sealed;
use super::Digit;
use super::{BASE, BIAS, CHARS_PER_CELL};

/// Multiplier of the fixed-point reciprocal of 41.
///
/// `41 * 0x63e7 = 2^20 - 1`, so `((x + 1) * 0x63e7) >> 20` equals `x / 41`
/// for every `x` in `0..=65536`. Without the `+ 1` the quotient comes out
/// one too small for every non-zero multiple of 41. Neither form is exact
/// outside that range.
pub const FIXED_POINT_MULTIPLIER: u32 = 0x63e7;

/// Shift paired with [`FIXED_POINT_MULTIPLIER`].
pub const FIXED_POINT_SHIFT: u32 = 20;

/// A strategy for splitting a cell into base-41 digits.
///
/// Implemented by [`Division`] and [`FixedPoint`], which produce identical
/// output for every cell. This trait is sealed.
pub trait Engine: Sealed {
    /// Returns `(x / 41, x % 41)`.
    fn div_rem(x: u16) -> (u16, u16);

    /// Encodes one cell as three alphabet characters, least-significant
    /// digit first.
    fn encode_cell(cell: u16) -> [u8; CHARS_PER_CELL] {
        let mut digits = [const_digit!(0); CHARS_PER_CELL];
        let mut x = cell;
        digits.iter_mut().for_each(|d| {
            let (q, r) = Self::div_rem(x);
            // SAFETY: Every `Engine` is sealed and computes an exact
            // remainder, which is always less than 41.
            *d = unsafe { Digit::new_unchecked(r as u8) };
            x = q;
        });
        // 41^3 > u16::MAX, so three digits always suffice.
        debug_assert_eq!(x, 0);
        digits.map(Digit::to_ascii)
    }
}

/// Encodes using hardware division and remainder.
#[derive(Clone, Copy, Debug)]
pub enum Division {}

impl Sealed for Division {}

impl Engine for Division {
    fn div_rem(x: u16) -> (u16, u16) {
        (x / BASE, x % BASE)
    }
}

/// Encodes using a multiply-and-shift reciprocal instead of division, for
/// targets where integer division is slow.
#[derive(Clone, Copy, Debug)]
pub enum FixedPoint {}

impl Sealed for FixedPoint {}

impl Engine for FixedPoint {
    fn div_rem(x: u16) -> (u16, u16) {
        let q = ((u32::from(x) + 1) * FIXED_POINT_MULTIPLIER)
            >> FIXED_POINT_SHIFT;
        let q = q as u16;
        (q, x - q * BASE)
    }
}

/// Encodes one cell with the [`Division`] engine.
pub fn encode_cell(cell: u16) -> [u8; CHARS_PER_CELL] {
    Division::encode_cell(cell)
}

/// Encodes one cell with the [`FixedPoint`] engine.
pub fn encode_cell_fixed(cell: u16) -> [u8; CHARS_PER_CELL] {
    FixedPoint::encode_cell(cell)
}

/// Decodes three characters into a cell without checking them.
///
/// Characters outside the alphabet, or triples above `u16::MAX`, give an
/// unspecified value. Debug builds panic on characters outside the
/// alphabet.
pub fn decode_cell(chars: [u8; CHARS_PER_CELL]) -> u16 {
    debug_assert!(
        chars.iter().all(|&c| Digit::from_ascii(c).is_some()),
        "not base-41 characters: {:?}",
        chars,
    );
    chars.iter().rev().fold(0_u32, |sum, &c| {
        let d = u32::from(c).wrapping_sub(BIAS.into());
        sum.wrapping_mul(BASE.into()).wrapping_add(d)
    }) as u16
}

/// Decodes three characters into a cell.
///
/// Returns [`None`] if a character lies outside the alphabet or if the
/// triple denotes a value above `u16::MAX` (the alphabet can spell values
/// up to 68920, but no cell encodes to them).
pub fn try_decode_cell(chars: [u8; CHARS_PER_CELL]) -> Option<u16> {
    chars
        .iter()
        .rev()
        .try_fold(0_u32, |sum, &c| {
            Some(sum * u32::from(BASE) + u32::from(Digit::from_ascii(c)?))
        })
        .and_then(|n| u16::try_from(n).ok())
}

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

use super::{BASE, BIAS};

/// A base-41 digit, always less than 41.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digit(u8);

macro_rules! const_digit {
    ($n:expr) => {{
        use crate::digit::Digit;
        const DIGIT: Digit = Digit::__const($n);
        DIGIT
    }};
}

const RADIX: u8 = BASE as u8;

impl Digit {
    pub fn new(x: u8) -> Option<Self> {
        (x < RADIX).then(|| Self(x))
    }

    /// # Safety
    ///
    /// `x` must be less than 41.
    pub unsafe fn new_unchecked(x: u8) -> Self {
        debug_assert!(x < RADIX);
        Self(x)
    }

    #[doc(hidden)]
    pub const fn __const(n: u8) -> Self {
        const BOUNDS_CHECK: [u8; 1] = [0];
        Self(n + BOUNDS_CHECK[(n >= RADIX) as usize])
    }

    /// Returns the digit represented by an alphabet character.
    pub fn from_ascii(c: u8) -> Option<Self> {
        c.checked_sub(BIAS).and_then(Self::new)
    }

    pub fn to_ascii(self) -> u8 {
        self.0 + BIAS
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

impl From<Digit> for u32 {
    fn from(d: Digit) -> u32 {
        d.0.into()
    }
}

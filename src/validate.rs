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

use super::{CHARS_PER_CELL, MAX_CHAR, MIN_CHAR};

/// Checks whether `s` is well-formed base-41 data: a non-empty sequence of
/// characters in `)` ..= `Q` (41 ..= 81) whose length is a multiple of 3.
///
/// This does not check that each triple is canonical (at most
/// `u16::MAX`); the checked decoders do that separately.
///
/// ```
/// assert!(base41::is_valid("BABA.DEDA.DECA."));
/// assert!(!base41::is_valid(""));
/// assert!(!base41::is_valid("BAB!"));
/// assert!(!base41::is_valid("BAR"));
/// ```
pub fn is_valid<S: AsRef<[u8]> + ?Sized>(s: &S) -> bool {
    let s = s.as_ref();
    !s.is_empty()
        && s.len() % CHARS_PER_CELL == 0
        && s.iter().all(|c| (MIN_CHAR..=MAX_CHAR).contains(c))
}

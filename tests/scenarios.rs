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

use base41::{encode_into_with, try_decode_into, try_encode_into};
use base41::{Division, EncodeConfig, Engine, FixedPoint, TERMINATOR};

const DATA: [u8; 10] = [26, 168, 48, 178, 7, 162, 52, 188, 199, 36];
const TEXT: &str = "BABA.DEDA.DECA.";

#[test]
fn encodes_and_decodes_reference_bytes() {
    let mut text = [0_u8; 16];
    assert_eq!(try_encode_into(&DATA, &mut text), Ok(15));
    assert_eq!(&text[..15], TEXT.as_bytes());

    let mut data = [0_u8; 10];
    assert_eq!(try_decode_into(TEXT, &mut data), Ok(10));
    assert_eq!(data, DATA);
}

#[test]
fn fixed_point_matches_reference_string() {
    let mut config = EncodeConfig::new();
    config.nul_terminate = true;

    let mut division = [0xff_u8; 16];
    let mut fixed = [0xff_u8; 16];
    encode_into_with::<Division, u8>(&DATA, &mut division, config);
    encode_into_with::<FixedPoint, u8>(&DATA, &mut fixed, config);
    assert_eq!(division, fixed);
    assert_eq!(&fixed[..15], TEXT.as_bytes());
    assert_eq!(fixed[15], TERMINATOR);
}

/// Encodes every 4-byte buffer `(i, j, k, l)` with `l < 4` as one
/// double-word and decodes it again as bytes.
fn double_words_decode_as_bytes<E, I>(first: I)
where
    E: Engine,
    I: Iterator<Item = u8>,
{
    let mut dwords = Vec::with_capacity(1 << 18);
    let mut text = vec![0_u8; (1 << 18) * 6];
    let mut bytes = vec![0_u8; (1 << 18) * 4];
    for i in first {
        dwords.clear();
        for j in 0..=u8::MAX {
            for k in 0..=u8::MAX {
                for l in 0..4 {
                    dwords.push(u32::from_le_bytes([i, j, k, l]));
                }
            }
        }
        let config = EncodeConfig::new();
        encode_into_with::<E, u32>(&dwords, &mut text, config);
        assert_eq!(try_decode_into(&text, &mut bytes), Ok(bytes.len()));
        bytes.chunks_exact(4).zip(&dwords).for_each(|(b, &d)| {
            assert_eq!(b, d.to_le_bytes(), "mismatch for {:#010x}", d);
        });
    }
}

#[test]
fn double_words_decode_as_bytes_sampled() {
    double_words_decode_as_bytes::<Division, _>((0..=u8::MAX).step_by(51));
    double_words_decode_as_bytes::<FixedPoint, _>((0..=u8::MAX).step_by(51));
}

#[test]
#[cfg_attr(debug_assertions, ignore = "slow without optimizations")]
fn double_words_decode_as_bytes_exhaustive() {
    double_words_decode_as_bytes::<FixedPoint, _>(0..=u8::MAX);
}

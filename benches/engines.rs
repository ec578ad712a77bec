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

//! Division vs. fixed-point encoding, and checked vs. unchecked decoding.
//!
//! Run with: cargo bench --bench engines

use base41::{decode_into, encode_into_with, try_decode_into};
use base41::{Division, EncodeConfig, Engine, FixedPoint};
use criterion::{black_box, criterion_group, criterion_main};
use criterion::{BenchmarkId, Criterion, Throughput};

const SIZES: [usize; 3] = [32, 1024, 64 * 1024];

fn input(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 131 + 7) as u8).collect()
}

fn encode<E: Engine>(data: &[u8], text: &mut [u8]) -> usize {
    encode_into_with::<E, u8>(data, text, EncodeConfig::new())
}

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for &len in &SIZES {
        let data = input(len);
        let mut text = vec![0_u8; len / 2 * 3];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(
            BenchmarkId::new("division", len),
            &data,
            |b, data| {
                b.iter(|| encode::<Division>(black_box(data), &mut text))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("fixed_point", len),
            &data,
            |b, data| {
                b.iter(|| encode::<FixedPoint>(black_box(data), &mut text))
            },
        );
    }
    group.finish();
}

fn bench_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for &len in &SIZES {
        let data = input(len);
        let mut text = vec![0_u8; len / 2 * 3];
        encode::<Division>(&data, &mut text);
        let mut out = vec![0_u8; len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(
            BenchmarkId::new("unchecked", len),
            &text,
            |b, text| b.iter(|| decode_into(black_box(text), &mut out)),
        );
        group.bench_with_input(
            BenchmarkId::new("checked", len),
            &text,
            |b, text| b.iter(|| try_decode_into(black_box(text), &mut out)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_encoding, bench_decoding);
criterion_main!(benches);

//! Criterion benchmarks for lanewise
//!
//! Measures wall-clock time for the engine operations.
//! Run with: cargo bench --bench criterion_benches

use criterion::{criterion_group, criterion_main, Criterion};
use lanewise::{ops, Vec16s, Vec16u, Vec32u, VecBool, LANES};
use std::hint::black_box;

/// Benchmark the carry-propagating add/sub engine
fn bench_carry_arith(c: &mut Criterion) {
    let mut group = c.benchmark_group("carry_arith");

    let a16 = Vec16u::from_fn(|i| (i as u16).wrapping_mul(0x1357));
    let b16 = Vec16u::from_fn(|i| (i as u16).wrapping_mul(0x2468));
    let a32 = Vec32u::from_fn(|i| (i as u32).wrapping_mul(0x1357_9BDF));
    let b32 = Vec32u::from_fn(|i| (i as u32).wrapping_mul(0x0246_8ACE));
    let carry = VecBool::from_fn(|i| i % 2 == 0);

    group.bench_function("add_carry_out_16", |bencher| {
        bencher.iter(|| black_box(ops::add_carry_out(black_box(a16), black_box(b16))))
    });

    group.bench_function("add_carry_in_out_32", |bencher| {
        bencher.iter(|| {
            black_box(ops::add_carry_in_out(
                black_box(a32),
                black_box(b32),
                black_box(carry),
            ))
        })
    });

    group.bench_function("sub_borrow_out_32", |bencher| {
        bencher.iter(|| black_box(ops::sub_borrow_out(black_box(a32), black_box(b32))))
    });

    group.bench_function("add_sat_16", |bencher| {
        bencher.iter(|| black_box(ops::add_sat(black_box(a16), black_box(b16))))
    });

    group.finish();
}

/// Benchmark the widening multiply engine
fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    let a = Vec16s::from_fn(|i| (i as i16).wrapping_mul(-0x0137));
    let b = Vec16s::from_fn(|i| (i as i16).wrapping_mul(0x0249));
    let au = a.cast_sign();
    let bu = b.cast_sign();

    group.bench_function("widening_mul_signed", |bencher| {
        bencher.iter(|| black_box(ops::widening_mul(black_box(a), black_box(b))))
    });

    group.bench_function("widening_mul_unsigned", |bencher| {
        bencher.iter(|| black_box(ops::widening_mul(black_box(au), black_box(bu))))
    });

    group.bench_function("mac_signed", |bencher| {
        bencher.iter(|| {
            let mut hi = Vec16s::splat(0);
            let mut lo = Vec16u::splat(0);
            ops::mac(&mut hi, &mut lo, black_box(a), black_box(b));
            black_box((hi, lo))
        })
    });

    group.finish();
}

/// Benchmark masked data movement
fn bench_data_movement(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_movement");

    let mask = VecBool::from_fn(|i| i % 3 == 0);
    let a = Vec32u::from_fn(|i| i as u32);
    let b = Vec32u::from_fn(|i| !(i as u32));
    let amounts = Vec16s::from_fn(|i| (i % 16) as i16);
    let (lo, hi) = Vec32u::from_fn(|i| (i as u32) << 20).cast_sign().unpack();

    group.bench_function("select_32", |bencher| {
        bencher.iter(|| black_box(ops::select(black_box(mask), black_box(a), black_box(b))))
    });

    group.bench_function("swap_32", |bencher| {
        bencher.iter(|| black_box(ops::swap(black_box(mask), black_box(a), black_box(b))))
    });

    group.bench_function("shr_arithmetic_extended", |bencher| {
        bencher.iter(|| {
            black_box(ops::shr_arithmetic_extended(
                black_box(lo),
                black_box(hi),
                black_box(amounts),
            ))
        })
    });

    group.finish();
}

/// Benchmark indexed memory access
fn bench_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory");

    let table: Vec<u16> = (0..1024u32).map(|x| (x * x) as u16).collect();
    let idx = Vec16s::from_fn(|i| (i * 17 % LANES) as i16);

    group.bench_function("gather_16", |bencher| {
        bencher.iter(|| {
            black_box(lanewise::mem::gather::<u16, i16, LANES>(
                black_box(&table),
                black_box(idx),
            ))
        })
    });

    group.bench_function("gather_lanes", |bencher| {
        let v = Vec16u::from_fn(|i| i as u16);
        bencher.iter(|| black_box(ops::gather_lanes(black_box(v), black_box(idx))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_carry_arith,
    bench_multiply,
    bench_data_movement,
    bench_memory
);
criterion_main!(benches);

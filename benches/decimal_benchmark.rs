// ============================================================================
// Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - string to digits and back
// 2. Addition - carry propagation at different widths
// 3. Subtraction - borrow propagation at different widths
// 4. Comparison - equal-length values differing in the last digit
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unsigned_decimal::prelude::*;

const WIDTHS: [usize; 4] = [10, 100, 1_000, 10_000];

fn nines(width: usize) -> Decimal {
    Decimal::filled(width, 9).unwrap()
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for width in WIDTHS.iter() {
        let text = "7".repeat(*width);
        group.bench_with_input(BenchmarkId::new("from_str", width), &text, |b, text| {
            b.iter(|| black_box(text.parse::<Decimal>().unwrap()));
        });

        let value: Decimal = text.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("to_string", width), &value, |b, value| {
            b.iter(|| black_box(value.to_string()));
        });
    }

    group.finish();
}

// All-nines plus one carries through every position
fn benchmark_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    let one = Decimal::from(1u64);

    for width in WIDTHS.iter() {
        let a = nines(*width);
        group.bench_with_input(BenchmarkId::new("full_carry", width), &a, |b, a| {
            b.iter(|| black_box(a.add(&one)));
        });

        let half = Decimal::filled(*width, 4).unwrap();
        group.bench_with_input(BenchmarkId::new("no_carry", width), &half, |b, half| {
            b.iter(|| black_box(half.add(half)));
        });
    }

    group.finish();
}

// 10^n - 1 borrows through every position
fn benchmark_sub(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_sub");
    let one = Decimal::from(1u64);

    for width in WIDTHS.iter() {
        let power = nines(*width).add(&one);
        group.bench_with_input(BenchmarkId::new("full_borrow", width), &power, |b, power| {
            b.iter(|| black_box(power.checked_sub(&one).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    for width in WIDTHS.iter() {
        let a = nines(*width);
        let b = a.checked_sub(&Decimal::from(1u64)).unwrap();
        group.bench_with_input(
            BenchmarkId::new("last_digit_differs", width),
            &(a, b),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.is_greater(b)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_add,
    benchmark_sub,
    benchmark_compare
);
criterion_main!(benches);

//! Benchmarks for the decimal numeric core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use physica_bench::DecimalSource;
use physica_core::{lookup, Decimal};

fn bench_arithmetic(c: &mut Criterion) {
    let mut source = DecimalSource::new();
    let a = source.signed(18, -20..20);
    let b = source.positive(18, -20..20);

    let mut group = c.benchmark_group("decimal_arithmetic");
    group.bench_function("add", |bench| bench.iter(|| black_box(&a) + black_box(&b)));
    group.bench_function("mul", |bench| bench.iter(|| black_box(&a) * black_box(&b)));
    group.bench_function("div", |bench| {
        bench.iter(|| black_box(&a).checked_div(black_box(&b)))
    });
    group.finish();
}

fn bench_transcendental(c: &mut Criterion) {
    let mut source = DecimalSource::new();
    let x = source.positive(15, -2..2);

    let mut group = c.benchmark_group("decimal_transcendental");
    group.bench_function("sqrt", |bench| bench.iter(|| black_box(&x).sqrt()));
    group.bench_function("exp", |bench| bench.iter(|| black_box(&x).exp()));
    group.bench_function("ln", |bench| bench.iter(|| black_box(&x).ln()));
    group.finish();
}

fn bench_powi(c: &mut Criterion) {
    let base: Decimal = "1.0000001".parse().unwrap();
    let mut group = c.benchmark_group("decimal_powi");

    for exponent in [2i64, 16, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(exponent), &exponent, |bench, &n| {
            bench.iter(|| black_box(&base).powi(n))
        });
    }
    group.finish();
}

fn bench_conversions(c: &mut Criterion) {
    c.bench_function("decimal_parse", |b| {
        b.iter(|| black_box("6.62607015e-34").parse::<Decimal>())
    });
    c.bench_function("decimal_from_f64", |b| {
        b.iter(|| Decimal::from_f64(black_box(0.1)))
    });
}

fn bench_constant_lookup(c: &mut Criterion) {
    c.bench_function("constant_lookup", |b| {
        b.iter(|| lookup(black_box("reduced_planck_constant")))
    });
}

criterion_group!(
    benches,
    bench_arithmetic,
    bench_transcendental,
    bench_powi,
    bench_conversions,
    bench_constant_lookup,
);
criterion_main!(benches);

use cl_termstructures::{
    CarryInterpolatedForward, Curve, LogLinearDiscount, MarketSeries, NelsonSiegelParams,
    NelsonSiegelYield, YieldInterpolatedDiscount,
};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

fn discount_quotes() -> MarketSeries {
    MarketSeries::new(
        0.0,
        vec![0.25, 0.5, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 20.0, 30.0],
        vec![0.995, 0.989, 0.978, 0.955, 0.932, 0.886, 0.844, 0.786, 0.620, 0.510],
    )
    .unwrap()
}

fn queries() -> Vec<f64> {
    (0..=10_000).map(|i| 30.0 * i as f64 / 10_000.0).collect()
}

fn sum_over(curve: &dyn Curve, queries: &[f64]) -> f64 {
    queries
        .iter()
        .map(|&t| curve.value(black_box(t)).unwrap_or(f64::NAN))
        .sum()
}

fn bench_discount_interpolation(c: &mut Criterion) {
    let quotes = discount_quotes();
    let queries = queries();
    let by_yield = YieldInterpolatedDiscount::new(&quotes, 0.02).unwrap();
    let log_linear = LogLinearDiscount::new(&quotes).unwrap();

    let mut group = c.benchmark_group("discount_interpolation");
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("linear_yield", |b| {
        b.iter(|| black_box(sum_over(&by_yield, &queries)))
    });
    group.bench_function("log_linear", |b| {
        b.iter(|| black_box(sum_over(&log_linear, &queries)))
    });
    group.finish();
}

fn bench_carry_interpolation(c: &mut Criterion) {
    let forwards = MarketSeries::new(
        0.0,
        vec![0.5, 1.0, 2.0, 5.0, 10.0, 30.0],
        vec![100.9, 101.8, 103.5, 108.9, 118.2, 160.0],
    )
    .unwrap();
    let curve = CarryInterpolatedForward::new(100.0, &forwards).unwrap();
    let queries = queries();

    let mut group = c.benchmark_group("carry_interpolation");
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("value", |b| b.iter(|| black_box(sum_over(&curve, &queries))));
    group.finish();
}

fn bench_nelson_siegel(c: &mut Criterion) {
    let params = NelsonSiegelParams {
        c0: 0.02,
        c1: 0.04,
        c2: 0.06,
        lambda: 0.05,
    };
    let yields = NelsonSiegelYield::new(params, 0.0).unwrap();
    let discount = yields.into_discount();
    let queries = queries();

    let mut group = c.benchmark_group("nelson_siegel");
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("yield", |b| b.iter(|| black_box(sum_over(&yields, &queries))));
    group.bench_function("discount", |b| {
        b.iter(|| black_box(sum_over(&discount, &queries)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_discount_interpolation,
    bench_carry_interpolation,
    bench_nelson_siegel
);
criterion_main!(benches);

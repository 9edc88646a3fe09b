use criterion::Throughput;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tslib::{localize_datetime, precision_from_unit, DateTime, TimeZone, Unit};

fn precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("precision");
    group.throughput(Throughput::Elements(1));
    group.bench_function("s/ns", |b| {
        b.iter(|| precision_from_unit(black_box(Unit::Second.code()), Unit::Nanosecond.code()))
    });
    group.bench_function("ns/ms", |b| {
        b.iter(|| precision_from_unit(black_box(Unit::Nanosecond.code()), Unit::Millisecond.code()))
    });
    group.finish();
}

fn localize(c: &mut Criterion) {
    let dt = DateTime::new(2024, 7, 14, 12, 0, 0, 0).unwrap();
    let fixed = TimeZone::fixed(19_800).unwrap();
    let rule: TimeZone = "America/New_York".parse().unwrap();

    let mut group = c.benchmark_group("localize");
    group.throughput(Throughput::Elements(1));
    group.bench_function("fixed", |b| b.iter(|| localize_datetime(black_box(&dt), Some(&fixed))));
    group.bench_function("rule", |b| b.iter(|| localize_datetime(black_box(&dt), Some(&rule))));
    group.bench_function("strip", |b| b.iter(|| localize_datetime(black_box(&dt), None)));
    group.finish();
}

criterion_group!(benches, precision, localize);
criterion_main!(benches);

// Benchmarks for calendar grid generation

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use save_the_date::services::calendar::{build_continuous_grid, enumerate_months};

fn bench_grid_generation(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2025, 5, 27).unwrap();
    let wedding = NaiveDate::from_ymd_opt(2026, 2, 6).unwrap();

    c.bench_function("enumerate_announcement_range", |b| {
        b.iter(|| enumerate_months(black_box(2025), black_box(4), black_box(2026), black_box(1)))
    });

    let months = enumerate_months(2025, 4, 2026, 1);
    c.bench_function("build_continuous_grid_10_months", |b| {
        b.iter(|| build_continuous_grid(black_box(&months), black_box(today), black_box(wedding)))
    });

    let decade = enumerate_months(2020, 0, 2029, 11);
    c.bench_function("build_continuous_grid_120_months", |b| {
        b.iter(|| build_continuous_grid(black_box(&decade), black_box(today), black_box(wedding)))
    });
}

criterion_group!(benches, bench_grid_generation);
criterion_main!(benches);

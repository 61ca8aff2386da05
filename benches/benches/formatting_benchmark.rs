//! Formatter and validator throughput.
//!
//! Run with: `cargo bench --package wirestyle-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wirestyle_bench::{SLUGS, dates_in_year, minutes_of_day};
use wirestyle_lib::{
    CalendarDate, SlugGrammar, SlugValidator, date_relative_to, dayofweek_relative_to, time,
};

fn date_benchmark(c: &mut Criterion) {
    let dates = dates_in_year(2024);
    let today = CalendarDate::new(2025, 6, 1);

    let mut group = c.benchmark_group("dates");
    group.throughput(Throughput::Elements(dates.len() as u64));
    group.bench_function("date", |b| {
        b.iter(|| {
            for date in &dates {
                black_box(date_relative_to(*date, today).ok());
            }
        });
    });
    group.bench_function("dayofweek", |b| {
        b.iter(|| {
            for date in &dates {
                black_box(dayofweek_relative_to(*date, today).ok());
            }
        });
    });
    group.finish();
}

fn time_benchmark(c: &mut Criterion) {
    let minutes = minutes_of_day();

    let mut group = c.benchmark_group("times");
    group.throughput(Throughput::Elements(minutes.len() as u64));
    group.bench_function("time", |b| {
        b.iter(|| {
            for minute in &minutes {
                black_box(time(*minute).ok());
            }
        });
    });
    group.finish();
}

fn slug_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("slugs");
    group.throughput(Throughput::Elements(SLUGS.len() as u64));

    for grammar in [SlugGrammar::General, SlugGrammar::Packaging, SlugGrammar::Wild] {
        let validator = SlugValidator::for_grammar(grammar);
        group.bench_with_input(BenchmarkId::new("check", grammar), &validator, |b, v| {
            b.iter(|| {
                for slug in SLUGS {
                    black_box(v.check(slug).is_ok());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, date_benchmark, time_benchmark, slug_benchmark);
criterion_main!(benches);

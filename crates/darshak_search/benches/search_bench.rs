use criterion::{Criterion, black_box, criterion_group, criterion_main};
use darshak_search::{
    CalendarConfig, build_month, festivals_by_date, festivals_for, panchang_for_date,
    parse_festival_date, search_festivals,
};
use darshak_time::civil_date;

fn panchang_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("panchang");
    if let Ok(date) = civil_date(2024, 10, 1) {
        let config = CalendarConfig::default();
        group.bench_function("panchang_for_date", |b| {
            b.iter(|| panchang_for_date(black_box(date), &config))
        });
    }
    group.bench_function("build_month", |b| {
        b.iter(|| build_month(black_box(2024), black_box(10)))
    });
    group.finish();
}

fn festival_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("festival");
    group.bench_function("parse_festival_date", |b| {
        b.iter(|| parse_festival_date(black_box("नवंबर 1, 2024")))
    });
    group.bench_function("festivals_for_year", |b| {
        b.iter(|| festivals_for(black_box(2035), None))
    });
    group.bench_function("search_festivals", |b| {
        b.iter(|| search_festivals(black_box("दिवाली")))
    });
    let month = festivals_for(2025, Some(2));
    group.bench_function("festivals_by_date", |b| {
        b.iter(|| festivals_by_date(black_box(&month)))
    });
    group.finish();
}

criterion_group!(benches, panchang_bench, festival_bench);
criterion_main!(benches);

// Benchmark for grid building
// Measures how long one page of each view takes to build for both adapters

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use datetime_picker::models::view::DateView;
use datetime_picker::{Calendar, DateInput, NativeDateTimeAdapter, UnixTimestampDateTimeAdapter};

const VIEWS: [DateView; 3] = [DateView::Month, DateView::Year, DateView::MultiYear];

fn bench_native_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("native_grid");

    for view in VIEWS {
        let calendar = Calendar::builder(NativeDateTimeAdapter::new())
            .picker_moment("2024-03-10")
            .min_date("2020-01-01")
            .start_view(view)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(view.name()), &calendar, |b, calendar| {
            b.iter(|| black_box(calendar.body()));
        });
    }

    group.finish();
}

fn bench_unix_timestamp_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("unix_timestamp_grid");

    for view in VIEWS {
        let calendar = Calendar::builder(UnixTimestampDateTimeAdapter::new())
            .picker_moment(DateInput::Millis(1_710_028_800_000))
            .max_date("2030-12-31")
            .start_view(view)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(view.name()), &calendar, |b, calendar| {
            b.iter(|| black_box(calendar.body()));
        });
    }

    group.finish();
}

fn bench_filtered_multi_year(c: &mut Criterion) {
    use chrono::{Datelike, Weekday};

    let mut calendar = Calendar::builder(NativeDateTimeAdapter::new())
        .picker_moment("2024-03-10")
        .start_view(DateView::MultiYear)
        .build()
        .unwrap();
    calendar.set_date_filter(|d: &chrono::NaiveDateTime| d.weekday() != Weekday::Sun);

    c.bench_function("filtered_multi_year_grid", |b| {
        b.iter(|| black_box(calendar.grid()))
    });
}

criterion_group!(
    benches,
    bench_native_grids,
    bench_unix_timestamp_grids,
    bench_filtered_multi_year
);
criterion_main!(benches);

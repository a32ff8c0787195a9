use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ghcn_seasons::models::{Hemisphere, RawObservation, Season, TemperatureUnit};
use ghcn_seasons::processors::{
    build_bins, count_per_season, decode_date, encode_date, label_seasons, ObservationReshaper,
};

// Create test rows for benchmarking: TMIN, TMAX and one unrelated element per day
fn create_station_rows(days: usize) -> Vec<RawObservation> {
    let mut rows = Vec::with_capacity(days * 3);
    let base_date = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();

    for day in 0..days {
        let date = encode_date(base_date + chrono::Duration::days(day as i64));
        let base_temp = ((day % 365) as i32 - 180) * 2;

        rows.push(RawObservation::new(date, "TMIN", base_temp - 50));
        rows.push(RawObservation::new(date, "TMAX", base_temp + 50));
        rows.push(RawObservation::new(date, "PRCP", (day % 40) as i32));
    }

    rows
}

fn benchmark_reshape(c: &mut Criterion) {
    let rows = create_station_rows(3650);

    c.bench_function("reshape_ten_years", |b| {
        b.iter(|| {
            let reshaper = ObservationReshaper::with_unit(TemperatureUnit::Fahrenheit);
            black_box(reshaper.reshape(&rows).map(|r| r.len()).unwrap_or(0))
        })
    });
}

fn benchmark_decode_date(c: &mut Criterion) {
    let encoded: Vec<i64> = vec![19500101, 19991231, 20000229, 20231301, 2023011];

    c.bench_function("decode_date", |b| {
        b.iter(|| {
            let valid = encoded.iter().filter(|&&d| decode_date(d).is_ok()).count();
            black_box(valid)
        })
    });
}

fn benchmark_seasonal_counts(c: &mut Criterion) {
    let records = ObservationReshaper::new()
        .reshape(&create_station_rows(3650))
        .unwrap();
    let seasonal = label_seasons(&records, Hemisphere::Northern).unwrap();
    let bins = build_bins(-40, 110, 5).unwrap();

    c.bench_function("seasonal_counts", |b| {
        b.iter(|| {
            let total: u64 = Season::ALL
                .iter()
                .map(|&season| count_per_season(&seasonal, season, &bins).total_max())
                .sum();
            black_box(total)
        })
    });
}

fn benchmark_varying_data_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("reshape_by_size");

    for &years in &[1, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::new("years", years), &years, |b, &years| {
            let rows = create_station_rows(years * 365);
            let reshaper = ObservationReshaper::new();

            b.iter(|| black_box(reshaper.reshape(&rows).map(|r| r.len()).unwrap_or(0)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_reshape,
    benchmark_decode_date,
    benchmark_seasonal_counts,
    benchmark_varying_data_sizes
);
criterion_main!(benches);

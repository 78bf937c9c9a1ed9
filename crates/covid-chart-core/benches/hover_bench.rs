use chrono::NaiveDate;
use covid_chart_core::{ChartLayout, ChartOptions, CountryTimeseries, Dataset, HoverIndex, Point};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn build_dataset(countries: usize, days: i64) -> Dataset {
    let start = NaiveDate::from_ymd_opt(2020, 1, 22).expect("start date");
    let series = (0..countries)
        .map(|c| {
            CountryTimeseries::from_totals(
                format!("Country {c}"),
                (0..days).map(|i| (start + chrono::Duration::days(i), ((i * (c as i64 + 3)) % 9_973) as f64)),
            )
        })
        .collect();
    Dataset::new(series)
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover");
    for &(countries, days) in &[(20usize, 100i64), (190usize, 300i64)] {
        let data = build_dataset(countries, days);
        let layout = ChartLayout::compute(&data, 960.0, 500.0, &ChartOptions::default()).expect("layout");
        let id = format!("{countries}x{days}");

        group.bench_with_input(BenchmarkId::new("build", &id), &data, |b, d| {
            b.iter(|| black_box(HoverIndex::from_layout(d, &layout)));
        });

        let index = HoverIndex::from_layout(&data, &layout);
        let queries: Vec<Point> = (0..1_000)
            .map(|i| {
                let f = i as f64 / 1_000.0;
                Point::new(f * layout.inner_width, ((f * 7.3).fract()) * layout.inner_height)
            })
            .collect();
        group.bench_with_input(BenchmarkId::new("nearest_1k", &id), &queries, |b, qs| {
            b.iter_batched(
                || qs.clone(),
                |qs| {
                    for q in qs {
                        black_box(index.nearest(q));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hover);
criterion_main!(benches);

// File: crates/covid-chart-core/tests/hover.rs
// Purpose: Nearest-point lookup: exact hits, ties, bounds and agreement with brute force.

use chrono::NaiveDate;
use covid_chart_core::{ChartLayout, ChartOptions, CountryTimeseries, Dataset, HoverIndex, Point};

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, 1).expect("date") + chrono::Duration::days(offset)
}

fn build(data: &Dataset) -> (ChartLayout, HoverIndex) {
    let layout = ChartLayout::compute(data, 600.0, 400.0, &ChartOptions::default()).expect("layout");
    let index = HoverIndex::from_layout(data, &layout);
    (layout, index)
}

#[test]
fn exact_position_hits_that_point() {
    let data = Dataset::new(vec![
        CountryTimeseries::from_totals("A", (0..10).map(|i| (day(i), (i * 10) as f64))),
        CountryTimeseries::from_totals("B", (0..10).map(|i| (day(i), (i * 3) as f64))),
    ]);
    let (layout, index) = build(&data);
    assert_eq!(index.len(), 20);
    let line = layout.line_generator();
    for s in &data.series {
        for p in &s.points {
            let hit = index.nearest(line.position(p)).expect("hit");
            // Day 0 of A and B share a pixel; everything else is unique.
            if p.date != day(0) {
                assert_eq!(hit, p);
            }
        }
    }
}

#[test]
fn ties_resolve_to_first_in_pool() {
    let data = Dataset::new(vec![
        CountryTimeseries::from_totals("First", vec![(day(0), 5.0), (day(4), 9.0)]),
        CountryTimeseries::from_totals("Second", vec![(day(0), 5.0), (day(4), 1.0)]),
    ]);
    let (layout, index) = build(&data);
    let shared = layout.line_generator().position(&data.series[1].points[0]);
    assert_eq!(index.nearest(shared).map(|p| p.country_name.as_str()), Some("First"));
}

#[test]
fn outside_inner_area_hits_nothing() {
    let data = Dataset::new(vec![CountryTimeseries::from_totals("A", vec![(day(0), 1.0), (day(1), 2.0)])]);
    let (layout, index) = build(&data);
    assert!(index.nearest(Point::new(-1.0, 10.0)).is_none());
    assert!(index.nearest(Point::new(10.0, layout.inner_height + 0.5)).is_none());
    assert!(index.nearest(Point::new(layout.inner_width, layout.inner_height)).is_some());
}

#[test]
fn matches_brute_force_on_a_grid() {
    let data = Dataset::new(vec![
        CountryTimeseries::from_totals("A", (0..30).map(|i| (day(i), ((i * 37) % 101) as f64))),
        CountryTimeseries::from_totals("B", (0..30).map(|i| (day(i), ((i * 53) % 89) as f64))),
        CountryTimeseries::from_totals("C", (0..30).map(|i| (day(i), (i * i) as f64 / 9.0))),
    ]);
    let (layout, index) = build(&data);
    let line = layout.line_generator();
    let pool = data.flatten();

    let mut y = 0.0;
    while y <= layout.inner_height {
        let mut x = 0.0;
        while x <= layout.inner_width {
            let q = Point::new(x, y);
            let mut best: Option<(f64, usize)> = None;
            for (i, p) in pool.iter().enumerate() {
                let at = line.position(p);
                let (dx, dy) = (at.x - x, at.y - y);
                let d2 = dx * dx + dy * dy;
                if best.map_or(true, |(bd, _)| d2 < bd) {
                    best = Some((d2, i));
                }
            }
            let expected = pool[best.expect("non-empty").1];
            assert_eq!(index.nearest(q), Some(expected), "query {q:?}");
            x += 17.0;
        }
        y += 13.0;
    }
}

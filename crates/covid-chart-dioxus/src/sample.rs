// File: crates/covid-chart-dioxus/src/sample.rs
// Summary: Small built-in dataset (weekly cumulative deaths, spring 2020) for the desktop demo.

use chrono::{Duration, NaiveDate};
use covid_chart_core::{CountryTimeseries, Dataset};

const WEEKS: usize = 14;

const TOTALS: &[(&str, [f64; WEEKS])] = &[
    ("Italy", [34.0, 366.0, 1809.0, 5476.0, 10779.0, 15887.0, 19899.0, 23660.0, 26644.0, 28884.0, 30560.0, 31908.0, 32785.0, 33415.0]),
    ("Spain", [0.0, 17.0, 288.0, 1772.0, 6803.0, 12641.0, 17209.0, 20453.0, 23190.0, 25264.0, 26621.0, 27650.0, 28628.0, 28752.0]),
    ("US", [1.0, 22.0, 68.0, 471.0, 2860.0, 9619.0, 22073.0, 40661.0, 54256.0, 67682.0, 79526.0, 89564.0, 97720.0, 104383.0]),
    ("United Kingdom", [0.0, 3.0, 35.0, 281.0, 1231.0, 4943.0, 10629.0, 16095.0, 20369.0, 28205.0, 31930.0, 34687.0, 36914.0, 38451.0]),
    ("Germany", [0.0, 0.0, 12.0, 84.0, 560.0, 1584.0, 3022.0, 4598.0, 5976.0, 6866.0, 7549.0, 7935.0, 8257.0, 8500.0]),
];

/// Weekly totals from 2020-03-01 for a handful of countries.
pub fn sample_dataset() -> Dataset {
    let start = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap_or_default();
    let series = TOTALS
        .iter()
        .map(|(country, totals)| {
            CountryTimeseries::from_totals(
                *country,
                totals.iter().enumerate().map(|(week, &total)| (start + Duration::weeks(week as i64), total)),
            )
        })
        .collect();
    Dataset::new(series)
}

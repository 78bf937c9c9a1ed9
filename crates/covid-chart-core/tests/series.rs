// File: crates/covid-chart-core/tests/series.rs
// Purpose: Point validation and grouping of loose points into per-country series.

use chrono::NaiveDate;
use covid_chart_core::{ChartError, Dataset, TimeSeriesPoint};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 4, d).expect("valid date")
}

#[test]
fn try_new_accepts_zero_and_positive_totals() {
    let p = TimeSeriesPoint::try_new(day(1), "Chile", 0.0).expect("zero is valid");
    assert_eq!(p, TimeSeriesPoint::new(day(1), "Chile", 0.0));
    assert!(TimeSeriesPoint::try_new(day(1), "Chile", 12.5).is_ok());
}

#[test]
fn try_new_rejects_negative_and_non_finite_totals() {
    for bad in [-1.0, -0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        match TimeSeriesPoint::try_new(day(1), "Chile", bad) {
            Err(ChartError::InvalidPoint { country, .. }) => assert_eq!(country, "Chile"),
            other => panic!("{bad} should be rejected, got {other:?}"),
        }
    }
    let err = TimeSeriesPoint::try_new(day(1), "Chile", -2.0).expect_err("negative");
    assert_eq!(err.to_string(), "invalid point for Chile: death total is negative");
}

#[test]
fn from_points_groups_in_first_seen_order_and_sorts_by_date() {
    let data = Dataset::from_points(vec![
        TimeSeriesPoint::new(day(3), "Norway", 30.0),
        TimeSeriesPoint::new(day(2), "Austria", 5.0),
        TimeSeriesPoint::new(day(1), "Norway", 10.0),
        TimeSeriesPoint::new(day(1), "Austria", 2.0),
        TimeSeriesPoint::new(day(2), "Norway", 20.0),
    ]);
    let names: Vec<&str> = data.series.iter().map(|s| s.country_name.as_str()).collect();
    assert_eq!(names, vec!["Norway", "Austria"]);
    let norway: Vec<f64> = data.series[0].points.iter().map(|p| p.death_total).collect();
    assert_eq!(norway, vec![10.0, 20.0, 30.0]);
    assert_eq!(data.series[1].points[0].date, day(1));
    assert_eq!(data.point_count(), 5);
    assert!(Dataset::from_points(Vec::new()).is_empty());
}

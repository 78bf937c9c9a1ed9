// File: crates/covid-chart-core/src/series.rs
// Summary: Per-country time series model (points, series, dataset) plus flattening/lookup helpers.

use chrono::NaiveDate;

use crate::error::{ChartError, Result};

/// One observation: cumulative deaths of a country on a date.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub country_name: String,
    pub death_total: f64,
}

impl TimeSeriesPoint {
    pub fn new(date: NaiveDate, country_name: impl Into<String>, death_total: f64) -> Self {
        Self { date, country_name: country_name.into(), death_total }
    }

    /// Try to construct a point enforcing the data contract:
    /// totals are finite and non-negative.
    pub fn try_new(date: NaiveDate, country_name: impl Into<String>, death_total: f64) -> Result<Self> {
        let country_name = country_name.into();
        if !death_total.is_finite() {
            return Err(ChartError::InvalidPoint { country: country_name, reason: "death total is not finite" });
        }
        if death_total < 0.0 {
            return Err(ChartError::InvalidPoint { country: country_name, reason: "death total is negative" });
        }
        Ok(Self { date, country_name, death_total })
    }
}

/// All points of one country, ascending by date.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryTimeseries {
    pub country_name: String,
    pub points: Vec<TimeSeriesPoint>,
}

impl CountryTimeseries {
    /// Build a series; points are sorted by date so the drawn line never doubles back.
    pub fn new(country_name: impl Into<String>, mut points: Vec<TimeSeriesPoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { country_name: country_name.into(), points }
    }

    /// Convenience for `(date, total)` pairs; each point inherits the series name.
    pub fn from_totals(country_name: impl Into<String>, totals: impl IntoIterator<Item = (NaiveDate, f64)>) -> Self {
        let name = country_name.into();
        let points = totals
            .into_iter()
            .map(|(date, total)| TimeSeriesPoint::new(date, name.clone(), total))
            .collect();
        Self::new(name, points)
    }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn len(&self) -> usize { self.points.len() }

    /// Latest observation, if any.
    pub fn last(&self) -> Option<&TimeSeriesPoint> { self.points.last() }
}

/// Every country's series. Render order follows the vector.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub series: Vec<CountryTimeseries>,
}

impl Dataset {
    pub fn new(series: Vec<CountryTimeseries>) -> Self {
        Self { series }
    }

    /// Group loose points by country (first-seen order), sorting each series by date.
    pub fn from_points(points: impl IntoIterator<Item = TimeSeriesPoint>) -> Self {
        let mut grouped: Vec<(String, Vec<TimeSeriesPoint>)> = Vec::new();
        for p in points {
            match grouped.iter_mut().find(|(name, _)| *name == p.country_name) {
                Some((_, pts)) => pts.push(p),
                None => grouped.push((p.country_name.clone(), vec![p])),
            }
        }
        Self::new(grouped.into_iter().map(|(name, pts)| CountryTimeseries::new(name, pts)).collect())
    }

    pub fn add_series(&mut self, series: CountryTimeseries) {
        self.series.push(series);
    }

    pub fn len(&self) -> usize { self.series.len() }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    /// Total number of points over all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(CountryTimeseries::len).sum()
    }

    /// The flattened point pool used for domain extents and hover lookup.
    pub fn flatten(&self) -> Vec<&TimeSeriesPoint> {
        self.series.iter().flat_map(|s| s.points.iter()).collect()
    }

    /// First series whose name matches exactly; duplicates resolve to the first.
    pub fn find_country(&self, name: &str) -> Option<&CountryTimeseries> {
        self.series.iter().find(|s| s.country_name == name)
    }
}

/// `[min date, max date]` of a point pool.
pub fn date_extent(pool: &[&TimeSeriesPoint]) -> Option<(NaiveDate, NaiveDate)> {
    let (first, rest) = pool.split_first()?;
    Some(rest.iter().fold((first.date, first.date), |(lo, hi), p| (lo.min(p.date), hi.max(p.date))))
}

/// Largest death total of a point pool.
pub fn max_total(pool: &[&TimeSeriesPoint]) -> Option<f64> {
    let (first, rest) = pool.split_first()?;
    Some(rest.iter().fold(first.death_total, |m, p| m.max(p.death_total)))
}

// File: crates/covid-chart-core/src/scale.rs
// Summary: Time (X) and linear value (Y) scales mapping a data domain onto a pixel range.

use chrono::{Datelike, NaiveDate};

use crate::grid::{linear_ticks, time_ticks};

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// General scale operations shared by both axes.
pub trait Scale {
    type Domain: Copy;

    fn domain(&self) -> (Self::Domain, Self::Domain);
    fn range(&self) -> (f64, f64);
    /// Domain value -> pixel.
    fn map(&self, v: Self::Domain) -> f64;
    /// Pixel -> domain value.
    fn invert(&self, px: f64) -> Self::Domain;
    /// About `count` human-friendly tick values inside the domain.
    fn ticks(&self, count: usize) -> Vec<Self::Domain>;
}

#[inline]
fn interpolate(v: f64, d0: f64, d1: f64, r0: f64, r1: f64) -> f64 {
    let span = d1 - d0;
    // Degenerate domain: everything lands mid-range.
    let t = if span == 0.0 { 0.5 } else { (v - d0) / span };
    r0 + t * (r1 - r0)
}

/// Milliseconds since the Unix epoch at midnight UTC.
#[inline]
pub fn date_to_millis(d: NaiveDate) -> f64 {
    (d.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE) as f64 * MILLIS_PER_DAY
}

/// Inverse of [`date_to_millis`], truncated to the containing day.
/// `None` outside the representable calendar.
pub fn millis_to_date(ms: f64) -> Option<NaiveDate> {
    let days = (ms / MILLIS_PER_DAY).floor();
    if !days.is_finite() || days.abs() > i32::MAX as f64 { return None; }
    let ce_days = (days as i32).checked_add(UNIX_EPOCH_DAYS_FROM_CE)?;
    NaiveDate::from_num_days_from_ce_opt(ce_days)
}

/// Horizontal time scale over calendar dates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    d0: NaiveDate,
    d1: NaiveDate,
    r0: f64,
    r1: f64,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }
}

impl Scale for TimeScale {
    type Domain = NaiveDate;

    fn domain(&self) -> (NaiveDate, NaiveDate) { (self.d0, self.d1) }

    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    #[inline]
    fn map(&self, v: NaiveDate) -> f64 {
        interpolate(date_to_millis(v), date_to_millis(self.d0), date_to_millis(self.d1), self.r0, self.r1)
    }

    fn invert(&self, px: f64) -> NaiveDate {
        let ms = interpolate(px, self.r0, self.r1, date_to_millis(self.d0), date_to_millis(self.d1));
        millis_to_date(ms).unwrap_or(self.d0)
    }

    fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        time_ticks(self.d0, self.d1, count)
    }
}

/// Vertical (or any) linear value scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }
}

impl Scale for LinearScale {
    type Domain = f64;

    fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }

    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    #[inline]
    fn map(&self, v: f64) -> f64 {
        interpolate(v, self.d0, self.d1, self.r0, self.r1)
    }

    fn invert(&self, px: f64) -> f64 {
        interpolate(px, self.r0, self.r1, self.d0, self.d1)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.d0, self.d1, count)
    }
}

// File: crates/covid-chart-core/src/grid.rs
// Summary: Tick layout helpers for linear (1/2/5 steps) and calendar time axes.

use chrono::{Datelike, NaiveDate, Weekday};

// Returns (i1, i2, inc). A negative `inc` means "divide by -inc" so that
// fractional steps stay exact (0.1 * 3 != 0.3).
fn tick_spec(start: f64, stop: f64, count: usize) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start { i1 += 1.0; }
        if i2 / inc > stop { i2 -= 1.0; }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
        (i1, i2, inc)
    }
}

/// Nice round ticks (multiples of 1, 2 or 5 times a power of ten) covering `[start, stop]`,
/// about `count` of them. Reversed domains yield descending ticks.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() { return Vec::new(); }
    if start == stop { return vec![start]; }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count);
    if i2 < i1 { return Vec::new(); }
    let n = (i2 - i1) as usize + 1;
    let mut ticks: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse { ticks.reverse(); }
    ticks
}

/// Calendar interval between time ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    Days(u32),
    Week,
    Months(u32),
    Years(i32),
}

impl TimeInterval {
    fn approx_days(self) -> f64 {
        match self {
            TimeInterval::Days(n) => n as f64,
            TimeInterval::Week => 7.0,
            TimeInterval::Months(n) => 30.44 * n as f64,
            TimeInterval::Years(n) => 365.25 * n as f64,
        }
    }

    fn contains(self, d: NaiveDate) -> bool {
        match self {
            TimeInterval::Days(n) => d.day0() % n == 0,
            TimeInterval::Week => d.weekday() == Weekday::Sun,
            TimeInterval::Months(n) => d.day() == 1 && d.month0() % n == 0,
            TimeInterval::Years(n) => d.ordinal() == 1 && d.year().rem_euclid(n) == 0,
        }
    }
}

/// Finest calendar interval giving at most `count` ticks over `[start, stop]`.
pub fn pick_time_interval(start: NaiveDate, stop: NaiveDate, count: usize) -> TimeInterval {
    let span = (stop - start).num_days().unsigned_abs() as f64;
    let count = count.max(1) as f64;
    let candidates = [
        TimeInterval::Days(1),
        TimeInterval::Days(2),
        TimeInterval::Week,
        TimeInterval::Months(1),
        TimeInterval::Months(3),
        TimeInterval::Years(1),
    ];
    for c in candidates {
        if span / c.approx_days() <= count {
            return c;
        }
    }
    let years = span / 365.25;
    let (_, _, inc) = tick_spec(0.0, years, count as usize);
    TimeInterval::Years(if inc > 1.0 { inc as i32 } else { 1 })
}

/// Dates inside `[start, stop]` falling on the chosen calendar interval.
pub fn time_ticks(start: NaiveDate, stop: NaiveDate, count: usize) -> Vec<NaiveDate> {
    if count == 0 { return Vec::new(); }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let interval = pick_time_interval(lo, hi, count);
    let mut ticks: Vec<NaiveDate> = match interval {
        TimeInterval::Years(n) => (lo.year()..=hi.year())
            .filter(|y| y.rem_euclid(n) == 0)
            .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
            .filter(|d| *d >= lo && *d <= hi)
            .collect(),
        other => lo.iter_days().take_while(|d| *d <= hi).filter(|d| other.contains(*d)).collect(),
    };
    if stop < start { ticks.reverse(); }
    ticks
}

/// Multi-scale label for a day-precision tick: year on Jan 1, month name on
/// other month starts, "Mon 05"-style weekdays otherwise (Sundays get "Jan 05").
pub fn format_time_tick(d: NaiveDate) -> String {
    if d.day() != 1 {
        if d.weekday() == Weekday::Sun {
            d.format("%b %d").to_string()
        } else {
            d.format("%a %d").to_string()
        }
    } else if d.month() != 1 {
        d.format("%B").to_string()
    } else {
        d.format("%Y").to_string()
    }
}

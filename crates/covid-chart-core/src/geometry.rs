// File: crates/covid-chart-core/src/geometry.rs
// Summary: Line generator (series -> SVG path data) and pixel formatting helpers.

use crate::scale::{LinearScale, Scale, TimeScale};
use crate::series::{CountryTimeseries, TimeSeriesPoint};
use crate::types::Point;

/// Pixel coordinate as written into SVG: at most three decimals, no trailing zeros.
pub fn fmt_coord(v: f64) -> String {
    if !v.is_finite() { return v.to_string(); }
    let r = (v * 1000.0).round() / 1000.0;
    if r == r.trunc() && r.abs() < 1e15 {
        format!("{}", r as i64)
    } else {
        format!("{r}")
    }
}

/// `M x,y L x,y ...` path data for a polyline; `None` when there is nothing to draw.
pub fn polyline_d(points: &[Point]) -> Option<String> {
    let (first, rest) = points.split_first()?;
    let mut d = format!("M{},{}", fmt_coord(first.x), fmt_coord(first.y));
    for p in rest {
        d.push('L');
        d.push_str(&fmt_coord(p.x));
        d.push(',');
        d.push_str(&fmt_coord(p.y));
    }
    Some(d)
}

/// Maps points of a series through the chart scales.
/// y uses `epsilon + total` so zero totals sit on the floor of the domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineGenerator {
    pub x_scale: TimeScale,
    pub y_scale: LinearScale,
    pub epsilon: f64,
}

impl LineGenerator {
    pub fn new(x_scale: TimeScale, y_scale: LinearScale, epsilon: f64) -> Self {
        Self { x_scale, y_scale, epsilon }
    }

    #[inline]
    pub fn x(&self, p: &TimeSeriesPoint) -> f64 { self.x_scale.map(p.date) }

    #[inline]
    pub fn y(&self, p: &TimeSeriesPoint) -> f64 { self.y_scale.map(self.epsilon + p.death_total) }

    #[inline]
    pub fn position(&self, p: &TimeSeriesPoint) -> Point { Point::new(self.x(p), self.y(p)) }

    pub fn points(&self, series: &CountryTimeseries) -> Vec<Point> {
        series.points.iter().map(|p| self.position(p)).collect()
    }

    /// Path data for the whole series.
    pub fn generate(&self, series: &CountryTimeseries) -> Option<String> {
        polyline_d(&self.points(series))
    }
}

// File: crates/covid-chart-core/src/layout.rs
// Summary: Derived chart geometry: inner area, scale domains/ranges and the line generator.

use chrono::NaiveDate;

use crate::error::{ChartError, Result};
use crate::geometry::LineGenerator;
use crate::options::ChartOptions;
use crate::scale::{LinearScale, Scale, TimeScale};
use crate::series::{date_extent, max_total, Dataset};
use crate::types::{Insets, Point};

/// Everything that follows purely from `(data, width, height, options)`.
/// Recompute whenever any of those change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
    pub inner_width: f64,
    pub inner_height: f64,
    pub epsilon: f64,
    pub x_scale: TimeScale,
    pub y_scale: LinearScale,
}

impl ChartLayout {
    pub fn compute(data: &Dataset, width: f64, height: f64, options: &ChartOptions) -> Result<Self> {
        let insets = options.insets;
        let inner_width = width - insets.hsum() as f64;
        let inner_height = height - insets.vsum() as f64;
        if !(inner_width > 0.0 && inner_height > 0.0) || !inner_width.is_finite() || !inner_height.is_finite() {
            return Err(ChartError::InvalidDimensions { width, height });
        }

        let pool = data.flatten();
        let x_domain = date_extent(&pool).ok_or(ChartError::EmptyDataset)?;
        let y_max = max_total(&pool).ok_or(ChartError::EmptyDataset)?;

        let epsilon = options.epsilon;
        Ok(Self {
            width,
            height,
            insets,
            inner_width,
            inner_height,
            epsilon,
            x_scale: TimeScale::new(x_domain, (0.0, inner_width)),
            y_scale: LinearScale::new((epsilon, y_max), (inner_height, 0.0)),
        })
    }

    pub fn line_generator(&self) -> LineGenerator {
        LineGenerator::new(self.x_scale, self.y_scale, self.epsilon)
    }

    pub fn x_domain(&self) -> (NaiveDate, NaiveDate) { self.x_scale.domain() }

    pub fn y_domain(&self) -> (f64, f64) { self.y_scale.domain() }

    /// Upper bound of the time domain, i.e. the latest date in the data.
    pub fn most_recent_date(&self) -> NaiveDate { self.x_scale.domain().1 }

    /// SVG-root coordinates -> inner plotting-area coordinates.
    pub fn to_inner(&self, x: f64, y: f64) -> Point {
        Point::new(x - self.insets.left as f64, y - self.insets.top as f64)
    }
}

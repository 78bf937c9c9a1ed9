// File: crates/covid-chart-core/src/options.rs
// Summary: Chart options (margins, constants, text, theme) with defaults matching the published chart.

use crate::theme::Theme;
use crate::tooltip::TOOLTIP_OFFSET;
use crate::types::{Insets, Point, EPSILON};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub insets: Insets,
    /// Floor of the y-domain; also added to every plotted total.
    pub epsilon: f64,
    pub marker_radius: f64,
    pub tooltip_offset: Point,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Approximate tick counts per axis.
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub theme: Theme,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            epsilon: EPSILON,
            marker_radius: 10.0,
            tooltip_offset: TOOLTIP_OFFSET,
            title: "Global Covid Deaths Over Time by Country".to_string(),
            x_label: "Time".to_string(),
            y_label: "Cumulative Deaths".to_string(),
            x_ticks: 10,
            y_ticks: 10,
            theme: Theme::default(),
        }
    }
}

// File: crates/covid-chart-core/src/tooltip.rs
// Summary: Tooltip label for the hovered point plus the number/date formatters it uses.

use chrono::NaiveDate;

use crate::series::TimeSeriesPoint;
use crate::types::Point;

/// Label offset from the anchored point (up and to the left).
pub const TOOLTIP_OFFSET: Point = Point::new(-10.0, -10.0);

/// Thousands-grouped number, e.g. `1234567 -> "1,234,567"`. Fractions keep
/// their shortest round-trip digits.
pub fn format_comma(v: f64) -> String {
    if !v.is_finite() { return v.to_string(); }
    let raw = format!("{}", v.abs());
    let (int_part, frac) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut out = String::with_capacity(raw.len() + raw.len() / 3 + 1);
    if v < 0.0 { out.push('-'); }
    let n = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    if let Some(f) = frac {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Short date, e.g. `Jan 05, 21`.
pub fn format_date(d: NaiveDate) -> String {
    d.format("%b %d, %y").to_string()
}

/// Singular only for exactly one death; zero and fractions read as plural.
pub fn death_unit(total: f64) -> &'static str {
    if total == 1.0 { "death" } else { "deaths" }
}

/// Which of the two stacked labels this is. The stroke copy sits underneath
/// as a contrasting outline; the fill copy is drawn on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipStyle {
    Stroke,
    Fill,
}

impl TooltipStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            TooltipStyle::Stroke => "tooltip-stroke",
            TooltipStyle::Fill => "tooltip",
        }
    }
}

/// One rendered tooltip text, end-anchored at `offset` relative to the point.
#[derive(Clone, Debug)]
pub struct TooltipLabel {
    pub point: TimeSeriesPoint,
    pub style: TooltipStyle,
    pub offset: Point,
    pub format_comma: fn(f64) -> String,
    pub format_date: fn(NaiveDate) -> String,
}

impl TooltipLabel {
    pub fn new(point: TimeSeriesPoint, style: TooltipStyle) -> Self {
        Self { point, style, offset: TOOLTIP_OFFSET, format_comma, format_date }
    }

    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_formatters(mut self, comma: fn(f64) -> String, date: fn(NaiveDate) -> String) -> Self {
        self.format_comma = comma;
        self.format_date = date;
        self
    }

    /// Outline label followed by fill label, in paint order.
    pub fn pair(point: &TimeSeriesPoint, offset: Point) -> [TooltipLabel; 2] {
        [
            TooltipLabel::new(point.clone(), TooltipStyle::Stroke).with_offset(offset),
            TooltipLabel::new(point.clone(), TooltipStyle::Fill).with_offset(offset),
        ]
    }

    pub fn class_name(&self) -> &'static str { self.style.class_name() }

    pub fn text(&self) -> String {
        let p = &self.point;
        format!(
            "{}: {} {} as of {}",
            p.country_name,
            (self.format_comma)(p.death_total),
            death_unit(p.death_total),
            (self.format_date)(p.date),
        )
    }
}

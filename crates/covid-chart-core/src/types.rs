// File: crates/covid-chart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, epsilon floor).

/// Default chart width in pixels.
pub const WIDTH: f64 = 960.0;
/// Default chart height in pixels.
pub const HEIGHT: f64 = 500.0;

/// Small positive floor for the value axis; the y-domain always starts here and
/// every plotted total is shifted up by it.
pub const EPSILON: f64 = 1.0;

/// Screen margins around the plotting area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(100, 40, 50, 80)
    }
}

/// Plain 2D point in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

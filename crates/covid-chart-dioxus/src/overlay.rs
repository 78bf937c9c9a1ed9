// File: crates/covid-chart-dioxus/src/overlay.rs
// Summary: Pointer overlay placement and active-point transitions, independent of Dioxus.

use covid_chart_core::types::Insets;
use covid_chart_core::{ChartView, Point, TimeSeriesPoint};
use tracing::debug;

/// Pointer input seen by the overlay. Positions are relative to the overlay,
/// which covers exactly the inner plotting area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Leave,
}

/// Offset (the margins) and size of the overlay; `None` when the chart renders a placeholder.
pub fn overlay_bounds(view: &ChartView) -> Option<(Insets, f64, f64)> {
    view.layout().ok().map(|l| (l.insets, l.inner_width, l.inner_height))
}

/// Value the active-point signal should take after `event`, or `None` to leave it untouched.
pub fn next_active(
    view: &ChartView,
    current: Option<&TimeSeriesPoint>,
    event: PointerEvent,
) -> Option<Option<TimeSeriesPoint>> {
    let hit = match event {
        PointerEvent::Move { x, y } => view
            .hover_index()
            .and_then(|index| index.nearest(Point::new(x, y)).cloned()),
        PointerEvent::Leave => None,
    };
    if current == hit.as_ref() {
        return None;
    }
    debug!(country = ?hit.as_ref().map(|p| p.country_name.as_str()), ?event, "overlay hover");
    Some(hit)
}

// File: crates/covid-chart-core/src/axis.rs
// Summary: Axis tick groups (grid line + label) for the time and value scales.

use crate::grid::format_time_tick;
use crate::scale::{LinearScale, Scale, TimeScale};
use crate::scene::{Baseline, SceneNode, TextAnchor, TextNode, Transform};
use crate::tooltip::format_comma;

/// Label gap between the plot edge and tick text, in pixels.
const TICK_PADDING: f64 = 3.0;

/// Bottom axis: one vertical grid line per tick spanning the plot, label underneath.
pub fn x_axis(scale: &TimeScale, inner_height: f64, count: usize) -> Vec<SceneNode> {
    scale
        .ticks(count)
        .into_iter()
        .map(|tick| {
            let x = scale.map(tick);
            SceneNode::group(
                Some("tick"),
                Some(Transform::translate(x, 0.0)),
                vec![
                    SceneNode::Line { x1: 0.0, y1: 0.0, x2: 0.0, y2: inner_height },
                    SceneNode::Text(
                        TextNode::new(format_time_tick(tick))
                            .at(0.0, inner_height + TICK_PADDING)
                            .anchor(TextAnchor::Middle)
                            .baseline(Baseline::Em(0.71)),
                    ),
                ],
            )
        })
        .collect()
}

/// Left axis: one horizontal grid line per tick spanning the plot, label to the left.
pub fn y_axis(scale: &LinearScale, inner_width: f64, count: usize) -> Vec<SceneNode> {
    scale
        .ticks(count)
        .into_iter()
        .map(|tick| {
            let y = scale.map(tick);
            SceneNode::group(
                Some("tick"),
                Some(Transform::translate(0.0, y)),
                vec![
                    SceneNode::Line { x1: 0.0, y1: 0.0, x2: inner_width, y2: 0.0 },
                    SceneNode::Text(
                        TextNode::new(format_comma(tick))
                            .at(-TICK_PADDING, 0.0)
                            .anchor(TextAnchor::End)
                            .baseline(Baseline::Em(0.32)),
                    ),
                ],
            )
        })
        .collect()
}

// File: crates/covid-chart-core/src/view.rs
// Summary: ChartView state (data, size, active hover point) and its scene render pass.

use std::path::Path;

use tracing::{debug, warn};

use crate::axis::{x_axis, y_axis};
use crate::error::{ChartError, Result};
use crate::geometry::polyline_d;
use crate::hover::HoverIndex;
use crate::layout::ChartLayout;
use crate::options::ChartOptions;
use crate::raster;
use crate::scene::{Baseline, Scene, SceneNode, TextAnchor, TextNode, Transform};
use crate::series::{Dataset, TimeSeriesPoint};
use crate::svg;
use crate::tooltip::TooltipLabel;

pub const PLACEHOLDER_TEXT: &str = "No data to display";

/// The chart plus its only piece of UI state, the hovered point.
///
/// Derived values (layout, hover index) are rebuilt whenever data, size or options
/// change. The active point is only changed through the hover methods.
#[derive(Debug)]
pub struct ChartView {
    data: Dataset,
    width: f64,
    height: f64,
    options: ChartOptions,
    layout: Result<ChartLayout>,
    hover: Option<HoverIndex>,
    active: Option<TimeSeriesPoint>,
}

impl ChartView {
    pub fn new(data: Dataset, width: f64, height: f64) -> Self {
        Self::with_options(data, width, height, ChartOptions::default())
    }

    pub fn with_options(data: Dataset, width: f64, height: f64, options: ChartOptions) -> Self {
        let mut view = Self {
            data,
            width,
            height,
            options,
            layout: Err(ChartError::EmptyDataset),
            hover: None,
            active: None,
        };
        view.recompute();
        view
    }

    fn recompute(&mut self) {
        self.layout = ChartLayout::compute(&self.data, self.width, self.height, &self.options);
        self.hover = self.layout.as_ref().ok().map(|l| HoverIndex::from_layout(&self.data, l));
        let stale = self
            .active
            .as_ref()
            .is_some_and(|p| self.data.find_country(&p.country_name).is_none());
        if stale {
            debug!("active country no longer in dataset; clearing hover");
            self.active = None;
        }
    }

    pub fn set_data(&mut self, data: Dataset) {
        self.data = data;
        self.recompute();
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.recompute();
    }

    pub fn set_options(&mut self, options: ChartOptions) {
        self.options = options;
        self.recompute();
    }

    pub fn data(&self) -> &Dataset { &self.data }

    pub fn size(&self) -> (f64, f64) { (self.width, self.height) }

    pub fn options(&self) -> &ChartOptions { &self.options }

    pub fn layout(&self) -> std::result::Result<&ChartLayout, &ChartError> { self.layout.as_ref() }

    pub fn hover_index(&self) -> Option<&HoverIndex> { self.hover.as_ref() }

    pub fn active_point(&self) -> Option<&TimeSeriesPoint> { self.active.as_ref() }

    /// Hover callback: `Some` activates a point, `None` clears.
    /// Points naming a country outside the dataset are ignored.
    /// Returns whether the active point changed.
    pub fn handle_hover(&mut self, point: Option<TimeSeriesPoint>) -> bool {
        if let Some(p) = &point {
            if self.data.find_country(&p.country_name).is_none() {
                debug!(country = %p.country_name, "hover on unknown country ignored");
                return false;
            }
        }
        if self.active == point { return false; }
        debug!(country = ?point.as_ref().map(|p| p.country_name.as_str()), "active point changed");
        self.active = point;
        true
    }

    pub fn clear_hover(&mut self) -> bool { self.handle_hover(None) }

    /// Pointer move in SVG-root coordinates: activates the nearest point, or clears
    /// when the pointer is outside the plotting area.
    pub fn hover_at(&mut self, x: f64, y: f64) -> bool {
        let hit = match (&self.layout, &self.hover) {
            (Ok(layout), Some(index)) => index.nearest(layout.to_inner(x, y)).cloned(),
            _ => None,
        };
        self.handle_hover(hit)
    }

    /// Build the scene for the current state.
    pub fn render(&self) -> Scene {
        let layout = match &self.layout {
            Ok(layout) => layout,
            Err(err) => {
                warn!(error = %err, "rendering placeholder chart");
                return self.placeholder();
            }
        };
        let opts = &self.options;
        let line = layout.line_generator();
        let (iw, ih) = (layout.inner_width, layout.inner_height);

        let mut inner = Vec::with_capacity(self.data.len() + 8);
        inner.extend(x_axis(&layout.x_scale, ih, opts.x_ticks));
        inner.extend(y_axis(&layout.y_scale, iw, opts.y_ticks));

        for series in &self.data.series {
            let points = line.points(series);
            let d = polyline_d(&points).unwrap_or_default();
            inner.push(SceneNode::Path { class: "marker-line", d, points });
        }

        inner.push(SceneNode::Text(TextNode::new(opts.title.clone()).class("title")));
        inner.push(SceneNode::Text(
            TextNode::new(opts.y_label.clone())
                .class("axis-label")
                .anchor(TextAnchor::Middle)
                .transform(Transform::translate(-40.0, ih / 2.0).rotated(-90.0)),
        ));
        inner.push(SceneNode::Text(
            TextNode::new(opts.x_label.clone())
                .class("axis-label")
                .anchor(TextAnchor::Middle)
                .baseline(Baseline::Hanging)
                .transform(Transform::translate(iw / 2.0, ih + 40.0)),
        ));

        if let Some(active) = &self.active {
            if let Some(series) = self.data.find_country(&active.country_name) {
                let points = line.points(series);
                let d = polyline_d(&points).unwrap_or_default();
                inner.push(SceneNode::Path { class: "marker-line active", d, points });

                let at = line.position(active);
                let [stroke, fill] = TooltipLabel::pair(active, opts.tooltip_offset);
                inner.push(SceneNode::group(
                    Some("active-point"),
                    Some(Transform::translate(at.x, at.y)),
                    vec![
                        SceneNode::Circle { cx: 0.0, cy: 0.0, r: opts.marker_radius },
                        SceneNode::Tooltip(stroke),
                        SceneNode::Tooltip(fill),
                    ],
                ));
            }
        }

        let mut scene = Scene::new(self.width, self.height);
        scene.push(SceneNode::group(
            None,
            Some(Transform::translate(layout.insets.left as f64, layout.insets.top as f64)),
            inner,
        ));
        scene
    }

    /// Title and a centred notice; no paths, no hover decorations.
    fn placeholder(&self) -> Scene {
        let insets = self.options.insets;
        let mut scene = Scene::new(self.width, self.height);
        scene.push(SceneNode::group(
            None,
            Some(Transform::translate(insets.left as f64, insets.top as f64)),
            vec![SceneNode::Text(TextNode::new(self.options.title.clone()).class("title"))],
        ));
        scene.push(SceneNode::Text(
            TextNode::new(PLACEHOLDER_TEXT)
                .class("placeholder")
                .at(self.width / 2.0, self.height / 2.0)
                .anchor(TextAnchor::Middle),
        ));
        scene
    }

    /// Standalone SVG document for the current state.
    pub fn to_svg(&self) -> String {
        svg::to_svg(&self.render(), &self.options.theme)
    }

    pub fn render_png_bytes(&self) -> Result<Vec<u8>> {
        raster::render_png_bytes(&self.render(), &self.options.theme)
    }

    pub fn render_png(&self, output_png_path: impl AsRef<Path>) -> Result<()> {
        raster::render_png(&self.render(), &self.options.theme, output_png_path)
    }
}

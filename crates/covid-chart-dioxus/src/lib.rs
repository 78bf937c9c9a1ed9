// File: crates/covid-chart-dioxus/src/lib.rs
// Summary: Dioxus host for the deaths chart: ChartView and TooltipLabel components (desktop only).
// Notes:
// - This crate keeps UI deps behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - Components walk the core scene tree and emit SVG elements. The hovered point
//   lives in a signal; layout and hover index are rebuilt from props each render.

pub mod overlay;
pub mod sample;

pub use overlay::{next_active, overlay_bounds, PointerEvent};
pub use sample::sample_dataset;

#[cfg(feature = "desktop")]
pub mod ui {
    use std::rc::Rc;

    use chrono::NaiveDate;
    use covid_chart_core as chart;
    use chart::geometry::fmt_coord;
    use chart::scene::{Baseline, SceneNode, TextAnchor, TextNode};
    use chart::svg::transform_attr;
    use chart::tooltip::TOOLTIP_OFFSET;
    use chart::types::{HEIGHT, WIDTH};
    use chart::{ChartOptions, Dataset, Point, TimeSeriesPoint, TooltipStyle};
    use dioxus::prelude::*;

    use crate::overlay::{next_active, overlay_bounds, PointerEvent};

    #[derive(Props, Clone, PartialEq)]
    pub struct ChartViewProps {
        pub data: Dataset,
        #[props(default = WIDTH)]
        pub width: f64,
        #[props(default = HEIGHT)]
        pub height: f64,
        #[props(default)]
        pub options: ChartOptions,
    }

    /// Deaths-by-country line chart with a pointer overlay over the plotting area.
    ///
    /// Moving the pointer activates the nearest point (its country's line is
    /// highlighted, a marker and tooltip follow it); leaving the overlay clears it.
    #[component]
    pub fn ChartView(props: ChartViewProps) -> Element {
        let mut active = use_signal(|| Option::<TimeSeriesPoint>::None);

        let mut model = chart::ChartView::with_options(props.data.clone(), props.width, props.height, props.options.clone());
        // Ignored by the model when the country is gone after a data change.
        model.handle_hover(active.read().clone());
        let model = Rc::new(model);

        let scene = model.render();
        let css = model.options().theme.stylesheet();
        let overlay = overlay_bounds(&model);
        let (w, h) = (fmt_coord(props.width), fmt_coord(props.height));
        let view_box = format!("0 0 {w} {h}");

        // The peek guard must be dropped before the signal is written.
        let mut apply = {
            let model = Rc::clone(&model);
            move |event: PointerEvent| {
                let next = next_active(&model, active.peek().as_ref(), event);
                if let Some(next) = next {
                    active.set(next);
                }
            }
        };
        let on_move = move |evt: MouseEvent| {
            let at = evt.element_coordinates();
            apply(PointerEvent::Move { x: at.x, y: at.y });
        };
        let on_leave = move |_: MouseEvent| apply(PointerEvent::Leave);

        rsx! {
            div {
                style: "position:relative; width:{w}px; height:{h}px;",
                svg {
                    "xmlns": "http://www.w3.org/2000/svg",
                    width: w.clone(),
                    height: h.clone(),
                    "viewBox": view_box,
                    style { "{css}" }
                    rect { class: "background", width: "100%", height: "100%" }
                    for node in scene.root.iter() {
                        {render_node(node)}
                    }
                }
                if let Some((insets, iw, ih)) = overlay {
                    div {
                        class: "overlay",
                        style: "position:absolute; left:{insets.left}px; top:{insets.top}px; width:{iw}px; height:{ih}px; background:transparent;",
                        onmousemove: on_move,
                        onmouseleave: on_leave,
                    }
                }
            }
        }
    }

    fn render_node(node: &SceneNode) -> Element {
        match node {
            SceneNode::Group { class, transform, children } => {
                let transform = transform.as_ref().map(transform_attr);
                rsx! {
                    g { class: *class, transform: transform,
                        for child in children.iter() {
                            {render_node(child)}
                        }
                    }
                }
            }
            SceneNode::Path { class, d, .. } => rsx! { path { class: *class, d: d.clone() } },
            SceneNode::Line { x1, y1, x2, y2 } => rsx! {
                line { x1: fmt_coord(*x1), y1: fmt_coord(*y1), x2: fmt_coord(*x2), y2: fmt_coord(*y2) }
            },
            SceneNode::Circle { cx, cy, r } => rsx! {
                circle { cx: fmt_coord(*cx), cy: fmt_coord(*cy), r: fmt_coord(*r) }
            },
            SceneNode::Text(t) => render_text(t),
            SceneNode::Tooltip(label) => rsx! {
                TooltipLabel {
                    active_row: label.point.clone(),
                    format_comma: label.format_comma,
                    format_date: label.format_date,
                    class_name: label.class_name(),
                    offset: label.offset,
                }
            },
        }
    }

    fn render_text(t: &TextNode) -> Element {
        let dy = match t.baseline {
            Baseline::Em(em) => Some(format!("{em}em")),
            _ => None,
        };
        let hanging = matches!(t.baseline, Baseline::Hanging).then_some("hanging");
        let anchor = (t.anchor != TextAnchor::Start).then(|| t.anchor.as_str());
        let transform = t.transform.as_ref().map(transform_attr);
        rsx! {
            text {
                class: t.class,
                x: fmt_coord(t.x),
                y: fmt_coord(t.y),
                "dy": dy,
                "alignment-baseline": hanging,
                "text-anchor": anchor,
                transform: transform,
                "{t.content}"
            }
        }
    }

    #[derive(Props, Clone)]
    pub struct TooltipLabelProps {
        pub active_row: TimeSeriesPoint,
        #[props(default = chart::format_comma)]
        pub format_comma: fn(f64) -> String,
        #[props(default = chart::format_date)]
        pub format_date: fn(NaiveDate) -> String,
        /// `tooltip` for the fill copy, `tooltip-stroke` for the outline underneath.
        pub class_name: &'static str,
        #[props(default = TOOLTIP_OFFSET)]
        pub offset: Point,
    }

    // Formatter pointers are left out of the comparison.
    impl PartialEq for TooltipLabelProps {
        fn eq(&self, other: &Self) -> bool {
            self.active_row == other.active_row && self.class_name == other.class_name && self.offset == other.offset
        }
    }

    /// One end-anchored line of text describing the active row.
    #[component]
    pub fn TooltipLabel(props: TooltipLabelProps) -> Element {
        let content = chart::TooltipLabel::new(props.active_row.clone(), TooltipStyle::Fill)
            .with_formatters(props.format_comma, props.format_date)
            .text();
        rsx! {
            text {
                class: props.class_name,
                x: fmt_coord(props.offset.x),
                y: fmt_coord(props.offset.y),
                "text-anchor": "end",
                "{content}"
            }
        }
    }

    /// Launch a desktop window showing the built-in sample data.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            let data = use_hook(crate::sample_dataset);
            rsx! { ChartView { data, width: WIDTH, height: HEIGHT, options: ChartOptions::default() } }
        }

        let cfg = dioxus_desktop::Config::new()
            .with_custom_head("<style>html,body{margin:0;font-family:sans-serif}</style>".to_string());
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals)
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("covid-chart-dioxus built without `desktop` feature; enable features to run UI demo")
}

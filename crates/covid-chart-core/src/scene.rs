// File: crates/covid-chart-core/src/scene.rs
// Summary: Renderer-agnostic scene tree (groups, paths, lines, circles, text, tooltips).
// Notes:
// - Node kinds mirror the SVG elements the chart needs; the SVG writer, the Skia
//   raster and the Dioxus host each walk the same tree.

use crate::tooltip::TooltipLabel;
use crate::types::Point;

/// `translate(x,y)` optionally followed by `rotate(deg)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub tx: f64,
    pub ty: f64,
    pub rotate_deg: f64,
}

impl Transform {
    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self { tx, ty, rotate_deg: 0.0 }
    }

    pub const fn rotated(mut self, deg: f64) -> Self {
        self.rotate_deg = deg;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Vertical placement relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Baseline {
    /// Alphabetic baseline at `y` (SVG default).
    Alphabetic,
    /// Top of the glyphs at `y` (`alignment-baseline: hanging`).
    Hanging,
    /// Shift by a fraction of the font size (`dy="0.71em"` etc).
    Em(f64),
}

#[derive(Clone, Debug)]
pub struct TextNode {
    pub class: Option<&'static str>,
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
    pub baseline: Baseline,
    pub transform: Option<Transform>,
    pub content: String,
}

impl TextNode {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            class: None,
            x: 0.0,
            y: 0.0,
            anchor: TextAnchor::Start,
            baseline: Baseline::Alphabetic,
            transform: None,
            content: content.into(),
        }
    }

    pub fn class(mut self, class: &'static str) -> Self { self.class = Some(class); self }

    pub fn at(mut self, x: f64, y: f64) -> Self { self.x = x; self.y = y; self }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self { self.anchor = anchor; self }

    pub fn baseline(mut self, baseline: Baseline) -> Self { self.baseline = baseline; self }

    pub fn transform(mut self, t: Transform) -> Self { self.transform = Some(t); self }
}

#[derive(Clone, Debug)]
pub enum SceneNode {
    Group {
        class: Option<&'static str>,
        transform: Option<Transform>,
        children: Vec<SceneNode>,
    },
    /// Polyline; `d` is the SVG path data for `points`.
    Path {
        class: &'static str,
        d: String,
        points: Vec<Point>,
    },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
    Text(TextNode),
    Tooltip(TooltipLabel),
}

impl SceneNode {
    pub fn group(class: Option<&'static str>, transform: Option<Transform>, children: Vec<SceneNode>) -> Self {
        SceneNode::Group { class, transform, children }
    }

    fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a SceneNode)) {
        f(self);
        if let SceneNode::Group { children, .. } = self {
            for c in children { c.walk(f); }
        }
    }
}

/// Root of a rendered chart: pixel size plus top-level nodes in paint order.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub root: Vec<SceneNode>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, root: Vec::new() }
    }

    pub fn push(&mut self, node: SceneNode) { self.root.push(node); }

    /// Depth-first visit of every node in paint order.
    pub fn walk<'a>(&'a self, mut f: impl FnMut(&'a SceneNode)) {
        for n in &self.root { n.walk(&mut f); }
    }

    /// `(class, d)` of every path, in paint order.
    pub fn paths(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        self.walk(|n| if let SceneNode::Path { class, d, .. } = n { out.push((*class, d.as_str())); });
        out
    }

    pub fn circles(&self) -> usize {
        let mut count = 0;
        self.walk(|n| if matches!(n, SceneNode::Circle { .. }) { count += 1; });
        count
    }

    pub fn tooltips(&self) -> Vec<&TooltipLabel> {
        let mut out = Vec::new();
        self.walk(|n| if let SceneNode::Tooltip(label) = n { out.push(label); });
        out
    }

    /// Plain text nodes (not tooltips), in paint order.
    pub fn texts(&self) -> Vec<&TextNode> {
        let mut out = Vec::new();
        self.walk(|n| if let SceneNode::Text(t) = n { out.push(t); });
        out
    }
}

// File: crates/covid-chart-core/src/svg.rs
// Summary: Serialize a scene to a standalone SVG document with an embedded theme stylesheet.

use std::fmt::Write as _;

use crate::geometry::fmt_coord;
use crate::scene::{Baseline, Scene, SceneNode, TextAnchor, TextNode, Transform};
use crate::theme::Theme;
use crate::tooltip::TooltipLabel;

/// Escape text content and attribute values.
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// `translate(x,y)` plus `rotate(deg)` when rotated.
pub fn transform_attr(t: &Transform) -> String {
    let mut s = format!("translate({},{})", fmt_coord(t.tx), fmt_coord(t.ty));
    if t.rotate_deg != 0.0 {
        let _ = write!(s, " rotate({})", fmt_coord(t.rotate_deg));
    }
    s
}

pub fn to_svg(scene: &Scene, theme: &Theme) -> String {
    let w = fmt_coord(scene.width);
    let h = fmt_coord(scene.height);
    let mut out = String::with_capacity(4096);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = write!(out, "<style>{}</style>", theme.stylesheet());
    out.push_str(r#"<rect class="background" width="100%" height="100%"/>"#);
    for node in &scene.root {
        write_node(&mut out, node);
    }
    out.push_str("</svg>");
    out
}

fn write_node(out: &mut String, node: &SceneNode) {
    match node {
        SceneNode::Group { class, transform, children } => {
            out.push_str("<g");
            if let Some(c) = class { let _ = write!(out, r#" class="{c}""#); }
            if let Some(t) = transform { let _ = write!(out, r#" transform="{}""#, transform_attr(t)); }
            out.push('>');
            for c in children { write_node(out, c); }
            out.push_str("</g>");
        }
        SceneNode::Path { class, d, .. } => {
            let _ = write!(out, r#"<path class="{class}" d="{d}"/>"#);
        }
        SceneNode::Line { x1, y1, x2, y2 } => {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                fmt_coord(*x1),
                fmt_coord(*y1),
                fmt_coord(*x2),
                fmt_coord(*y2)
            );
        }
        SceneNode::Circle { cx, cy, r } => {
            let _ = write!(out, r#"<circle cx="{}" cy="{}" r="{}"/>"#, fmt_coord(*cx), fmt_coord(*cy), fmt_coord(*r));
        }
        SceneNode::Text(t) => write_text(out, t),
        SceneNode::Tooltip(label) => write_tooltip(out, label),
    }
}

fn write_text(out: &mut String, t: &TextNode) {
    out.push_str("<text");
    if let Some(c) = t.class { let _ = write!(out, r#" class="{c}""#); }
    if t.x != 0.0 { let _ = write!(out, r#" x="{}""#, fmt_coord(t.x)); }
    if t.y != 0.0 { let _ = write!(out, r#" y="{}""#, fmt_coord(t.y)); }
    match t.baseline {
        Baseline::Alphabetic => {}
        Baseline::Hanging => out.push_str(r#" alignment-baseline="hanging""#),
        Baseline::Em(em) => { let _ = write!(out, r#" dy="{em}em""#); }
    }
    if t.anchor != TextAnchor::Start { let _ = write!(out, r#" text-anchor="{}""#, t.anchor.as_str()); }
    if let Some(tr) = &t.transform { let _ = write!(out, r#" transform="{}""#, transform_attr(tr)); }
    let _ = write!(out, ">{}</text>", escape_xml(&t.content));
}

fn write_tooltip(out: &mut String, label: &TooltipLabel) {
    let _ = write!(
        out,
        r#"<text class="{}" x="{}" y="{}" text-anchor="end">{}</text>"#,
        label.class_name(),
        fmt_coord(label.offset.x),
        fmt_coord(label.offset.y),
        escape_xml(&label.text())
    );
}

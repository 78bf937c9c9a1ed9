// File: crates/covid-chart-core/src/raster.rs
// Summary: Headless PNG rendering of a scene using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::scene::{Baseline, Scene, SceneNode, TextAnchor, TextNode, Transform};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::tooltip::{TooltipLabel, TooltipStyle};

const TITLE_SIZE: f32 = 24.0;
const AXIS_LABEL_SIZE: f32 = 18.0;
const TICK_SIZE: f32 = 11.0;
const TOOLTIP_SIZE: f32 = 14.4;
const PLACEHOLDER_SIZE: f32 = 16.0;

/// Render the scene into PNG bytes.
pub fn render_png_bytes(scene: &Scene, theme: &Theme) -> Result<Vec<u8>> {
    let w = scene.width.round().max(1.0) as i32;
    let h = scene.height.round().max(1.0) as i32;
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or(ChartError::Raster("failed to create raster surface"))?;
    let canvas = surface.canvas();

    // Background
    canvas.clear(theme.background);

    let shaper = TextShaper::new();
    for node in &scene.root {
        draw_node(canvas, node, theme, &shaper);
    }

    // Snapshot and encode
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::Raster("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the scene to a PNG at `output_png_path`, creating parent directories.
pub fn render_png(scene: &Scene, theme: &Theme, output_png_path: impl AsRef<Path>) -> Result<()> {
    let bytes = render_png_bytes(scene, theme)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn with_transform(canvas: &skia::Canvas, t: Option<&Transform>, draw: impl FnOnce(&skia::Canvas)) {
    match t {
        Some(t) => {
            canvas.save();
            canvas.translate((t.tx as f32, t.ty as f32));
            if t.rotate_deg != 0.0 {
                canvas.rotate(t.rotate_deg as f32, None);
            }
            draw(canvas);
            canvas.restore();
        }
        None => draw(canvas),
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_node(canvas: &skia::Canvas, node: &SceneNode, theme: &Theme, shaper: &TextShaper) {
    match node {
        SceneNode::Group { transform, children, .. } => {
            with_transform(canvas, transform.as_ref(), |c| {
                for child in children { draw_node(c, child, theme, shaper); }
            });
        }
        SceneNode::Path { class, points, .. } => {
            let Some((first, rest)) = points.split_first() else { return };
            let mut path = skia::Path::new();
            path.move_to((first.x as f32, first.y as f32));
            for p in rest {
                path.line_to((p.x as f32, p.y as f32));
            }
            let paint = if class.contains("active") {
                stroke_paint(theme.marker_line_active, 3.0)
            } else {
                stroke_paint(theme.marker_line, 1.5)
            };
            canvas.draw_path(&path, &paint);
        }
        SceneNode::Line { x1, y1, x2, y2 } => {
            let paint = stroke_paint(theme.tick_line, 1.0);
            canvas.draw_line((*x1 as f32, *y1 as f32), (*x2 as f32, *y2 as f32), &paint);
        }
        SceneNode::Circle { cx, cy, r } => {
            canvas.draw_circle((*cx as f32, *cy as f32), *r as f32, &fill_paint(theme.marker));
        }
        SceneNode::Text(t) => draw_text(canvas, t, theme, shaper),
        SceneNode::Tooltip(label) => draw_tooltip(canvas, label, theme, shaper),
    }
}

fn draw_text(canvas: &skia::Canvas, t: &TextNode, theme: &Theme, shaper: &TextShaper) {
    let (size, color) = match t.class {
        Some("title") => (TITLE_SIZE, theme.title),
        Some("axis-label") => (AXIS_LABEL_SIZE, theme.axis_label),
        Some("placeholder") => (PLACEHOLDER_SIZE, theme.axis_label),
        _ => (TICK_SIZE, theme.tick_label),
    };
    let paint = fill_paint(color);
    with_transform(canvas, t.transform.as_ref(), |c| {
        shaper.draw(c, &t.content, t.x as f32, t.y as f32, size, t.anchor, t.baseline, &paint);
    });
}

fn draw_tooltip(canvas: &skia::Canvas, label: &TooltipLabel, theme: &Theme, shaper: &TextShaper) {
    let paint = match label.style {
        TooltipStyle::Stroke => {
            let mut p = stroke_paint(theme.tooltip_stroke, 5.0);
            p.set_stroke_join(skia::paint::Join::Round);
            p
        }
        TooltipStyle::Fill => fill_paint(theme.tooltip_fill),
    };
    shaper.draw(
        canvas,
        &label.text(),
        label.offset.x as f32,
        label.offset.y as f32,
        TOOLTIP_SIZE,
        TextAnchor::End,
        Baseline::Alphabetic,
        &paint,
    );
}

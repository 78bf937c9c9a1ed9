// File: crates/covid-chart-core/src/text.rs
// Summary: Simple text measuring/drawing on Skia canvases with SVG-style anchors and baselines.

use skia_safe as skia;

use crate::scene::{Baseline, TextAnchor};

pub struct TextShaper {
    typeface: Option<skia::Typeface>,
}

impl TextShaper {
    pub fn new() -> Self {
        // Use the system manager's default family
        let typeface = skia::FontMgr::default().legacy_make_typeface(None, skia::FontStyle::normal());
        Self { typeface }
    }

    pub fn font(&self, size: f32) -> skia::Font {
        let mut font = skia::Font::default();
        if let Some(tf) = &self.typeface {
            font.set_typeface(tf.clone());
        }
        font.set_size(size.max(1.0));
        font
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let (advance, _bounds) = self.font(size).measure_str(text, None);
        advance
    }

    /// Draw `text` so that `(x, y)` behaves like an SVG `<text>` position.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        anchor: TextAnchor,
        baseline: Baseline,
        paint: &skia::Paint,
    ) {
        let font = self.font(size);
        let dx = match anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -self.measure_width(text, size) * 0.5,
            TextAnchor::End => -self.measure_width(text, size),
        };
        // Cap height approximated as 0.8em, as browsers do for hanging text.
        let dy = match baseline {
            Baseline::Alphabetic => 0.0,
            Baseline::Hanging => size * 0.8,
            Baseline::Em(em) => em as f32 * size,
        };
        canvas.draw_str(text, (x + dx, y + dy), &font, paint);
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

// File: crates/covid-chart-core/src/theme.rs
// Summary: Light/Dark theming for chart colors, shared by the SVG stylesheet and the Skia raster.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub title: skia::Color,
    pub axis_label: skia::Color,
    pub tick_line: skia::Color,
    pub tick_label: skia::Color,
    pub marker_line: skia::Color,
    pub marker_line_active: skia::Color,
    pub marker: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_stroke: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            title: skia::Color::from_argb(255, 35, 35, 40),
            axis_label: skia::Color::from_argb(255, 85, 85, 95),
            tick_line: skia::Color::from_argb(255, 226, 226, 232),
            tick_label: skia::Color::from_argb(255, 120, 120, 130),
            marker_line: skia::Color::from_argb(64, 120, 120, 130),
            marker_line_active: skia::Color::from_argb(255, 204, 40, 40),
            marker: skia::Color::from_argb(255, 204, 40, 40),
            tooltip_fill: skia::Color::from_argb(255, 20, 20, 25),
            tooltip_stroke: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            title: skia::Color::from_argb(255, 235, 235, 245),
            axis_label: skia::Color::from_argb(255, 200, 200, 210),
            tick_line: skia::Color::from_argb(255, 40, 40, 45),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            marker_line: skia::Color::from_argb(80, 160, 160, 175),
            marker_line_active: skia::Color::from_argb(255, 255, 230, 70),
            marker: skia::Color::from_argb(255, 255, 230, 70),
            tooltip_fill: skia::Color::from_argb(255, 245, 245, 250),
            tooltip_stroke: skia::Color::from_argb(255, 18, 18, 20),
        }
    }

    /// Embedded stylesheet for SVG output; class names match the scene's.
    pub fn stylesheet(&self) -> String {
        format!(
            ".background{{fill:{bg}}}\
             .title{{font-size:2em;fill:{title}}}\
             .axis-label{{font-size:1.5em;fill:{label}}}\
             .tick line{{stroke:{tick}}}\
             .tick text{{fill:{tick_label};font-size:0.8em}}\
             .marker-line{{fill:none;stroke:{line};stroke-width:1.5}}\
             .marker-line.active{{stroke:{active};stroke-width:3}}\
             circle{{fill:{marker}}}\
             .tooltip{{fill:{tip};font-size:1.2em}}\
             .tooltip-stroke{{fill:none;stroke:{tip_stroke};stroke-width:5;stroke-linejoin:round;font-size:1.2em}}",
            bg = css(self.background),
            title = css(self.title),
            label = css(self.axis_label),
            tick = css(self.tick_line),
            tick_label = css(self.tick_label),
            line = css(self.marker_line),
            active = css(self.marker_line_active),
            marker = css(self.marker),
            tip = css(self.tooltip_fill),
            tip_stroke = css(self.tooltip_stroke),
        )
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// CSS color literal: `#rrggbb` when opaque, `rgba(...)` otherwise.
pub fn css(c: skia::Color) -> String {
    if c.a() == 255 {
        format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
    } else {
        format!("rgba({},{},{},{:.3})", c.r(), c.g(), c.b(), c.a() as f32 / 255.0)
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

// File: crates/covid-chart-demo/src/main.rs
// Summary: Demo loads a JHU deaths CSV (or the bundled sample) and renders the chart to SVG and PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use covid_chart_core::types::{HEIGHT, WIDTH};
use covid_chart_core::{theme, ChartOptions, ChartView};
use covid_chart_demo::{load_jhu_csv, parse_jhu_csv, SAMPLE_CSV};
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl ThemeArg {
    fn name(self) -> &'static str {
        match self {
            ThemeArg::Light => "light",
            ThemeArg::Dark => "dark",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "covid-chart-demo")]
#[command(about = "Render cumulative Covid deaths by country to SVG and PNG.", long_about = None)]
struct Args {
    /// JHU deaths CSV in wide format; the bundled sample is used when omitted.
    csv: Option<PathBuf>,

    #[arg(long, default_value_t = WIDTH)]
    width: f64,

    #[arg(long, default_value_t = HEIGHT)]
    height: f64,

    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    theme: ThemeArg,

    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Activate this country's latest point before rendering.
    #[arg(long)]
    hover: Option<String>,
}

fn main() -> Result<()> {
    covid_chart_core::telemetry::init();
    let args = Args::parse();

    let data = match &args.csv {
        Some(path) => load_jhu_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => {
            info!("no CSV given; using bundled sample");
            parse_jhu_csv(SAMPLE_CSV.as_bytes()).context("parsing bundled sample")?
        }
    };
    info!(countries = data.len(), points = data.point_count(), "dataset ready");

    let options = ChartOptions { theme: theme::find(args.theme.name()), ..ChartOptions::default() };
    let mut view = ChartView::with_options(data, args.width, args.height, options);
    match view.layout() {
        Ok(layout) => info!(
            most_recent = %layout.most_recent_date(),
            max_total = layout.y_domain().1,
            "layout computed"
        ),
        Err(e) => warn!(error = %e, "chart will render as placeholder"),
    }

    if let Some(country) = &args.hover {
        let latest = view.data().find_country(country).and_then(|s| s.last()).cloned();
        match latest {
            Some(p) => {
                info!(country = %p.country_name, date = %p.date, total = p.death_total, "activating hover");
                view.handle_hover(Some(p));
            }
            None => warn!(country = %country, "unknown country; rendering without hover"),
        }
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output dir '{}'", args.out_dir.display()))?;

    let svg_path = args.out_dir.join("chart.svg");
    std::fs::write(&svg_path, view.to_svg()).with_context(|| format!("writing '{}'", svg_path.display()))?;
    info!("Wrote {}", svg_path.display());

    let png_path = args.out_dir.join("chart.png");
    view.render_png(&png_path).with_context(|| format!("writing '{}'", png_path.display()))?;
    info!("Wrote {}", png_path.display());

    Ok(())
}

// File: crates/covid-chart-demo/src/load.rs
// Summary: Load JHU-style wide deaths CSVs into a per-country Dataset.
// Notes:
// - Expected header: `Province/State, Country/Region, Lat, Long, m/d/yy...`.
// - Cells go through `TimeSeriesPoint::try_new`; rejected cells count as 0.
// - Provinces are summed per country per date; countries keep first-seen order.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use covid_chart_core::{Dataset, TimeSeriesPoint};
use tracing::{debug, info, warn};

/// Small bundled extract used when no CSV path is given.
pub const SAMPLE_CSV: &str = include_str!("../data/sample_deaths.csv");

pub fn load_jhu_csv(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_jhu_csv(file).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_jhu_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    debug!(columns = headers.len(), "read header row");

    let i_country = headers
        .iter()
        .position(|h| matches!(h.trim().to_lowercase().as_str(), "country/region" | "country_region"))
        .context("missing Country/Region column")?;
    let date_cols: Vec<(usize, NaiveDate)> = headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| parse_header_date(h).map(|d| (i, d)))
        .collect();
    if date_cols.is_empty() {
        anyhow::bail!("no m/d/yy date columns in header");
    }

    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, Vec<f64>> = HashMap::new();
    let mut skipped = 0usize;

    for rec in rdr.records() {
        let rec = rec?;
        let Some(country) = rec.get(i_country).map(str::trim).filter(|c| !c.is_empty()) else {
            skipped += 1;
            continue;
        };
        let sums = totals.entry(country.to_string()).or_insert_with(|| {
            order.push(country.to_string());
            vec![0.0; date_cols.len()]
        });
        for (slot, &(col, date)) in sums.iter_mut().zip(&date_cols) {
            let Some(raw) = rec.get(col).map(str::trim).filter(|s| !s.is_empty()) else { continue };
            let checked = raw
                .parse::<f64>()
                .map_err(|e| e.to_string())
                .and_then(|v| TimeSeriesPoint::try_new(date, country, v).map_err(|e| e.to_string()));
            match checked {
                Ok(point) => *slot += point.death_total,
                Err(reason) => warn!(country, column = col, %reason, "bad death total; counted as 0"),
            }
        }
    }

    let points = order.iter().flat_map(|name| {
        let sums = totals.remove(name).unwrap_or_default();
        date_cols
            .iter()
            .zip(sums)
            .map(move |(&(_, date), total)| TimeSeriesPoint::new(date, name.as_str(), total))
            .collect::<Vec<_>>()
    });
    let data = Dataset::from_points(points);

    info!(countries = data.len(), dates = date_cols.len(), skipped, "loaded deaths csv");
    Ok(data)
}

/// `3/1/20` style header; four-digit years are accepted too.
fn parse_header_date(h: &str) -> Option<NaiveDate> {
    let h = h.trim();
    NaiveDate::parse_from_str(h, "%m/%d/%y")
        .or_else(|_| NaiveDate::parse_from_str(h, "%m/%d/%Y"))
        .ok()
}

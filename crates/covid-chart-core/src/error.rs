// File: crates/covid-chart-core/src/error.rs
// Summary: Error type shared by layout, data validation and raster output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// No points at all, so neither scale has a domain.
    #[error("dataset has no points to plot")]
    EmptyDataset,
    /// Margins eat the whole surface.
    #[error("inner plotting area is empty for a {width}x{height} chart")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("invalid point for {country}: {reason}")]
    InvalidPoint { country: String, reason: &'static str },
    #[error("raster output failed: {0}")]
    Raster(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;

// File: crates/covid-chart-demo/src/lib.rs
// Summary: Demo support library; CSV loading lives here so it can be tested outside the binary.

pub mod load;

pub use load::{load_jhu_csv, parse_jhu_csv, SAMPLE_CSV};

// File: crates/covid-chart-core/src/telemetry.rs
// Summary: Log subscriber setup shared by the binaries (fmt output, `RUST_LOG` filter, default `info`).

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. A second call is a no-op.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

// File: crates/covid-chart-dioxus/src/bin/desktop_demo.rs
// Purpose: Minimal launcher for the Dioxus desktop ChartView demo.

#[cfg(feature = "desktop")]
fn main() {
    covid_chart_core::telemetry::init();
    tracing::info!("launching desktop chart demo");
    if let Err(e) = covid_chart_dioxus::ui::run_demo_ui() {
        tracing::error!("covid-chart-dioxus demo error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    covid_chart_core::telemetry::init();
    if let Err(e) = covid_chart_dioxus::run_demo_ui() {
        tracing::error!("{e}");
    }
}

// File: crates/covid-chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart model, hover logic and SVG/PNG output.

pub mod axis;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hover;
pub mod layout;
pub mod options;
pub mod raster;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;
pub mod view;

pub use error::{ChartError, Result};
pub use geometry::LineGenerator;
pub use hover::HoverIndex;
pub use layout::ChartLayout;
pub use options::ChartOptions;
pub use scale::{LinearScale, Scale, TimeScale};
pub use scene::{Scene, SceneNode};
pub use series::{CountryTimeseries, Dataset, TimeSeriesPoint};
pub use theme::Theme;
pub use tooltip::{death_unit, format_comma, format_date, TooltipLabel, TooltipStyle};
pub use types::{Insets, Point, EPSILON};
pub use view::ChartView;

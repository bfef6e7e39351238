//! groupchart-rs: a declarative charting core over grouped data.
//!
//! The crate splits into a data pipeline (`core`: capped aggregation,
//! stratification, squarified treemap layout, proximity lookup), a keyed
//! incremental renderer (`render`: reconciliation, transitions, draw
//! surfaces) and chart models tying the two together (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BarChartModel, ChartConfig, TreemapChartModel};
pub use error::{ChartError, ChartResult};

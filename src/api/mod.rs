pub mod bar_chart;
pub mod chart_config;
pub mod color;
pub mod guideline;
pub mod selection;
pub mod treemap_chart;
pub mod value_display;

pub use bar_chart::{BarChartModel, project_bar_rows};
pub use chart_config::ChartConfig;
pub use color::{DEFAULT_PALETTE, OrdinalColorScale};
pub use guideline::{GuidelineBehavior, GuidelineItem, GuidelineProbe, GuidelineWidget};
pub use selection::{FilterSet, HighlightState};
pub use treemap_chart::TreemapChartModel;
pub use value_display::{ValueDisplay, latest_bin};

use tracing::warn;

use crate::api::chart_config::ChartConfig;
use crate::api::color::OrdinalColorScale;
use crate::api::selection::{FilterSet, HighlightState};
use crate::core::cap::{MeanOthersGrouper, aggregate_capped};
use crate::core::record::{Record, by_value};
use crate::core::scale::BandScale;
use crate::error::ChartResult;
use crate::render::geometry::Geometry;
use crate::render::stage::{ReconcileSummary, RenderStage, TargetItem, VisualItem};
use crate::render::surface::DrawSurface;

/// Projects capped rows into horizontal bar geometry.
///
/// Rows stack top to bottom in input order; each bar grows rightward from
/// x = 0. With `normalized` the denominator is the row set's own total,
/// otherwise the maximum row value, so the widest bar spans the viewport.
pub fn project_bar_rows(rows: &[Record], config: &ChartConfig) -> ChartResult<Vec<TargetItem>> {
    config.validate()?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let height = config.viewport.height_px();
    let width = config.viewport.width_px();

    let step = height / rows.len() as f64;
    let padding_inner = if step > 0.0 {
        (config.row_gap_px / step).clamp(0.0, 0.95)
    } else {
        0.0
    };
    let keys: Vec<String> = rows.iter().map(|row| row.key.clone()).collect();
    let band = BandScale::new(keys, (0.0, height), padding_inner)?;

    let denominator = if config.normalized {
        rows.iter().map(|row| row.value.max(0.0)).sum::<f64>()
    } else {
        rows.iter().fold(0.0_f64, |acc, row| acc.max(row.value))
    };

    let bar_height = match config.fixed_bar_height_px {
        Some(fixed) => fixed.min(band.bandwidth()),
        None => band.bandwidth(),
    };

    let mut targets = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(y) = band.position(&row.key) else {
            continue;
        };
        let bar_width = if denominator > 0.0 && row.value.is_finite() {
            (row.value / denominator * width).max(0.0)
        } else {
            0.0
        };
        let geometry =
            Geometry::new(0.0, y, bar_width, bar_height).with_display_value(row.value);
        targets.push(TargetItem::new(row.key.clone(), geometry, row.clone()));
    }
    Ok(targets)
}

/// Row chart model: capped aggregation, ordinal colors, click-to-filter
/// selection, and keyed incremental rendering of the bars.
#[derive(Debug)]
pub struct BarChartModel {
    config: ChartConfig,
    filters: FilterSet,
    colors: OrdinalColorScale,
    stage: RenderStage,
}

impl BarChartModel {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            filters: FilterSet::new(),
            colors: OrdinalColorScale::default(),
            stage: RenderStage::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    #[must_use]
    pub fn items(&self) -> impl Iterator<Item = &VisualItem> {
        self.stage.items()
    }

    /// Aggregates, projects and reconciles one frame of bars at `now_ms`.
    pub fn redraw(
        &mut self,
        records: &[Record],
        now_ms: f64,
        surface: &mut dyn DrawSurface,
    ) -> ChartResult<ReconcileSummary> {
        let rows = aggregate_capped(records, by_value(), &self.config.cap, &MeanOthersGrouper);
        if rows.is_empty() && !records.is_empty() {
            warn!("all rows were folded away by the capping policy");
        }
        let targets = project_bar_rows(&rows, &self.config)?;
        Ok(self
            .stage
            .reconcile(&targets, now_ms, self.config.transition, surface))
    }

    /// Advances in-flight bar transitions to `now_ms`.
    pub fn advance(&mut self, now_ms: f64, surface: &mut dyn DrawSurface) {
        self.stage.advance(now_ms, surface);
    }

    /// Click handler: toggles the key in the filter set. Returns whether the
    /// key is selected afterwards.
    pub fn toggle_filter(&mut self, key: &str) -> bool {
        self.filters.toggle(key)
    }

    #[must_use]
    pub fn highlight_state(&self, key: &str) -> HighlightState {
        self.filters.highlight_for(key)
    }

    /// Stable key/color pairs for the current bars, in render order.
    pub fn legendables(&mut self) -> Vec<(String, String)> {
        let keys: Vec<String> = self.stage.items().map(|item| item.key.clone()).collect();
        keys.into_iter()
            .map(|key| {
                let color = self.colors.color_for(&key).to_owned();
                (key, color)
            })
            .collect()
    }
}

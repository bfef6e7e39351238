use tracing::debug;

use crate::api::chart_config::ChartConfig;
use crate::api::selection::{FilterSet, HighlightState};
use crate::core::cap::{MeanOthersGrouper, aggregate_capped};
use crate::core::hierarchy::Tree;
use crate::core::record::{Record, by_key};
use crate::core::treemap::TreemapLayout;
use crate::error::ChartResult;
use crate::render::geometry::Geometry;
use crate::render::stage::{ReconcileSummary, RenderStage, TargetItem, VisualItem};
use crate::render::surface::DrawSurface;

/// Treemap chart model: capped aggregation, stratification, squarified
/// layout, and keyed incremental rendering of the leaf cells.
///
/// When the aggregated total is not positive the chart enters an explicit
/// empty state and transitions every cell out rather than drawing a
/// degenerate layout.
#[derive(Debug)]
pub struct TreemapChartModel {
    config: ChartConfig,
    filters: FilterSet,
    stage: RenderStage,
    empty: bool,
}

impl TreemapChartModel {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            filters: FilterSet::new(),
            stage: RenderStage::new(),
            empty: true,
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

    /// True after a redraw whose aggregated total was not positive.
    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        self.empty
    }

    #[must_use]
    pub fn items(&self) -> impl Iterator<Item = &VisualItem> {
        self.stage.items()
    }

    /// Aggregates, stratifies, lays out and reconciles one frame at `now_ms`.
    ///
    /// `parent_of` resolves each record's parent key; `None` attaches the
    /// record directly under the root.
    pub fn redraw<F>(
        &mut self,
        records: &[Record],
        parent_of: F,
        now_ms: f64,
        surface: &mut dyn DrawSurface,
    ) -> ChartResult<ReconcileSummary>
    where
        F: Fn(&Record) -> Option<String>,
    {
        let rows = aggregate_capped(records, by_key(), &self.config.cap, &MeanOthersGrouper);
        let total: f64 = rows.iter().map(|row| row.value).sum();

        if !(total > 0.0) {
            debug!(total, "treemap entering empty state");
            self.empty = true;
            return Ok(self
                .stage
                .reconcile(&[], now_ms, self.config.transition, surface));
        }
        self.empty = false;

        let mut tree = Tree::stratify(&rows, parent_of)?;
        let layout = TreemapLayout::new(
            self.config.viewport.width_px(),
            self.config.viewport.height_px(),
            self.config.padding_px,
        );
        layout.layout(&mut tree);

        let mut targets = Vec::new();
        for id in tree.layout_leaves() {
            let node = tree.node(id);
            let Some(rect) = node.rect else {
                continue;
            };
            let geometry = Geometry::from_rect(rect).with_display_value(node.value);
            let record = node
                .record
                .clone()
                .unwrap_or_else(|| Record::new(node.key.clone(), node.value));
            targets.push(TargetItem::new(node.key.clone(), geometry, record));
        }

        Ok(self
            .stage
            .reconcile(&targets, now_ms, self.config.transition, surface))
    }

    /// Advances in-flight cell transitions to `now_ms`.
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
}

#[cfg(test)]
mod tests {
    use super::TreemapChartModel;
    use crate::api::chart_config::ChartConfig;
    use crate::core::record::Record;
    use crate::core::types::Viewport;
    use crate::render::surface::NullSurface;
    use crate::render::transition::TransitionBehavior;

    fn model() -> TreemapChartModel {
        let config = ChartConfig::new(Viewport::new(200, 100))
            .with_transition(TransitionBehavior::immediate())
            .with_padding_px(0.0);
        TreemapChartModel::new(config).expect("model")
    }

    #[test]
    fn leaves_tile_the_viewport() {
        let mut model = model();
        let mut surface = NullSurface::default();
        let records = vec![
            Record::new("a", 3.0),
            Record::new("b", 2.0),
            Record::new("c", 1.0),
        ];

        let summary = model
            .redraw(&records, |_| None, 0.0, &mut surface)
            .expect("redraw");
        assert_eq!(summary.entered.len(), 3);
        assert!(!model.is_empty_state());

        model.advance(0.0, &mut surface);
        let total_area: f64 = model
            .items()
            .map(|item| item.geometry.width * item.geometry.height)
            .sum();
        assert!((total_area - 200.0 * 100.0).abs() < 1e-6);
    }

    #[test]
    fn non_positive_total_enters_empty_state() {
        let mut model = model();
        let mut surface = NullSurface::default();

        model
            .redraw(&[Record::new("a", 2.0)], |_| None, 0.0, &mut surface)
            .expect("redraw");
        model.advance(0.0, &mut surface);
        assert_eq!(model.items().count(), 1);

        let summary = model
            .redraw(&[Record::new("a", 0.0)], |_| None, 100.0, &mut surface)
            .expect("redraw");
        assert!(model.is_empty_state());
        assert_eq!(summary.exited, vec!["a".to_owned()]);

        model.advance(100.0, &mut surface);
        assert_eq!(model.items().count(), 0);
    }

    #[test]
    fn grouped_records_nest_under_their_parents() {
        let mut model = model();
        let mut surface = NullSurface::default();
        let records = vec![
            Record::new("a", 3.0),
            Record::new("b", 2.0),
            Record::new("c", 5.0),
        ];

        model
            .redraw(
                &records,
                |record| match record.key.as_str() {
                    "a" | "b" => Some("left".to_owned()),
                    _ => Some("right".to_owned()),
                },
                0.0,
                &mut surface,
            )
            .expect("redraw");
        model.advance(0.0, &mut surface);

        // Only leaves render; the synthesized group nodes do not.
        let keys: Vec<&str> = model.items().map(|item| item.key.as_str()).collect();
        assert_eq!(keys.len(), 3);
        assert!(!keys.contains(&"left"));
    }
}

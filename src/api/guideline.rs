use serde::{Deserialize, Serialize};

use crate::api::selection::{FilterSet, HighlightState};
use crate::core::proximity::{ProximityIndex, ProximityItem};
use crate::core::scale::LinearScale;
use crate::error::ChartResult;

const LABEL_WIDTH: f64 = 40.0;

/// Settings of the attachable guideline widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuidelineBehavior {
    #[serde(default = "default_item_height")]
    pub item_height: f64,
    #[serde(default = "default_gap")]
    pub gap: f64,
    #[serde(default = "default_label_gap")]
    pub label_gap: f64,
    /// Pointer positions within this margin of the right edge flip labels to
    /// the left of the guideline.
    #[serde(default = "default_trailing_margin_px")]
    pub trailing_margin_px: f64,
    #[serde(default)]
    pub max_items: Option<usize>,
    #[serde(default = "default_highlight_selected")]
    pub highlight_selected: bool,
}

impl Default for GuidelineBehavior {
    fn default() -> Self {
        Self {
            item_height: default_item_height(),
            gap: default_gap(),
            label_gap: default_label_gap(),
            trailing_margin_px: default_trailing_margin_px(),
            max_items: None,
            highlight_selected: default_highlight_selected(),
        }
    }
}

impl GuidelineBehavior {
    #[must_use]
    pub fn with_item_height(mut self, item_height: f64) -> Self {
        self.item_height = item_height;
        self
    }

    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn with_label_gap(mut self, label_gap: f64) -> Self {
        self.label_gap = label_gap;
        self
    }

    #[must_use]
    pub fn with_trailing_margin_px(mut self, trailing_margin_px: f64) -> Self {
        self.trailing_margin_px = trailing_margin_px;
        self
    }

    #[must_use]
    pub fn with_max_items(mut self, max_items: Option<usize>) -> Self {
        self.max_items = max_items;
        self
    }

    #[must_use]
    pub fn with_highlight_selected(mut self, highlight_selected: bool) -> Self {
        self.highlight_selected = highlight_selected;
        self
    }

    /// Vertical advance per guideline item.
    #[must_use]
    pub fn item_slot_height(self) -> f64 {
        self.gap + self.item_height
    }
}

fn default_item_height() -> f64 {
    12.0
}

fn default_gap() -> f64 {
    5.0
}

fn default_label_gap() -> f64 {
    2.0
}

fn default_trailing_margin_px() -> f64 {
    40.0
}

fn default_highlight_selected() -> bool {
    true
}

/// One resolved guideline entry with its highlight classification.
#[derive(Debug, Clone, PartialEq)]
pub struct GuidelineItem {
    pub item: ProximityItem,
    pub highlight: HighlightState,
}

/// Result of probing the guideline at one pointer position.
#[derive(Debug, Clone, PartialEq)]
pub struct GuidelineProbe {
    pub domain_value: f64,
    pub line_x: f64,
    pub align_right: bool,
    pub items: Vec<GuidelineItem>,
}

/// Attachable widget resolving pointer positions into nearest-item labels
/// along a vertical guideline.
#[derive(Debug, Clone, Default)]
pub struct GuidelineWidget {
    behavior: GuidelineBehavior,
}

impl GuidelineWidget {
    #[must_use]
    pub fn new(behavior: GuidelineBehavior) -> Self {
        Self { behavior }
    }

    #[must_use]
    pub fn behavior(&self) -> GuidelineBehavior {
        self.behavior
    }

    /// Maps `pointer_x` through the inverse scale and collects the nearest
    /// items of every registered series.
    ///
    /// The probe only computes the candidate set and placement hints;
    /// drawing and label layout remain the caller's responsibility.
    pub fn probe(
        &self,
        pointer_x: f64,
        plot_width: f64,
        scale: LinearScale,
        index: &ProximityIndex,
        filters: &FilterSet,
    ) -> ChartResult<GuidelineProbe> {
        let domain_value = scale.invert(pointer_x)?;
        let align_right = pointer_x > plot_width - self.behavior.trailing_margin_px;

        let items = index
            .nearest(domain_value, self.behavior.max_items)
            .into_iter()
            .map(|item| {
                let highlight = if self.behavior.highlight_selected {
                    filters.highlight_for(&item.key)
                } else {
                    HighlightState::Neutral
                };
                GuidelineItem { item, highlight }
            })
            .collect();

        Ok(GuidelineProbe {
            domain_value,
            line_x: pointer_x,
            align_right,
            items,
        })
    }

    /// Horizontal label offset from the guideline, mirrored when labels flip
    /// to the left.
    #[must_use]
    pub fn label_offset_x(&self, align_right: bool) -> f64 {
        let lead = self.behavior.item_height + self.behavior.label_gap;
        if align_right { -(LABEL_WIDTH + lead) } else { lead }
    }
}

use serde::{Deserialize, Serialize};

use crate::api::guideline::GuidelineBehavior;
use crate::core::cap::CapBehavior;
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::transition::TransitionBehavior;

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub cap: CapBehavior,
    #[serde(default)]
    pub transition: TransitionBehavior,
    /// Inter-cell padding for treemap cells, in pixels.
    #[serde(default = "default_padding_px")]
    pub padding_px: f64,
    /// Gap between bar rows, in pixels.
    #[serde(default = "default_row_gap_px")]
    pub row_gap_px: f64,
    /// Fixed bar height override; `None` derives the height from the band.
    #[serde(default)]
    pub fixed_bar_height_px: Option<f64>,
    /// Scale every bar against its own total instead of the global maximum.
    #[serde(default)]
    pub normalized: bool,
    #[serde(default)]
    pub guideline: GuidelineBehavior,
}

impl ChartConfig {
    /// Creates a minimal config for the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            cap: CapBehavior::default(),
            transition: TransitionBehavior::default(),
            padding_px: default_padding_px(),
            row_gap_px: default_row_gap_px(),
            fixed_bar_height_px: None,
            normalized: false,
            guideline: GuidelineBehavior::default(),
        }
    }

    #[must_use]
    pub fn with_cap(mut self, cap: CapBehavior) -> Self {
        self.cap = cap;
        self
    }

    #[must_use]
    pub fn with_transition(mut self, transition: TransitionBehavior) -> Self {
        self.transition = transition;
        self
    }

    #[must_use]
    pub fn with_padding_px(mut self, padding_px: f64) -> Self {
        self.padding_px = padding_px;
        self
    }

    #[must_use]
    pub fn with_row_gap_px(mut self, row_gap_px: f64) -> Self {
        self.row_gap_px = row_gap_px;
        self
    }

    #[must_use]
    pub fn with_fixed_bar_height_px(mut self, fixed_bar_height_px: Option<f64>) -> Self {
        self.fixed_bar_height_px = fixed_bar_height_px;
        self
    }

    #[must_use]
    pub fn with_normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    #[must_use]
    pub fn with_guideline(mut self, guideline: GuidelineBehavior) -> Self {
        self.guideline = guideline;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_padding_px() -> f64 {
    2.0
}

fn default_row_gap_px() -> f64 {
    2.0
}

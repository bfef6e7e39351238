use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};

/// Default ordinal palette (the classic ten-category scheme).
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Stable key-to-color assignment: each distinct key gets the next palette
/// slot in first-seen order, wrapping when the palette is exhausted.
#[derive(Debug, Clone)]
pub struct OrdinalColorScale {
    palette: Vec<String>,
    assigned: IndexMap<String, usize>,
}

impl Default for OrdinalColorScale {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|&c| c.to_owned()).collect(),
            assigned: IndexMap::new(),
        }
    }
}

impl OrdinalColorScale {
    pub fn new(palette: Vec<String>) -> ChartResult<Self> {
        if palette.is_empty() {
            return Err(ChartError::InvalidData(
                "color palette must not be empty".to_owned(),
            ));
        }
        Ok(Self {
            palette,
            assigned: IndexMap::new(),
        })
    }

    /// Color for `key`, assigning a slot on first sight.
    pub fn color_for(&mut self, key: &str) -> &str {
        let next = self.assigned.len() % self.palette.len();
        let slot = *self.assigned.entry(key.to_owned()).or_insert(next);
        &self.palette[slot]
    }

    /// Color for an already-assigned key.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.assigned
            .get(key)
            .map(|&slot| self.palette[slot].as_str())
    }

    pub fn reset(&mut self) {
        self.assigned.clear();
    }
}

use indexmap::IndexSet;

/// Highlight classification for one keyed item against the active filters.
///
/// `Neutral` means no filter is active at all; with an active filter every
/// item is either `Selected` or `Deselected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightState {
    Selected,
    Deselected,
    Neutral,
}

/// Active selection keys for one chart instance, with toggle semantics:
/// clicking a selected key deselects it.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    keys: IndexSet<String>,
}

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_filter(&self) -> bool {
        !self.keys.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Adds the key, or removes it when already present. Returns whether the
    /// key is selected afterwards.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.shift_remove(key) {
            false
        } else {
            self.keys.insert(key.to_owned());
            true
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn highlight_for(&self, key: &str) -> HighlightState {
        if !self.has_filter() {
            HighlightState::Neutral
        } else if self.contains(key) {
            HighlightState::Selected
        } else {
            HighlightState::Deselected
        }
    }
}

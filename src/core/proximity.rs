use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::record::Record;

/// Identity of a registered series inside a [`ProximityIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesId(pub u32);

/// One nearest-neighbor hit, carrying a back-reference to its owning series.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityItem {
    pub series: SeriesId,
    pub key: String,
    pub value: f64,
    /// Domain position of the hit, for caller-side placement.
    pub position: f64,
}

#[derive(Debug, Clone)]
struct SeriesEntry {
    position: f64,
    key: String,
    value: f64,
}

#[derive(Debug, Clone)]
struct RegisteredSeries {
    id: SeriesId,
    entries: Vec<SeriesEntry>,
}

/// Nearest-neighbor lookup over one or more registered series, keyed by a
/// domain position rather than screen position.
///
/// Queries are read-only; results reflect whatever aggregation snapshot was
/// registered most recently.
#[derive(Debug, Clone, Default)]
pub struct ProximityIndex {
    series: Vec<RegisteredSeries>,
}

impl ProximityIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a series snapshot. `position` maps each record
    /// onto the domain axis; records with non-finite positions are skipped.
    pub fn register<F>(&mut self, id: SeriesId, records: &[Record], position: F)
    where
        F: Fn(&Record) -> f64,
    {
        let mut entries: Vec<SeriesEntry> = records
            .iter()
            .filter_map(|record| {
                let position = position(record);
                position.is_finite().then(|| SeriesEntry {
                    position,
                    key: record.key.clone(),
                    value: record.value,
                })
            })
            .collect();
        entries.sort_by(|a, b| {
            OrderedFloat(a.position).cmp(&OrderedFloat(b.position))
        });

        if let Some(existing) = self.series.iter_mut().find(|series| series.id == id) {
            existing.entries = entries;
        } else {
            self.series.push(RegisteredSeries { id, entries });
        }
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Returns the nearest record of every registered series to
    /// `domain_value`, in registration order, truncated to `max_items` after
    /// resolution.
    #[must_use]
    pub fn nearest(&self, domain_value: f64, max_items: Option<usize>) -> Vec<ProximityItem> {
        let mut items: Vec<ProximityItem> = self
            .series
            .iter()
            .filter_map(|series| nearest_in_series(series, domain_value))
            .collect();

        if let Some(max_items) = max_items {
            items.truncate(max_items);
        }
        items
    }
}

fn nearest_in_series(series: &RegisteredSeries, domain_value: f64) -> Option<ProximityItem> {
    if series.entries.is_empty() || !domain_value.is_finite() {
        return None;
    }

    let partition = series
        .entries
        .partition_point(|entry| entry.position < domain_value);

    let mut candidates: SmallVec<[usize; 2]> = SmallVec::new();
    if partition > 0 {
        candidates.push(partition - 1);
    }
    if partition < series.entries.len() {
        candidates.push(partition);
    }

    candidates
        .into_iter()
        .min_by_key(|&index| OrderedFloat((series.entries[index].position - domain_value).abs()))
        .map(|index| {
            let entry = &series.entries[index];
            ProximityItem {
                series: series.id,
                key: entry.key.clone(),
                value: entry.value,
                position: entry.position,
            }
        })
}

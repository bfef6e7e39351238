use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::record::Record;

/// Capping policy applied to an ordered record set.
///
/// `cap = None` means uncapped: the sorted records pass through unmodified.
/// With a cap, `take_from_front` selects which end of the ascending order is
/// kept; the remainder is offered to the others grouper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapBehavior {
    #[serde(default)]
    pub cap: Option<usize>,
    #[serde(default)]
    pub take_from_front: bool,
    #[serde(default = "default_others_label")]
    pub others_label: String,
}

impl Default for CapBehavior {
    fn default() -> Self {
        Self {
            cap: None,
            take_from_front: false,
            others_label: default_others_label(),
        }
    }
}

impl CapBehavior {
    #[must_use]
    pub fn uncapped() -> Self {
        Self::default()
    }

    /// Sets the maximum number of records kept before folding.
    #[must_use]
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = Some(cap);
        self
    }

    /// Keeps the first `cap` records of the ascending order instead of the last.
    #[must_use]
    pub fn with_take_from_front(mut self, take_from_front: bool) -> Self {
        self.take_from_front = take_from_front;
        self
    }

    /// Sets the sentinel key used for the folded record.
    #[must_use]
    pub fn with_others_label(mut self, label: impl Into<String>) -> Self {
        self.others_label = label.into();
        self
    }
}

fn default_others_label() -> String {
    "Others".to_owned()
}

/// Folds the records beyond the cap into at most one synthetic record.
pub trait OthersGrouper {
    /// Returns the record to append for `rest`, or `None` to drop the fold.
    fn fold(&self, kept: &[Record], rest: &[Record], label: &str) -> Option<Record>;
}

/// Default fold policy: the others value is the arithmetic mean of the folded
/// values, suppressed entirely when that mean is not positive.
///
/// Mean rather than sum is deliberate; downstream displayed totals depend on
/// it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanOthersGrouper;

impl OthersGrouper for MeanOthersGrouper {
    fn fold(&self, _kept: &[Record], rest: &[Record], label: &str) -> Option<Record> {
        if rest.is_empty() {
            return None;
        }

        let mean = rest.iter().map(|record| record.value).sum::<f64>() / rest.len() as f64;
        if !(mean > 0.0) {
            return None;
        }

        let mut others = Record::new(label, mean);
        others.others = Some(rest.iter().map(|record| record.key.clone()).collect());
        Some(others)
    }
}

/// Sorts `records` ascending by `ordering` (stable), then applies the capping
/// policy and others fold.
///
/// Pure function of its inputs: the returned list is `kept` in ascending
/// order, plus at most one appended others record.
#[must_use]
pub fn aggregate_capped<F>(
    records: &[Record],
    ordering: F,
    behavior: &CapBehavior,
    grouper: &dyn OthersGrouper,
) -> Vec<Record>
where
    F: Fn(&Record, &Record) -> Ordering,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|left, right| ordering(left, right));

    let Some(cap) = behavior.cap else {
        return sorted;
    };

    let (kept, rest): (Vec<Record>, Vec<Record>) = if behavior.take_from_front {
        let split = cap.min(sorted.len());
        let rest = sorted.split_off(split);
        (sorted, rest)
    } else {
        let split = sorted.len().saturating_sub(cap);
        let kept = sorted.split_off(split);
        (kept, sorted)
    };

    let mut result = kept;
    if !rest.is_empty()
        && let Some(others) = grouper.fold(&result, &rest, &behavior.others_label)
    {
        result.push(others);
    }
    result
}

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One aggregated datum produced by the upstream grouping.
///
/// Records carry no identity beyond `key`; they are rebuilt on every data
/// refresh. A record synthesized by others-folding additionally lists the
/// keys it absorbed in `others`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    pub value: f64,
    /// Keys folded into this record when it is a synthetic "others" record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub others: Option<Vec<String>>,
    /// Opaque original datum, passed through for titles and click payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
}

impl Record {
    #[must_use]
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
            others: None,
            raw: None,
        }
    }

    /// Attaches the original datum payload.
    #[must_use]
    pub fn with_raw(mut self, raw: serde_json::Value) -> Self {
        self.raw = Some(raw);
        self
    }

    #[must_use]
    pub fn is_others(&self) -> bool {
        self.others.is_some()
    }
}

/// Ascending comparator over record values; ties keep input order because
/// the capped-aggregation sort is stable.
#[must_use]
pub fn by_value() -> impl Fn(&Record, &Record) -> Ordering {
    |left, right| left.value.partial_cmp(&right.value).unwrap_or(Ordering::Equal)
}

/// Ascending comparator over record keys.
#[must_use]
pub fn by_key() -> impl Fn(&Record, &Record) -> Ordering {
    |left, right| left.key.cmp(&right.key)
}

#[cfg(test)]
mod tests {
    use super::{Record, by_key, by_value};

    #[test]
    fn others_flag_tracks_folded_keys() {
        let mut record = Record::new("Others", 3.0);
        assert!(!record.is_others());
        record.others = Some(vec!["D".to_owned(), "C".to_owned()]);
        assert!(record.is_others());
    }

    #[test]
    fn comparators_sort_ascending() {
        let mut records = vec![
            Record::new("b", 7.0),
            Record::new("a", 10.0),
            Record::new("c", 5.0),
        ];

        records.sort_by(by_value());
        assert_eq!(records[0].key, "c");
        assert_eq!(records[2].key, "a");

        records.sort_by(by_key());
        assert_eq!(records[0].key, "a");
        assert_eq!(records[2].key, "c");
    }
}

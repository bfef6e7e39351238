use indexmap::{IndexMap, IndexSet};

/// Items carrying a stable identity key.
///
/// Key uniqueness within one reconciliation pass is a precondition of the
/// diff; duplicate keys are undefined behavior, not a recoverable error.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Key-level partition of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyDiff {
    /// Keys only in the new set, in new-set order.
    pub enter: Vec<String>,
    /// Keys in both sets, in new-set order.
    pub update: Vec<String>,
    /// Keys only in the old set, in old-set order.
    pub exit: Vec<String>,
}

/// Partitions keys strictly by membership from one consistent snapshot of
/// both sets. No key appears in more than one of the three lists.
#[must_use]
pub fn diff_keys<'a, I, J>(old: I, new: J) -> KeyDiff
where
    I: IntoIterator<Item = &'a str>,
    J: IntoIterator<Item = &'a str>,
{
    let old_keys: IndexSet<&str> = old.into_iter().collect();
    let new_keys: IndexSet<&str> = new.into_iter().collect();

    let mut diff = KeyDiff::default();
    for key in &new_keys {
        if old_keys.contains(key) {
            diff.update.push((*key).to_owned());
        } else {
            diff.enter.push((*key).to_owned());
        }
    }
    for key in &old_keys {
        if !new_keys.contains(key) {
            diff.exit.push((*key).to_owned());
        }
    }
    diff
}

/// Item-level reconciliation result; `update` pairs the old item with its new
/// target so transitions can start from the previously rendered state.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileDiff<T> {
    pub enter: Vec<T>,
    pub update: Vec<(T, T)>,
    pub exit: Vec<T>,
}

/// Keyed diff over two item sets.
#[must_use]
pub fn reconcile<T>(old: &[T], new: &[T]) -> ReconcileDiff<T>
where
    T: Keyed + Clone,
{
    let old_by_key: IndexMap<&str, &T> = old.iter().map(|item| (item.key(), item)).collect();
    let new_key_set: IndexMap<&str, ()> = new.iter().map(|item| (item.key(), ())).collect();

    let mut enter = Vec::new();
    let mut update = Vec::new();
    for item in new {
        match old_by_key.get(item.key()) {
            Some(previous) => update.push(((*previous).clone(), item.clone())),
            None => enter.push(item.clone()),
        }
    }

    let exit = old
        .iter()
        .filter(|item| !new_key_set.contains_key(item.key()))
        .cloned()
        .collect();

    ReconcileDiff {
        enter,
        update,
        exit,
    }
}

#[cfg(test)]
mod tests {
    use super::{Keyed, diff_keys, reconcile};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        key: String,
        value: f64,
    }

    impl Item {
        fn new(key: &str, value: f64) -> Self {
            Self {
                key: key.to_owned(),
                value,
            }
        }
    }

    impl Keyed for Item {
        fn key(&self) -> &str {
            &self.key
        }
    }

    #[test]
    fn consecutive_passes_partition_by_key_membership() {
        let old = [Item::new("k1", 1.0), Item::new("k2", 2.0)];
        let new = [Item::new("k2", 5.0), Item::new("k3", 3.0)];

        let diff = reconcile(&old, &new);
        assert_eq!(diff.enter.len(), 1);
        assert_eq!(diff.enter[0].key, "k3");
        assert_eq!(diff.update.len(), 1);
        assert_eq!(diff.update[0].0.value, 2.0);
        assert_eq!(diff.update[0].1.value, 5.0);
        assert_eq!(diff.exit.len(), 1);
        assert_eq!(diff.exit[0].key, "k1");
    }

    #[test]
    fn identical_sets_yield_updates_only() {
        let items = [Item::new("a", 1.0), Item::new("b", 2.0)];
        let diff = reconcile(&items, &items);
        assert!(diff.enter.is_empty());
        assert!(diff.exit.is_empty());
        assert_eq!(diff.update.len(), 2);
    }

    #[test]
    fn partition_lists_preserve_input_order() {
        let diff = diff_keys(
            ["z", "a", "m"].into_iter(),
            ["m", "q", "a", "b"].into_iter(),
        );
        assert_eq!(diff.update, ["m", "a"]);
        assert_eq!(diff.enter, ["q", "b"]);
        assert_eq!(diff.exit, ["z"]);
    }

    #[test]
    fn key_diff_sets_are_disjoint() {
        let diff = diff_keys(
            ["a", "b", "c"].into_iter(),
            ["b", "c", "d", "e"].into_iter(),
        );
        assert_eq!(diff.enter, ["d", "e"]);
        assert_eq!(diff.update, ["b", "c"]);
        assert_eq!(diff.exit, ["a"]);

        for key in &diff.enter {
            assert!(!diff.update.contains(key));
            assert!(!diff.exit.contains(key));
        }
    }
}

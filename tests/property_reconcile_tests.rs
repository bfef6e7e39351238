use groupchart_rs::render::diff_keys;
use proptest::prelude::*;

fn key_set_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(0u32..64, 0..24)
        .prop_map(|keys| keys.into_iter().map(|k| format!("k{k}")).collect())
}

proptest! {
    #[test]
    fn partitions_are_pairwise_disjoint(
        old in key_set_strategy(),
        new in key_set_strategy()
    ) {
        let diff = diff_keys(
            old.iter().map(String::as_str),
            new.iter().map(String::as_str),
        );

        for key in &diff.enter {
            prop_assert!(!diff.update.contains(key));
            prop_assert!(!diff.exit.contains(key));
        }
        for key in &diff.update {
            prop_assert!(!diff.exit.contains(key));
        }
    }

    #[test]
    fn enter_and_update_cover_the_new_set(
        old in key_set_strategy(),
        new in key_set_strategy()
    ) {
        let diff = diff_keys(
            old.iter().map(String::as_str),
            new.iter().map(String::as_str),
        );

        let mut covered: Vec<&String> = diff.enter.iter().chain(diff.update.iter()).collect();
        covered.sort_unstable();
        let mut expected: Vec<&String> = new.iter().collect();
        expected.sort_unstable();
        prop_assert_eq!(covered, expected);
    }

    #[test]
    fn update_and_exit_cover_the_old_set(
        old in key_set_strategy(),
        new in key_set_strategy()
    ) {
        let diff = diff_keys(
            old.iter().map(String::as_str),
            new.iter().map(String::as_str),
        );

        let mut covered: Vec<&String> = diff.update.iter().chain(diff.exit.iter()).collect();
        covered.sort_unstable();
        let mut expected: Vec<&String> = old.iter().collect();
        expected.sort_unstable();
        prop_assert_eq!(covered, expected);
    }

    #[test]
    fn identical_sets_produce_updates_only(keys in key_set_strategy()) {
        let diff = diff_keys(
            keys.iter().map(String::as_str),
            keys.iter().map(String::as_str),
        );

        prop_assert!(diff.enter.is_empty());
        prop_assert!(diff.exit.is_empty());
        prop_assert_eq!(diff.update.len(), keys.len());
    }
}

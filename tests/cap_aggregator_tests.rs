use groupchart_rs::core::{
    CapBehavior, MeanOthersGrouper, OthersGrouper, Record, aggregate_capped, by_key, by_value,
};

fn fixture() -> Vec<Record> {
    vec![
        Record::new("alpha", 10.0),
        Record::new("beta", 7.0),
        Record::new("gamma", 5.0),
        Record::new("delta", 1.0),
    ]
}

#[test]
fn capped_back_keeps_largest_and_folds_rest() {
    let behavior = CapBehavior::uncapped().with_cap(2);
    let result = aggregate_capped(&fixture(), by_value(), &behavior, &MeanOthersGrouper);

    let keys: Vec<&str> = result.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, ["beta", "alpha", "Others"]);
    assert_eq!(result[2].value, 3.0);
    assert_eq!(
        result[2].others.as_deref(),
        Some(&["delta".to_owned(), "gamma".to_owned()][..])
    );
}

#[test]
fn custom_others_label_is_honored() {
    let behavior = CapBehavior::uncapped()
        .with_cap(1)
        .with_others_label("Rest");
    let result = aggregate_capped(&fixture(), by_value(), &behavior, &MeanOthersGrouper);

    assert_eq!(result.last().map(|r| r.key.as_str()), Some("Rest"));
    assert!(result.last().is_some_and(Record::is_others));
}

#[test]
fn key_ordering_sorts_lexicographically() {
    let behavior = CapBehavior::uncapped();
    let result = aggregate_capped(&fixture(), by_key(), &behavior, &MeanOthersGrouper);

    let keys: Vec<&str> = result.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, ["alpha", "beta", "delta", "gamma"]);
}

#[test]
fn empty_input_stays_empty() {
    let behavior = CapBehavior::uncapped().with_cap(3);
    let result = aggregate_capped(&[], by_value(), &behavior, &MeanOthersGrouper);
    assert!(result.is_empty());
}

#[test]
fn zero_cap_folds_everything() {
    let behavior = CapBehavior::uncapped().with_cap(0);
    let result = aggregate_capped(&fixture(), by_value(), &behavior, &MeanOthersGrouper);

    assert_eq!(result.len(), 1);
    let others = &result[0];
    assert_eq!(others.key, "Others");
    assert_eq!(others.value, 23.0 / 4.0);
    assert_eq!(others.others.as_ref().map(Vec::len), Some(4));
}

#[test]
fn custom_grouper_replaces_mean_policy() {
    struct SumGrouper;
    impl OthersGrouper for SumGrouper {
        fn fold(&self, _kept: &[Record], rest: &[Record], label: &str) -> Option<Record> {
            if rest.is_empty() {
                return None;
            }
            let mut record = Record::new(label, rest.iter().map(|r| r.value).sum());
            record.others = Some(rest.iter().map(|r| r.key.clone()).collect());
            Some(record)
        }
    }

    let behavior = CapBehavior::uncapped().with_cap(2);
    let result = aggregate_capped(&fixture(), by_value(), &behavior, &SumGrouper);
    assert_eq!(result[2].value, 6.0);
}

#[test]
fn input_slice_is_left_untouched() {
    let records = fixture();
    let behavior = CapBehavior::uncapped().with_cap(1);
    let _ = aggregate_capped(&records, by_value(), &behavior, &MeanOthersGrouper);

    assert_eq!(records[0].key, "alpha");
    assert_eq!(records.len(), 4);
}

//! Readable formatting of values and filter descriptions for titles,
//! tooltips, and legend entries.

/// Prints a single numeric value compactly: integral values drop the
/// fraction, everything else keeps two decimals.
#[must_use]
pub fn print_single_value(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Converts one filter key or range into a readable string.
#[must_use]
pub fn print_filter(keys: &[String]) -> String {
    match keys {
        [] => String::new(),
        [single] => single.clone(),
        many => format!("[{}]", many.join(" -> ")),
    }
}

/// Converts a list of filters into a comma-separated readable string.
#[must_use]
pub fn print_filters<'a, I>(filters: I) -> String
where
    I: IntoIterator<Item = &'a [String]>,
{
    filters
        .into_iter()
        .map(print_filter)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Default title text for a record: `key: value`.
#[must_use]
pub fn print_title(key: &str, value: f64) -> String {
    format!("{key}: {}", print_single_value(value))
}

#[cfg(test)]
mod tests {
    use super::{print_filter, print_filters, print_single_value, print_title};

    #[test]
    fn single_values_are_compact() {
        assert_eq!(print_single_value(42.0), "42");
        assert_eq!(print_single_value(3.14159), "3.14");
        assert_eq!(print_single_value(f64::NAN), "-");
    }

    #[test]
    fn filters_join_readably() {
        let a = vec!["2010".to_owned(), "2015".to_owned()];
        let b = vec!["US".to_owned()];
        assert_eq!(print_filter(&a), "[2010 -> 2015]");
        assert_eq!(print_filter(&b), "US");
        assert_eq!(
            print_filters([a.as_slice(), b.as_slice()]),
            "[2010 -> 2015], US"
        );
    }

    #[test]
    fn titles_pair_key_and_value() {
        assert_eq!(print_title("Energy", 12.5), "Energy: 12.50");
    }
}

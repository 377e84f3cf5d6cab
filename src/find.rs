use crate::record::Record;

/// Index of the first record whose country equals `target` ignoring ASCII case. Substrings and
/// prefixes do not match.
pub fn find_by_country(records: &[Record], target: &str) -> Option<usize> {
    records.iter().position(|r| r.is_country(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Vec<Record> {
        vec![
            Record::new(80, "Finland", 1),
            Record::new(43, "Ghana", 72),
            Record::new(20, "Somalia", 175),
            Record::new(43, "ghana", 99),
        ]
    }

    #[rstest]
    #[case("Ghana")]
    #[case("GHANA")]
    #[case("ghana")]
    fn test_case_insensitive(#[case] target: &str) {
        let records = sample();
        let found = find_by_country(&records, target);
        assert_eq!(found, Some(1));
        assert_eq!(records[1], Record::new(43, "Ghana", 72));
    }

    #[rstest]
    #[case("Atlantis")]
    #[case("Gha")]
    #[case("Ghana Republic")]
    #[case("")]
    fn test_not_found(#[case] target: &str) {
        assert_eq!(find_by_country(&sample(), target), None);
    }

    #[test]
    fn test_empty_store() {
        assert_eq!(find_by_country(&[], "Ghana"), None);
    }
}

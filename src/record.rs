use std::cmp::Ordering;

/// One country's entry in the index
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub score: i32,
    pub country: String,
    pub rank: i32,
}

impl Record {
    pub fn new(score: i32, country: &str, rank: i32) -> Self {
        Record {
            score,
            country: country.to_owned(),
            rank,
        }
    }

    /// Compare country names ignoring ASCII case
    pub fn cmp_country(&self, other: &Record) -> Ordering {
        let left = self.country.chars().map(|c| c.to_ascii_lowercase());
        let right = other.country.chars().map(|c| c.to_ascii_lowercase());
        left.cmp(right)
    }

    pub fn is_country(&self, name: &str) -> bool {
        self.country.eq_ignore_ascii_case(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_country_ignores_case() {
        let a = Record::new(1, "albania", 1);
        let b = Record::new(1, "Brazil", 1);
        let c = Record::new(1, "ALBANIA", 1);
        assert_eq!(a.cmp_country(&b), Ordering::Less);
        assert_eq!(b.cmp_country(&a), Ordering::Greater);
        assert_eq!(a.cmp_country(&c), Ordering::Equal);
    }

    #[test]
    fn test_cmp_country_prefix() {
        let a = Record::new(1, "Niger", 1);
        let b = Record::new(1, "nigeria", 1);
        assert_eq!(a.cmp_country(&b), Ordering::Less);
    }

    #[test]
    fn test_is_country() {
        let r = Record::new(43, "Ghana", 72);
        assert!(r.is_country("GHANA"));
        assert!(r.is_country("ghana"));
        assert!(!r.is_country("Gha"));
    }
}

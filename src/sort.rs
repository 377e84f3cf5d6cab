use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::record::Record;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse `asc` or `desc`, ignoring case
    pub fn from_name(name: &str) -> Option<SortOrder> {
        match name.to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Ascending),
            "desc" => Some(SortOrder::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

/// Field to sort records by.
///
/// Any name other than `score`, `rank` or `country` becomes `Unrecognized`, which sorts the same
/// way as `Score` rather than being rejected by the sorter.
#[derive(Clone, Debug, PartialEq)]
pub enum SortField {
    Score,
    Rank,
    Country,
    Unrecognized(String),
}

impl SortField {
    pub fn from_name(name: &str) -> SortField {
        match name.to_ascii_lowercase().as_str() {
            "score" => SortField::Score,
            "rank" => SortField::Rank,
            "country" => SortField::Country,
            _ => SortField::Unrecognized(name.to_owned()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, SortField::Unrecognized(_))
    }

    fn compare(&self, left: &Record, right: &Record) -> Ordering {
        match self {
            SortField::Score | SortField::Unrecognized(_) => left.score.cmp(&right.score),
            SortField::Rank => left.rank.cmp(&right.rank),
            SortField::Country => left.cmp_country(right),
        }
    }

    fn should_swap(&self, left: &Record, right: &Record, order: SortOrder) -> bool {
        let ordering = self.compare(left, right);
        match order {
            SortOrder::Ascending => ordering == Ordering::Greater,
            SortOrder::Descending => ordering == Ordering::Less,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortField::Score => write!(f, "score"),
            SortField::Rank => write!(f, "rank"),
            SortField::Country => write!(f, "country"),
            SortField::Unrecognized(name) => write!(f, "{name}"),
        }
    }
}

/// Counters collected while sorting
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SortStats {
    pub passes: usize,
    pub comparisons: usize,
    pub swaps: usize,
}

/// Sort records in place by swapping adjacent out of order pairs.
///
/// Stops as soon as a pass makes no swap, so already sorted input takes a single pass. Records
/// are only swapped when their keys differ, which keeps equal keys in their existing order.
pub fn bubble_sort(records: &mut [Record], field: &SortField, order: SortOrder) -> SortStats {
    let n = records.len();
    let mut stats = SortStats::default();

    for i in 0..n.saturating_sub(1) {
        stats.passes += 1;
        let mut swapped = false;
        for j in 0..n - i - 1 {
            stats.comparisons += 1;
            if field.should_swap(&records[j], &records[j + 1], order) {
                records.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    debug!(
        "Sorted {n} records by {field} {order}: {} passes, {} comparisons, {} swaps",
        stats.passes, stats.comparisons, stats.swaps
    );
    stats
}

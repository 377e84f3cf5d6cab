use std::fmt;

/// A displayable field of a record, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Country,
    Score,
    Rank,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Country, Column::Score, Column::Rank];

    pub fn from_name(name: &str) -> Option<Column> {
        match name {
            "country" => Some(Column::Country),
            "score" => Some(Column::Score),
            "rank" => Some(Column::Rank),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Column::Country => "country",
            Column::Score => "score",
            Column::Rank => "rank",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Set of columns to display
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnsFilter {
    filtered_flags: [bool; 3],
}

/// Outcome of building a filter from user supplied names
#[derive(Debug)]
pub struct ParsedColumns {
    /// None if no name was a known column
    pub filter: Option<ColumnsFilter>,
    /// Lowercased names that are not columns, in input order
    pub unknown: Vec<String>,
}

impl ColumnsFilter {
    pub fn all() -> Self {
        ColumnsFilter {
            filtered_flags: [true; 3],
        }
    }

    pub fn new(columns: &[Column]) -> Self {
        let mut filtered_flags = [false; 3];
        for column in columns {
            filtered_flags[column.index()] = true;
        }
        ColumnsFilter { filtered_flags }
    }

    /// Build a filter from column names, ignoring case. Unknown names are collected rather than
    /// failing the whole parse.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> ParsedColumns {
        let mut columns = vec![];
        let mut unknown = vec![];
        for name in names {
            let name = name.as_ref().to_ascii_lowercase();
            match Column::from_name(&name) {
                Some(column) => columns.push(column),
                None => unknown.push(name),
            }
        }
        let filter = if columns.is_empty() {
            None
        } else {
            Some(ColumnsFilter::new(&columns))
        };
        ParsedColumns { filter, unknown }
    }

    pub fn is_column_filtered(&self, column: Column) -> bool {
        self.filtered_flags[column.index()]
    }

    pub fn columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.is_column_filtered(*c))
            .collect()
    }
}

impl Default for ColumnsFilter {
    fn default() -> Self {
        ColumnsFilter::all()
    }
}

impl fmt::Display for ColumnsFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = self.columns().iter().map(|c| c.name()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_display_order() {
        let parsed = ColumnsFilter::parse(&["rank", "COUNTRY"]);
        let filter = parsed.filter.unwrap();
        assert_eq!(filter.columns(), vec![Column::Country, Column::Rank]);
        assert!(!filter.is_column_filtered(Column::Score));
        assert!(parsed.unknown.is_empty());
        assert_eq!(filter.to_string(), "[country, rank]");
    }

    #[test]
    fn test_parse_collects_unknown() {
        let parsed = ColumnsFilter::parse(&["score", "Population", "gdp", "score"]);
        assert_eq!(parsed.filter, Some(ColumnsFilter::new(&[Column::Score])));
        assert_eq!(parsed.unknown, vec!["population", "gdp"]);
    }

    #[test]
    fn test_parse_nothing_valid() {
        let parsed = ColumnsFilter::parse(&["gdp"]);
        assert!(parsed.filter.is_none());
        assert_eq!(parsed.unknown, vec!["gdp"]);
    }

    #[test]
    fn test_all() {
        let filter = ColumnsFilter::default();
        assert_eq!(filter.columns(), Column::ALL.to_vec());
        assert_eq!(filter.to_string(), "[country, score, rank]");
    }
}

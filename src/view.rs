use std::cmp::min;

use unicode_width::UnicodeWidthStr;

use crate::columns_filter::{Column, ColumnsFilter};
use crate::record::Record;

const COUNTRY_WIDTH: usize = 25;
const NUMBER_WIDTH: usize = 3;

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(padding))
}

/// Render the selected columns of a record on one line, always in country, score, rank order.
pub fn format_record(record: &Record, columns: &ColumnsFilter) -> String {
    let mut line = String::new();
    for column in columns.columns() {
        let cell = match column {
            Column::Country => format!(
                "Country: {}  ",
                pad_to_width(&record.country, COUNTRY_WIDTH)
            ),
            Column::Score => format!("Score: {:>NUMBER_WIDTH$}  ", record.score),
            Column::Rank => format!("Rank: {:>NUMBER_WIDTH$}  ", record.rank),
        };
        line.push_str(&cell);
    }
    line.trim_end().to_owned()
}

/// The first `num_rows` records, or all of them if there are fewer
pub fn top_rows(records: &[Record], num_rows: usize) -> &[Record] {
    &records[..min(num_rows, records.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_columns() {
        let record = Record::new(80, "Finland", 1);
        let line = format_record(&record, &ColumnsFilter::all());
        assert_eq!(
            line,
            "Country: Finland                    Score:  80  Rank:   1"
        );
    }

    #[test]
    fn test_single_column_is_trimmed() {
        let record = Record::new(80, "Finland", 1);
        let line = format_record(&record, &ColumnsFilter::new(&[Column::Country]));
        assert_eq!(line, "Country: Finland");
        let line = format_record(&record, &ColumnsFilter::new(&[Column::Score]));
        assert_eq!(line, "Score:  80");
    }

    #[test]
    fn test_fixed_order() {
        let record = Record::new(20, "Somalia", 175);
        let line = format_record(&record, &ColumnsFilter::new(&[Column::Rank, Column::Score]));
        assert_eq!(line, "Score:  20  Rank: 175");
    }

    #[test]
    fn test_long_values_are_not_truncated() {
        let record = Record::new(1000, "Democratic Republic of the Congo", -5);
        let line = format_record(&record, &ColumnsFilter::all());
        assert_eq!(
            line,
            "Country: Democratic Republic of the Congo  Score: 1000  Rank:  -5"
        );
    }

    #[test]
    fn test_wide_characters() {
        let record = Record::new(73, "香港", 12);
        let line = format_record(&record, &ColumnsFilter::new(&[Column::Country, Column::Rank]));
        assert_eq!(line, format!("Country: 香港{}  Rank:  12", " ".repeat(21)));
    }

    #[test]
    fn test_top_rows() {
        let records = vec![
            Record::new(80, "Finland", 1),
            Record::new(50, "India", 85),
        ];
        assert_eq!(top_rows(&records, 1).len(), 1);
        assert_eq!(top_rows(&records, 10).len(), 2);
        assert!(top_rows(&[], 10).is_empty());
    }
}

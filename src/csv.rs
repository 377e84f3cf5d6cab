extern crate csv;

use csv::{Reader, ReaderBuilder, StringRecord};
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::errors::{CpilensError, CpilensResult};
use crate::record::Record;

pub struct CsvConfig {
    path: String,
    delimiter: u8,
}

impl CsvConfig {
    pub fn new(path: &str, delimiter: u8) -> CsvConfig {
        CsvConfig {
            path: path.to_string(),
            delimiter,
        }
    }

    /// Reader positioned after the first line, whatever that line holds.
    pub fn new_reader(&self) -> CpilensResult<Reader<BufReader<File>>> {
        let file = File::open(self.path.as_str()).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CpilensError::FileNotFound(self.path.clone()),
            _ => e.into(),
        })?;
        // The csv reader ignores blank lines when picking headers, so skip the header line here
        let mut buf_reader = BufReader::new(file);
        let mut header = vec![];
        buf_reader.read_until(b'\n', &mut header)?;

        // Quotes carry no meaning: a row is split on every delimiter, so a country name
        // containing the delimiter yields an extra field and the row is dropped.
        let reader = ReaderBuilder::new()
            .flexible(true)
            .quoting(false)
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_reader(buf_reader);
        Ok(reader)
    }

    pub fn filename(&self) -> &str {
        self.path.as_str()
    }
}

/// Strip leading and trailing spaces and ASCII control characters
fn trim_field(field: &str) -> &str {
    field.trim_matches(|c: char| c <= ' ')
}

/// Convert a row into a record, or None if it is not exactly score, country and rank with
/// integer score and rank.
fn parse_record(row: &StringRecord) -> Option<Record> {
    if row.len() != 3 {
        return None;
    }
    let score = trim_field(row.get(0)?).parse::<i32>().ok()?;
    let country = trim_field(row.get(1)?);
    let rank = trim_field(row.get(2)?).parse::<i32>().ok()?;
    Some(Record::new(score, country, rank))
}

/// Read all records from the file, skipping the header and any malformed row.
pub fn try_load_records(config: &CsvConfig) -> CpilensResult<Vec<Record>> {
    let mut reader = config.new_reader()?;
    let mut records = vec![];

    for (row_index, r) in reader.records().enumerate() {
        let row = match r {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!("Skipping row {row_index}: {e}");
                continue;
            }
        };
        match parse_record(&row) {
            Some(record) => records.push(record),
            None => debug!("Skipping row {row_index}: {row:?}"),
        }
    }

    info!("Loaded {} records from {}", records.len(), config.filename());
    Ok(records)
}

/// Read all records from the file. A file that cannot be read is reported on stderr and results
/// in no records.
pub fn load_records(config: &CsvConfig) -> Vec<Record> {
    match try_load_records(config) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error reading file: {e}");
            vec![]
        }
    }
}

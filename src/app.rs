use std::io::{BufRead, Write};

use log::debug;

use crate::columns_filter::ColumnsFilter;
use crate::errors::CpilensResult;
use crate::find::find_by_country;
use crate::help::HELP_CONTENT;
use crate::input::Control;
use crate::record::Record;
use crate::sort::{SortField, SortOrder, bubble_sort};
use crate::view::{format_record, top_rows};

pub const DEFAULT_TOP_N: usize = 10;

/// Settings changed by commands and kept for the rest of the session
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub columns: ColumnsFilter,
    pub top_n: usize,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            columns: ColumnsFilter::all(),
            top_n: DEFAULT_TOP_N,
            sort_field: SortField::Score,
            sort_order: SortOrder::Descending,
        }
    }
}

pub struct App {
    records: Vec<Record>,
    session: Session,
}

impl App {
    /// Records are sorted by the session's sort settings right away.
    pub fn new(records: Vec<Record>, session: Session) -> Self {
        let mut app = App { records, session };
        app.apply_sort();
        app
    }

    /// Read and run commands until `exit` or end of input.
    pub fn main_loop<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> CpilensResult<()> {
        // A read error ends the session like end of input does
        let mut lines = input.lines().map_while(Result::ok);
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let control = match lines.next() {
                Some(line) => Control::parse(&line),
                None => {
                    writeln!(output)?;
                    Control::Exit
                }
            };
            debug!("Command: {control:?}");
            if matches!(control, Control::Exit) {
                writeln!(output, "Exiting program.")?;
                return Ok(());
            }
            self.step(&control, output)?;
        }
    }

    fn step<W: Write>(&mut self, control: &Control, output: &mut W) -> CpilensResult<()> {
        match control {
            Control::Help => {
                writeln!(output, "{HELP_CONTENT}")?;
            }
            Control::Sort { field, order } => {
                self.session.sort_field = field.clone();
                self.session.sort_order = *order;
                self.apply_sort();
                writeln!(output, "Sorted by {field} in {order} order.")?;
            }
            Control::Search(name) => self.handle_search(name, output)?,
            Control::ShowFields(names) => self.handle_show_fields(names, output)?,
            Control::ShowTop(num_rows) => self.handle_show_top(*num_rows, output)?,
            Control::Invalid(message) => {
                writeln!(output, "{message}")?;
            }
            Control::Exit | Control::Nothing => {}
        }
        Ok(())
    }

    fn apply_sort(&mut self) {
        bubble_sort(
            &mut self.records,
            &self.session.sort_field,
            self.session.sort_order,
        );
    }

    fn handle_search<W: Write>(&self, name: &str, output: &mut W) -> CpilensResult<()> {
        match find_by_country(&self.records, name) {
            Some(index) => {
                writeln!(output, "Search result:")?;
                writeln!(
                    output,
                    "{}",
                    format_record(&self.records[index], &self.session.columns)
                )?;
            }
            None => {
                writeln!(output, "Country '{name}' not found.")?;
            }
        }
        Ok(())
    }

    fn handle_show_fields<W: Write>(
        &mut self,
        names: &[String],
        output: &mut W,
    ) -> CpilensResult<()> {
        let parsed = ColumnsFilter::parse(names);
        for name in &parsed.unknown {
            writeln!(output, "Unknown field: {name}")?;
        }
        match parsed.filter {
            Some(columns) => {
                writeln!(output, "Display fields set to: {columns}")?;
                self.session.columns = columns;
            }
            None => {
                writeln!(output, "No valid fields specified. Fields remain unchanged.")?;
            }
        }
        Ok(())
    }

    fn handle_show_top<W: Write>(
        &mut self,
        num_rows: Option<usize>,
        output: &mut W,
    ) -> CpilensResult<()> {
        if let Some(n) = num_rows {
            self.session.top_n = n;
            writeln!(output, "Top N set to {n}")?;
        }
        writeln!(output, "Top {} records:", self.session.top_n)?;
        for record in top_rows(&self.records, self.session.top_n) {
            writeln!(output, "{}", format_record(record, &self.session.columns))?;
        }
        Ok(())
    }
}

/// Greet, then hand over to the command loop. Without records there is nothing to browse and
/// the session ends immediately.
pub fn run_session<R: BufRead, W: Write>(
    records: Vec<Record>,
    session: Session,
    input: R,
    output: &mut W,
) -> CpilensResult<()> {
    if records.is_empty() {
        writeln!(
            output,
            "No data loaded. Please verify CSV file path and content."
        )?;
        return Ok(());
    }
    writeln!(output, "Loaded {} records from CSV file.", records.len())?;
    writeln!(output, "Type 'help' to see available commands.\n")?;

    let mut app = App::new(records, session);
    app.main_loop(input, output)
}

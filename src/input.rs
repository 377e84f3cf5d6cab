use crate::help::{SEARCH_USAGE, SHOW_FIELDS_USAGE, SHOW_USAGE, SORT_USAGE};
use crate::sort::{SortField, SortOrder};

/// A parsed command line
#[derive(Clone, Debug, PartialEq)]
pub enum Control {
    Exit,
    Help,
    Sort { field: SortField, order: SortOrder },
    Search(String),
    ShowFields(Vec<String>),
    ShowTop(Option<usize>),
    /// Rejected before touching any state; the message is shown as is
    Invalid(String),
    Nothing,
}

impl Control {
    pub fn parse(line: &str) -> Control {
        let line = trim_line(line);
        let parts: Vec<&str> = line.split(is_separator).filter(|s| !s.is_empty()).collect();
        let Some(cmd) = parts.first() else {
            return Control::Nothing;
        };

        match cmd.to_ascii_lowercase().as_str() {
            "exit" => Control::Exit,
            "help" => Control::Help,
            "sort" => parse_sort(&parts),
            "search" => parse_search(line, &parts),
            "show" => parse_show(&parts),
            _ => invalid("Unknown command. Type 'help' to see available commands."),
        }
    }
}

fn invalid(message: &str) -> Control {
    Control::Invalid(message.to_owned())
}

fn parse_sort(parts: &[&str]) -> Control {
    if parts.len() < 4 || !parts[1].eq_ignore_ascii_case("by") {
        return Control::Invalid(format!("Invalid sort command. {SORT_USAGE}"));
    }
    let field_name = parts[2].to_ascii_lowercase();
    let field = SortField::from_name(&field_name);
    if !field.is_recognized() {
        return Control::Invalid(format!("Unknown sort field: {field_name}"));
    }
    match SortOrder::from_name(parts[3]) {
        Some(order) => Control::Sort { field, order },
        None => invalid("Order must be 'asc' or 'desc'."),
    }
}

fn parse_search(line: &str, parts: &[&str]) -> Control {
    if parts.len() < 3 || !parts[1].eq_ignore_ascii_case("country") {
        return Control::Invalid(format!("Invalid search command. {SEARCH_USAGE}"));
    }
    // Taken from the raw line so that spacing inside the name is kept
    let name = trim_line(skip_tokens(line, 2));
    if name.is_empty() {
        return invalid("Please provide a country name to search.");
    }
    Control::Search(name.to_owned())
}

fn parse_show(parts: &[&str]) -> Control {
    if parts.len() < 2 {
        return invalid(SHOW_USAGE);
    }
    if parts[1].eq_ignore_ascii_case("fields") {
        if parts.len() < 3 {
            return invalid(SHOW_FIELDS_USAGE);
        }
        let names = parts[2..].iter().map(|s| s.to_string()).collect();
        Control::ShowFields(names)
    } else if parts[1].eq_ignore_ascii_case("top") {
        let Some(arg) = parts.get(2) else {
            return Control::ShowTop(None);
        };
        match arg.parse::<i32>() {
            Ok(n) if n <= 0 => invalid("Number must be positive."),
            Ok(n) => Control::ShowTop(Some(n as usize)),
            Err(_) => invalid("Invalid number format."),
        }
    } else {
        Control::Invalid(format!("Unknown show command: {}", parts[1]))
    }
}

/// Token separators are ASCII whitespace including vertical tab; other Unicode spaces are part
/// of a token.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Strip leading and trailing spaces and ASCII control characters
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

/// The rest of `line` after its first `n` separated tokens
fn skip_tokens(line: &str, n: usize) -> &str {
    let mut rest = line.trim_start_matches(is_separator);
    for _ in 0..n {
        let end = rest.find(is_separator).unwrap_or(rest.len());
        rest = rest[end..].trim_start_matches(is_separator);
    }
    rest
}

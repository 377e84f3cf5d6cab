use crate::app::{DEFAULT_TOP_N, Session, run_session};
use crate::csv::{CsvConfig, load_records};
use crate::delimiter::Delimiter;
use crate::errors::{CpilensError, CpilensResult};

#[cfg(feature = "cli")]
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::ffi::OsString;

pub const DEFAULT_FILENAME: &str = "Corruption Data.csv";

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// CSV filename with score, country and rank columns
    #[arg(default_value = DEFAULT_FILENAME)]
    filename: String,

    /// Delimiter character (comma by default)
    #[clap(short, long, value_name = "char")]
    delimiter: Option<String>,

    /// Use tab separation. Shortcut for -d '\t'.
    #[clap(short = 't', long)]
    tab_separated: bool,

    /// Number of records listed by "show top" until changed
    #[arg(long, value_name = "n")]
    top: Option<usize>,

    /// Log debugging information to stderr
    #[clap(long)]
    debug: bool,
}

#[cfg(feature = "cli")]
impl From<Args> for CpilensOptions {
    fn from(args: Args) -> Self {
        Self {
            filename: Some(args.filename),
            delimiter: args.delimiter,
            tab_separated: args.tab_separated,
            top: args.top,
            debug: args.debug,
        }
    }
}

// Struct for library usage without clap directives
#[derive(Debug, Default)]
pub struct CpilensOptions {
    pub filename: Option<String>,
    pub delimiter: Option<String>,
    pub tab_separated: bool,
    pub top: Option<usize>,
    pub debug: bool,
}

/// Install the stderr logger. When a logger is already installed (a previous run in the same
/// process, or the embedding application's own), only the level is updated.
fn init_logger(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if SimpleLogger::new().with_level(level).init().is_err() {
        log::set_max_level(level);
    }
}

fn session_from_options(options: &CpilensOptions) -> CpilensResult<Session> {
    let top_n = match options.top {
        Some(0) => return Err(CpilensError::TopNotPositive(0)),
        Some(n) => n,
        None => DEFAULT_TOP_N,
    };
    Ok(Session {
        top_n,
        ..Session::default()
    })
}

/// Run cpilens with options provided in a `CpilensOptions` struct, reading commands from stdin.
///
/// A file that cannot be loaded is reported and ends the session normally. Errors are returned
/// for invalid options or when writing to stdout fails.
///
/// Example:
///
/// ```no_run
/// use cpilens::{run_cpilens_with_options, CpilensOptions};
///
/// let options = CpilensOptions {
///     filename: Some("/path/to/cpi.csv".to_string()),
///     ..Default::default()
/// };
/// if let Err(e) = run_cpilens_with_options(options) {
///     eprintln!("Error: {:?}", e);
/// }
/// ```
pub fn run_cpilens_with_options(options: CpilensOptions) -> CpilensResult<()> {
    init_logger(options.debug);
    let delimiter = Delimiter::from_arg(&options.delimiter, options.tab_separated)?;
    let session = session_from_options(&options)?;

    let filename = options.filename.as_deref().unwrap_or(DEFAULT_FILENAME);
    let config = CsvConfig::new(filename, delimiter.as_byte());
    let records = load_records(&config);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_session(records, session, stdin.lock(), &mut stdout)
}

/// Run cpilens with a list of arguments. The accepted arguments are the same as the command line
/// arguments for the cpilens binary.
///
/// Example:
///
/// ```no_run
/// use cpilens::run_cpilens;
///
/// if let Err(e) = run_cpilens(&["/path/to/cpi.csv", "--top", "5"]) {
///     eprintln!("Error: {:?}", e);
/// }
/// ```
#[cfg(feature = "cli")]
pub fn run_cpilens<I, T>(args: I) -> CpilensResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args_items = vec![OsString::from("cpilens")];
    for item in args {
        args_items.push(item.into());
    }
    let args = Args::parse_from(args_items);
    run_cpilens_with_options(args.into())
}

#[cfg(not(feature = "cli"))]
pub fn run_cpilens<I, T>(_args: I) -> CpilensResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    eprintln!("Error: CLI is not enabled. Compile with the 'cli' feature to use this binary.");
    std::process::exit(1);
}

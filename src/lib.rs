mod app;
mod columns_filter;
mod csv;
mod delimiter;
mod errors;
mod find;
mod help;
mod input;
mod record;
mod runner;
mod sort;
mod view;

pub use errors::{CpilensError, CpilensResult};
pub use runner::{CpilensOptions, run_cpilens, run_cpilens_with_options};

#[doc(hidden)]
pub mod bench_api {
    pub use crate::record::Record;
    pub use crate::sort::{SortField, SortOrder, SortStats, bubble_sort};
}

//! Data module - remote CSV loading, caching, filtering

mod cache;
mod filter;
mod loader;
mod report;

pub use cache::FetchCache;
pub use filter::{annotate, cell_str, filter_rows, missing_dsps_label, FilterError, ReportTable};
pub use loader::{parse_csv, DataLoader, LoaderError};
pub use report::{
    store_link, Predicate, ReportKind, ReportSpec, DSPS, MISSING_DSPS_COLUMN, STORE_COLUMN,
    UNNAMED_STORE,
};

//! Stats module - summary metrics

mod summary;

pub use summary::{ReportSummary, SummaryCalculator};

//! Summary Metrics Module
//! Aggregate counts shown above the report table.

use std::collections::BTreeSet;

use polars::prelude::*;

use crate::data::{cell_str, DSPS};

/// Scalar aggregates for one report's matching rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub matching_stores: usize,
    /// Distinct non-null company names.
    pub companies: usize,
    /// (DSP name, rows with that identifier absent), in platform order.
    pub missing_by_dsp: Vec<(String, usize)>,
}

pub struct SummaryCalculator;

impl SummaryCalculator {
    /// Aggregate counts over the rows that matched a report's predicates.
    pub fn summarize(matched: &DataFrame) -> ReportSummary {
        let height = matched.height();

        let companies = match matched.column("company_name") {
            Ok(col) => {
                let mut seen = BTreeSet::new();
                for idx in 0..height {
                    if let Some(name) = cell_str(col, idx) {
                        seen.insert(name);
                    }
                }
                seen.len()
            }
            Err(_) => 0,
        };

        let missing_by_dsp = DSPS
            .iter()
            .map(|dsp| {
                let count = match matched.column(dsp.id_column) {
                    Ok(col) => (0..height).filter(|&idx| cell_str(col, idx).is_none()).count(),
                    // Column absent from the source: every row is missing it.
                    Err(_) => height,
                };
                (dsp.name.to_string(), count)
            })
            .collect();

        ReportSummary {
            matching_stores: height,
            companies,
            missing_by_dsp,
        }
    }
}

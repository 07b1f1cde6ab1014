//! Filter/Annotate Module
//! Row predicate evaluation and derived-column construction.

use polars::prelude::*;
use thiserror::Error;

use super::report::{
    store_link, Predicate, ReportSpec, DSPS, MISSING_DSPS_COLUMN, STORE_COLUMN, UNNAMED_STORE,
};

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// A filtered, annotated report ready for display.
///
/// `store_links` is row-aligned with `frame`; an entry is `None` when the
/// row has no `store_id` to link to.
pub struct ReportTable {
    pub frame: DataFrame,
    pub store_links: Vec<Option<String>>,
}

/// Read a cell as a trimmed string, treating nulls and blanks as absent.
pub fn cell_str(col: &Column, idx: usize) -> Option<String> {
    let val = col.get(idx).ok()?;
    if val.is_null() {
        return None;
    }
    let text = val.to_string();
    let text = text.trim_matches('"').trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn predicate_holds(df: &DataFrame, pred: &Predicate, idx: usize) -> bool {
    match pred {
        // An absent column is uniformly blank, so the row counts as missing.
        Predicate::Missing { field } => match df.column(field) {
            Ok(col) => cell_str(col, idx).is_none(),
            Err(_) => true,
        },
        // A required state cannot be confirmed on an absent column.
        Predicate::EqualsIgnoreCase { field, value } => match df.column(field) {
            Ok(col) => cell_str(col, idx)
                .map(|s| s.eq_ignore_ascii_case(value.trim()))
                .unwrap_or(false),
            Err(_) => false,
        },
    }
}

/// Build the row mask for a report: every `all_of` predicate holds, and at
/// least one `any_of` predicate holds unless that set is empty.
pub fn matching_mask(df: &DataFrame, spec: &ReportSpec) -> BooleanChunked {
    let mask: Vec<bool> = (0..df.height())
        .map(|idx| {
            spec.all_of.iter().all(|p| predicate_holds(df, p, idx))
                && (spec.any_of.is_empty()
                    || spec.any_of.iter().any(|p| predicate_holds(df, p, idx)))
        })
        .collect();
    BooleanChunked::from_slice("mask".into(), &mask)
}

/// Rows matching the report's predicates, ordered by store name.
pub fn filter_rows(df: &DataFrame, spec: &ReportSpec) -> Result<DataFrame, FilterError> {
    let mask = matching_mask(df, spec);
    let matched = df.filter(&mask)?;
    if matched.column("store_name").is_ok() {
        let options = SortMultipleOptions::default().with_nulls_last(true);
        Ok(matched.sort(["store_name"], options)?)
    } else {
        Ok(matched)
    }
}

/// Summarize which DSP identifiers are absent for a row.
pub fn missing_dsps_label(df: &DataFrame, idx: usize) -> String {
    let missing: Vec<&str> = DSPS
        .iter()
        .filter(|d| {
            df.column(d.id_column)
                .map(|col| cell_str(col, idx).is_none())
                .unwrap_or(true)
        })
        .map(|d| d.name)
        .collect();

    if missing.len() == DSPS.len() {
        let shorts: Vec<&str> = DSPS.iter().map(|d| d.short).collect();
        format!("All ({})", shorts.join(", "))
    } else if missing.is_empty() {
        "None".to_string()
    } else {
        missing.join(", ")
    }
}

/// Attach derived columns and select the display columns in order.
///
/// Requested columns absent from the source are silently skipped; the
/// derived `Store` and `Missing DSPs` columns are built here.
pub fn annotate(matched: &DataFrame, spec: &ReportSpec) -> Result<ReportTable, FilterError> {
    let height = matched.height();
    let name_col = matched.column("store_name").ok();
    let id_col = matched.column("store_id").ok();

    let mut labels: Vec<String> = Vec::with_capacity(height);
    let mut links: Vec<Option<String>> = Vec::with_capacity(height);
    for idx in 0..height {
        let label = name_col
            .and_then(|col| cell_str(col, idx))
            .unwrap_or_else(|| UNNAMED_STORE.to_string());
        labels.push(label);
        links.push(
            id_col
                .and_then(|col| cell_str(col, idx))
                .map(|id| store_link(&id)),
        );
    }

    let wants_summary = spec
        .display_columns
        .iter()
        .any(|c| c.as_str() == MISSING_DSPS_COLUMN);
    let summaries: Vec<String> = if wants_summary {
        (0..height).map(|idx| missing_dsps_label(matched, idx)).collect()
    } else {
        Vec::new()
    };

    let mut columns: Vec<Column> = Vec::new();
    for name in &spec.display_columns {
        if name.as_str() == STORE_COLUMN {
            columns.push(Column::new(STORE_COLUMN.into(), labels.clone()));
        } else if name.as_str() == MISSING_DSPS_COLUMN {
            columns.push(Column::new(MISSING_DSPS_COLUMN.into(), summaries.clone()));
        } else if let Ok(col) = matched.column(name) {
            columns.push(col.clone());
        }
    }

    Ok(ReportTable {
        frame: DataFrame::new(columns)?,
        store_links: links,
    })
}

//! Remote CSV Loader Module
//! Fetches the source CSV over HTTP and parses it with Polars.

use std::io::Cursor;
use std::time::Duration;

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to fetch CSV: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Source contained no rows")]
    Empty,
}

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches and parses the remote coverage CSV.
#[derive(Clone)]
pub struct DataLoader {
    client: reqwest::blocking::Client,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Fetch the CSV at `url` and parse it. Blank cells come back as nulls.
    pub fn load(&self, url: &str) -> Result<DataFrame, LoaderError> {
        log::info!("fetching {url}");
        let body = self
            .client
            .get(url)
            .timeout(FETCH_TIMEOUT)
            .send()?
            .error_for_status()?
            .bytes()?;

        let df = parse_csv(&body)?;
        log::info!(
            "loaded {} rows, {} columns from {url}",
            df.height(),
            df.width()
        );
        Ok(df)
    }
}

/// Parse CSV bytes into a DataFrame with an inferred schema.
pub fn parse_csv(bytes: &[u8]) -> Result<DataFrame, LoaderError> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    if df.height() == 0 {
        return Err(LoaderError::Empty);
    }

    normalize_blanks(&mut df)?;
    Ok(df)
}

/// Rewrite empty and whitespace-only string cells as nulls so downstream
/// predicates treat "blank" and "absent" uniformly.
fn normalize_blanks(df: &mut DataFrame) -> PolarsResult<()> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for name in names {
        let cleaned: Vec<Option<String>> = {
            let col = df.column(&name)?;
            if col.dtype() != &DataType::String {
                continue;
            }
            let ca = col.as_materialized_series().str()?;
            ca.into_iter()
                .map(|v| v.filter(|s| !s.trim().is_empty()).map(|s| s.to_string()))
                .collect()
        };
        df.with_column(Column::new(name.as_str().into(), cleaned))?;
    }
    Ok(())
}

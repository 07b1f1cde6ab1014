//! CSV Export Module
//! Byte-serialization of the displayed frame and the save-dialog flow.

use std::path::{Path, PathBuf};

use anyhow::Context;
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Serialize a frame to CSV bytes, header row included.
pub fn to_csv_bytes(frame: &DataFrame) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    let mut df = frame.clone();
    CsvWriter::new(&mut buf).include_header(true).finish(&mut df)?;
    Ok(buf)
}

pub fn write_csv(frame: &DataFrame, path: &Path) -> anyhow::Result<()> {
    let bytes = to_csv_bytes(frame).context("serializing report to CSV")?;
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Ask for a destination seeded with `default_name`, write the frame there,
/// and open the result with the system default app. Returns `None` when the
/// user cancels the dialog.
pub fn save_csv_dialog(frame: &DataFrame, default_name: &str) -> anyhow::Result<Option<PathBuf>> {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("CSV Files", &["csv"])
        .set_file_name(default_name)
        .save_file()
    else {
        return Ok(None);
    };

    write_csv(frame, &path)?;
    log::info!("exported report to {}", path.display());

    if let Err(err) = open::that(&path) {
        log::warn!("could not open {}: {err}", path.display());
    }
    Ok(Some(path))
}

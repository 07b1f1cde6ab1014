//! Table module - typed cells, styling, CSV export

mod cell;
mod export;

pub use cell::{style_for, CellStyle, CellValue, LINK_COLOR, NUMERIC_COLOR};
pub use export::{save_csv_dialog, to_csv_bytes, write_csv, ExportError};

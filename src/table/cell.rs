//! Table Cell Module
//! Typed cell values and the pure cell-to-style mapping.

use egui::Color32;

/// Anchor color for store links.
pub const LINK_COLOR: Color32 = Color32::from_rgb(0, 104, 201);

/// Numeric-looking status cells render in this green.
pub const NUMERIC_COLOR: Color32 = Color32::from_rgb(40, 167, 69);

/// A single table cell after classification.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Text(String),
    /// Numeric-looking cell; keeps the source text for display.
    Numeric(f64, String),
    Link { label: String, url: String },
}

impl CellValue {
    /// Classify an already-normalized cell. A non-blank string that parses
    /// as a float counts as numeric.
    pub fn classify(value: Option<String>) -> Self {
        match value {
            None => CellValue::Missing,
            Some(text) => match text.trim().parse::<f64>() {
                Ok(number) => CellValue::Numeric(number, text),
                Err(_) => CellValue::Text(text),
            },
        }
    }

    pub fn display_text(&self) -> &str {
        match self {
            CellValue::Missing => "\u{2013}",
            CellValue::Text(text) => text,
            CellValue::Numeric(_, text) => text,
            CellValue::Link { label, .. } => label,
        }
    }
}

/// Style directive for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub color: Option<Color32>,
    pub bold: bool,
    pub dimmed: bool,
}

/// Map a cell to its style. Pure; evaluated once per cell per render.
pub fn style_for(cell: &CellValue) -> CellStyle {
    match cell {
        CellValue::Missing => CellStyle {
            color: None,
            bold: false,
            dimmed: true,
        },
        CellValue::Text(_) => CellStyle {
            color: None,
            bold: false,
            dimmed: false,
        },
        CellValue::Numeric(..) => CellStyle {
            color: Some(NUMERIC_COLOR),
            bold: true,
            dimmed: false,
        },
        CellValue::Link { .. } => CellStyle {
            color: Some(LINK_COLOR),
            bold: false,
            dimmed: false,
        },
    }
}

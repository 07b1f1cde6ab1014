//! Table View Widget
//! Central panel: summary metric tiles, the styled report table, and the
//! raw-data section. Holds the per-report load state.

use std::collections::HashMap;

use egui::{Color32, RichText, ScrollArea};
use polars::prelude::DataFrame;

use crate::data::{cell_str, ReportKind, ReportSpec, ReportTable, STORE_COLUMN};
use crate::stats::ReportSummary;
use crate::table::{style_for, CellValue, LINK_COLOR};

/// Rows of the raw-data section shown before truncating.
const RAW_PREVIEW_ROWS: usize = 200;

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
const OK_COLOR: Color32 = Color32::from_rgb(40, 167, 69);

/// A fully built report: configuration, display table, aggregates.
pub struct ReportView {
    pub spec: ReportSpec,
    pub table: ReportTable,
    pub summary: ReportSummary,
}

/// Per-report render state: loading, then loaded or load-failed.
pub enum ReportState {
    Loading,
    Loaded(ReportView),
    Failed(String),
}

/// Central panel rendering the selected report.
#[derive(Default)]
pub struct TableView {
    views: HashMap<ReportKind, ReportState>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_state(&self, kind: ReportKind) -> bool {
        self.views.contains_key(&kind)
    }

    pub fn set_state(&mut self, kind: ReportKind, state: ReportState) {
        self.views.insert(kind, state);
    }

    /// The loaded view for a report, if any.
    pub fn view(&self, kind: ReportKind) -> Option<&ReportView> {
        match self.views.get(&kind) {
            Some(ReportState::Loaded(view)) => Some(view),
            _ => None,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, kind: ReportKind, raw: Option<&DataFrame>) {
        match self.views.get(&kind) {
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No data loaded").size(18.0).weak());
                });
            }
            Some(ReportState::Loading) => {
                ui.centered_and_justified(|ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Loading report\u{2026}").size(16.0));
                    });
                });
            }
            Some(ReportState::Failed(message)) => {
                Self::draw_load_warning(ui, message);
            }
            Some(ReportState::Loaded(view)) => {
                ui.add_space(6.0);
                ui.label(RichText::new(&view.spec.title).size(20.0).strong());
                ui.label(RichText::new(&view.spec.blurb).size(12.0).weak());
                ui.add_space(8.0);

                Self::draw_summary_row(ui, &view.summary);
                ui.add_space(8.0);

                if view.table.frame.height() == 0 {
                    ui.label(
                        RichText::new("No stores match the criteria.")
                            .size(14.0)
                            .color(OK_COLOR),
                    );
                } else {
                    ui.label(
                        RichText::new(format!(
                            "Found {} stores matching criteria",
                            view.summary.matching_stores
                        ))
                        .size(13.0)
                        .color(OK_COLOR),
                    );
                    ui.add_space(6.0);
                    Self::draw_table(ui, &view.table);
                }

                if let Some(raw) = raw {
                    ui.add_space(10.0);
                    Self::draw_raw_section(ui, raw);
                }
            }
        }
    }

    fn draw_load_warning(ui: &mut egui::Ui, message: &str) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(2.0, ERROR_COLOR))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new("\u{26a0} Could not load data from the source")
                        .size(16.0)
                        .strong()
                        .color(ERROR_COLOR),
                );
                ui.label(RichText::new(message).size(12.0).weak());
                ui.label(
                    RichText::new("Use Refresh Now to try again.")
                        .size(12.0)
                        .weak(),
                );
            });
    }

    fn draw_summary_row(ui: &mut egui::Ui, summary: &ReportSummary) {
        ui.horizontal_wrapped(|ui| {
            Self::metric_tile(ui, "Matching Stores", summary.matching_stores.to_string());
            Self::metric_tile(ui, "Companies", summary.companies.to_string());
            for (dsp, count) in &summary.missing_by_dsp {
                Self::metric_tile(ui, &format!("Missing {dsp}"), count.to_string());
            }
        });
    }

    fn metric_tile(ui: &mut egui::Ui, label: &str, value: String) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(6.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(value).size(20.0).strong());
                    ui.label(RichText::new(label).size(11.0).color(Color32::GRAY));
                });
            });
        ui.add_space(6.0);
    }

    fn draw_table(ui: &mut egui::Ui, table: &ReportTable) {
        let frame = &table.frame;
        let columns = frame.get_columns();

        ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("report_table")
                    .striped(true)
                    .min_col_width(90.0)
                    .spacing([14.0, 6.0])
                    .show(ui, |ui| {
                        for col in columns {
                            ui.label(RichText::new(col.name().as_str()).strong().size(12.0));
                        }
                        ui.end_row();

                        for row in 0..frame.height() {
                            for col in columns {
                                let is_store = col.name().as_str() == STORE_COLUMN;
                                let cell = match table.store_links.get(row) {
                                    Some(Some(url)) if is_store => CellValue::Link {
                                        label: cell_str(col, row)
                                            .unwrap_or_else(|| "\u{2013}".to_string()),
                                        url: url.clone(),
                                    },
                                    _ => CellValue::classify(cell_str(col, row)),
                                };
                                Self::draw_cell(ui, &cell);
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    fn draw_cell(ui: &mut egui::Ui, cell: &CellValue) {
        if let CellValue::Link { label, url } = cell {
            ui.hyperlink_to(RichText::new(label).size(12.0).color(LINK_COLOR), url);
            return;
        }

        let style = style_for(cell);
        let mut text = RichText::new(cell.display_text()).size(12.0);
        if style.bold {
            text = text.strong();
        }
        if style.dimmed {
            text = text.weak();
        }
        if let Some(color) = style.color {
            text = text.color(color);
        }
        ui.label(text);
    }

    fn draw_raw_section(ui: &mut egui::Ui, raw: &DataFrame) {
        ui.collapsing(format!("View raw data ({} rows)", raw.height()), |ui| {
            let columns = raw.get_columns();
            let shown = raw.height().min(RAW_PREVIEW_ROWS);

            ScrollArea::both()
                .id_salt("raw_scroll")
                .max_height(300.0)
                .show(ui, |ui| {
                    egui::Grid::new("raw_table")
                        .striped(true)
                        .min_col_width(70.0)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            for col in columns {
                                ui.label(RichText::new(col.name().as_str()).strong().size(11.0));
                            }
                            ui.end_row();

                            for row in 0..shown {
                                for col in columns {
                                    let cell = CellValue::classify(cell_str(col, row));
                                    let mut text =
                                        RichText::new(cell.display_text().to_string()).size(11.0);
                                    if matches!(cell, CellValue::Missing) {
                                        text = text.weak();
                                    }
                                    ui.label(text);
                                }
                                ui.end_row();
                            }
                        });

                    if raw.height() > shown {
                        ui.label(
                            RichText::new(format!("\u{2026} {} more rows", raw.height() - shown))
                                .size(11.0)
                                .weak(),
                        );
                    }
                });
        });
    }
}

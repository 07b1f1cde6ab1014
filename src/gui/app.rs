//! Tracker Main Application
//! Main window wiring the loader, cache, reports and panels together.

use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use egui::SidePanel;
use polars::prelude::DataFrame;
use rayon::prelude::*;

use crate::data::{annotate, filter_rows, DataLoader, FetchCache, ReportKind};
use crate::gui::{ControlPanel, ControlPanelAction, ReportState, ReportView, TableView};
use crate::stats::SummaryCalculator;
use crate::table::save_csv_dialog;

/// Cooperative auto-refresh period.
const AUTO_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Fetch result from the background thread.
enum LoadResult {
    Progress(String),
    Complete { url: String, df: DataFrame },
    Error { url: String, message: String },
}

/// Main application window.
pub struct TrackerApp {
    loader: DataLoader,
    cache: FetchCache,
    control_panel: ControlPanel,
    table_view: TableView,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
    last_refresh: Option<Instant>,
}

impl TrackerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            loader: DataLoader::new(),
            cache: FetchCache::default(),
            control_panel: ControlPanel::new(),
            table_view: TableView::new(),
            load_rx: None,
            is_loading: false,
            last_refresh: None,
        }
    }

    fn current_kind(&self) -> ReportKind {
        self.control_panel.settings.report
    }

    /// Load the selected report if it has never been attempted. A failed
    /// report stays failed until the user refreshes; there is no retry.
    fn ensure_current_loaded(&mut self) {
        let kind = self.current_kind();
        if self.table_view.has_state(kind) {
            return;
        }
        let url = kind.spec().source_url;
        if let Some(df) = self.cache.get(&url) {
            let df = df.clone();
            self.build_views_for_source(&url, &df);
            return;
        }
        self.start_fetch(&url);
    }

    /// Fetch a source CSV on a background thread.
    fn start_fetch(&mut self, url: &str) {
        if self.is_loading {
            return;
        }
        self.is_loading = true;
        for kind in ReportKind::kinds_for_source(url) {
            self.table_view.set_state(kind, ReportState::Loading);
        }
        self.control_panel.set_progress(10.0, "Fetching CSV...");

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        let loader = self.loader.clone();
        let url = url.to_string();

        thread::spawn(move || {
            let _ = tx.send(LoadResult::Progress("Downloading...".to_string()));
            match loader.load(&url) {
                Ok(df) => {
                    let _ = tx.send(LoadResult::Complete { url, df });
                }
                Err(err) => {
                    let _ = tx.send(LoadResult::Error {
                        url,
                        message: err.to_string(),
                    });
                }
            }
        });
    }

    /// Check for fetch results from the background thread.
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.control_panel.set_progress(30.0, &status);
                    }
                    LoadResult::Complete { url, df } => {
                        let rows = df.height();
                        self.cache.insert(&url, df.clone());
                        self.build_views_for_source(&url, &df);
                        self.last_refresh = Some(Instant::now());
                        self.is_loading = false;
                        should_keep_receiver = false;
                        self.control_panel
                            .set_progress(100.0, &format!("Loaded {rows} rows"));
                    }
                    LoadResult::Error { url, message } => {
                        log::warn!("load failed for {url}: {message}");
                        for kind in ReportKind::kinds_for_source(&url) {
                            self.table_view
                                .set_state(kind, ReportState::Failed(message.clone()));
                        }
                        self.is_loading = false;
                        should_keep_receiver = false;
                        self.control_panel
                            .set_progress(0.0, &format!("Error: {message}"));
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Build every report variant fed by this source.
    fn build_views_for_source(&mut self, url: &str, df: &DataFrame) {
        let kinds = ReportKind::kinds_for_source(url);
        let built: Vec<(ReportKind, ReportState)> = kinds
            .par_iter()
            .map(|kind| {
                let spec = kind.spec();
                let state = match filter_rows(df, &spec).and_then(|matched| {
                    let summary = SummaryCalculator::summarize(&matched);
                    annotate(&matched, &spec).map(|table| (table, summary))
                }) {
                    Ok((table, summary)) => ReportState::Loaded(ReportView {
                        spec,
                        table,
                        summary,
                    }),
                    Err(err) => ReportState::Failed(err.to_string()),
                };
                (*kind, state)
            })
            .collect();

        for (kind, state) in built {
            self.table_view.set_state(kind, state);
        }
    }

    /// Manual refresh: invalidate the cache entry and refetch.
    fn handle_refresh(&mut self) {
        let url = self.current_kind().spec().source_url;
        self.cache.invalidate(&url);
        self.start_fetch(&url);
    }

    fn handle_download(&mut self) {
        let kind = self.current_kind();
        let Some(view) = self.table_view.view(kind) else {
            return;
        };

        match save_csv_dialog(&view.table.frame, &view.spec.download_filename) {
            Ok(Some(path)) => {
                self.control_panel
                    .set_progress(100.0, &format!("Saved {}", path.display()));
            }
            Ok(None) => {} // User cancelled
            Err(err) => {
                log::warn!("export failed: {err:#}");
                self.control_panel
                    .set_progress(0.0, &format!("Error: {err}"));
            }
        }
    }

    /// Sleep-then-reload affordance, driven cooperatively from `update`.
    fn tick_auto_refresh(&mut self, ctx: &egui::Context) {
        if !self.control_panel.settings.auto_refresh {
            return;
        }
        ctx.request_repaint_after(Duration::from_secs(1));
        if self.is_loading {
            return;
        }
        let due = self
            .last_refresh
            .is_some_and(|t| t.elapsed() >= AUTO_REFRESH_INTERVAL);
        if due {
            log::info!("auto-refresh: reloading current source");
            self.handle_refresh();
        }
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();
        self.ensure_current_loaded();
        self.tick_auto_refresh(ctx);

        if self.is_loading {
            ctx.request_repaint();
        }

        let kind = self.current_kind();
        self.control_panel.download_enabled = self
            .table_view
            .view(kind)
            .map(|view| view.table.frame.height() > 0)
            .unwrap_or(false);

        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::Refresh => self.handle_refresh(),
                        ControlPanelAction::ReportChanged => self.ensure_current_loaded(),
                        ControlPanelAction::DownloadCsv => self.handle_download(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        let kind = self.current_kind();
        egui::CentralPanel::default().show(ctx, |ui| {
            let raw = self.cache.get(&kind.spec().source_url);
            self.table_view.show(ui, kind, raw);
        });
    }
}

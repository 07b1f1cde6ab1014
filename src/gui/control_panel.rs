//! Control Panel Widget
//! Left side panel with report selection, refresh and export controls.

use egui::{Color32, ComboBox, RichText};

use crate::data::ReportKind;

/// User settings for the dashboard.
#[derive(Clone)]
pub struct UserSettings {
    pub report: ReportKind,
    pub auto_refresh: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            report: ReportKind::MissingAllDsps,
            auto_refresh: false,
        }
    }
}

/// Left side control panel.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub progress: f32,
    pub status: String,
    pub download_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            progress: 0.0,
            status: "Ready".to_string(),
            download_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("\u{1F4CA} DSP Tracker")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Store coverage dashboard")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Report Section =====
        ui.label(RichText::new("\u{1F5C2} Report").size(14.0).strong());
        ui.add_space(5.0);

        ComboBox::from_id_salt("report_kind")
            .width(220.0)
            .selected_text(self.settings.report.label())
            .show_ui(ui, |ui| {
                for kind in ReportKind::ALL {
                    if ui
                        .selectable_label(self.settings.report == kind, kind.label())
                        .clicked()
                        && self.settings.report != kind
                    {
                        self.settings.report = kind;
                        action = ControlPanelAction::ReportChanged;
                    }
                }
            });

        ui.add_space(5.0);
        ui.label(
            RichText::new(self.settings.report.spec().blurb)
                .size(11.0)
                .color(Color32::GRAY),
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let refresh = egui::Button::new(RichText::new("\u{27F3} Refresh Now").size(15.0))
                .min_size(egui::vec2(190.0, 32.0));
            if ui.add(refresh).clicked() {
                action = ControlPanelAction::Refresh;
            }

            ui.add_space(8.0);

            ui.add_enabled_ui(self.download_enabled, |ui| {
                let download =
                    egui::Button::new(RichText::new("\u{1F4E5} Download CSV").size(14.0))
                        .min_size(egui::vec2(190.0, 30.0));
                if ui.add(download).clicked() {
                    action = ControlPanelAction::DownloadCsv;
                }
            });
        });

        ui.add_space(10.0);
        ui.checkbox(
            &mut self.settings.auto_refresh,
            "Auto-refresh every 5 minutes",
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Progress Section =====
        ui.label(RichText::new("\u{1F4C8} Status").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(
            egui::ProgressBar::new(self.progress / 100.0)
                .show_percentage()
                .animate(self.progress > 0.0 && self.progress < 100.0),
        );

        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") || self.status.contains("Saved") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set progress and status.
    pub fn set_progress(&mut self, progress: f32, status: &str) {
        self.progress = progress;
        self.status = status.to_string();
    }
}

/// Actions triggered by the control panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    ReportChanged,
    Refresh,
    DownloadCsv,
}

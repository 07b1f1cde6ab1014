//! GUI module - User interface components

mod app;
mod control_panel;
mod table_view;

pub use app::TrackerApp;
pub use control_panel::{ControlPanel, ControlPanelAction, UserSettings};
pub use table_view::{ReportState, ReportView, TableView};

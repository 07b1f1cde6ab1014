//! Report Configuration Module
//! Each dashboard variant as plain data: predicates, column order, source URL.

use serde::{Deserialize, Serialize};

/// Base location of the published coverage exports.
const DATA_BASE_URL: &str = "https://raw.githubusercontent.com/bradbishop1978/dsp-id-tracker/main";

/// Store pages live under this prefix, keyed by `store_id`.
const STORE_URL_PREFIX: &str = "https://www.lulastoremanager.com/stores/";

/// Name of the derived link-label column.
pub const STORE_COLUMN: &str = "Store";

/// Name of the derived missing-DSP summary column.
pub const MISSING_DSPS_COLUMN: &str = "Missing DSPs";

/// Label substituted when a store has no name.
pub const UNNAMED_STORE: &str = "(unnamed store)";

/// One delivery service platform whose per-store identifier is tracked.
pub struct Dsp {
    pub id_column: &'static str,
    pub status_column: &'static str,
    pub name: &'static str,
    pub short: &'static str,
}

pub const DSPS: [Dsp; 3] = [
    Dsp {
        id_column: "ubereats_id",
        status_column: "ubereats_status",
        name: "UberEats",
        short: "UE",
    },
    Dsp {
        id_column: "doordash_id",
        status_column: "doordash_status",
        name: "DoorDash",
        short: "DD",
    },
    Dsp {
        id_column: "grubhub_id",
        status_column: "grubhub_status",
        name: "Grubhub",
        short: "GH",
    },
];

/// Build the external store-manager link for a store id.
///
/// Ids inferred as floats print like `123.0`; the fractional suffix is
/// stripped so the link stays valid.
pub fn store_link(store_id: &str) -> String {
    let id = store_id.strip_suffix(".0").unwrap_or(store_id);
    format!("{STORE_URL_PREFIX}{id}")
}

/// A single row predicate, evaluated against normalized cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// The field is null (or the column is absent from the source).
    Missing { field: String },
    /// Trimmed, case-insensitive equality on the field.
    EqualsIgnoreCase { field: String, value: String },
}

impl Predicate {
    pub fn missing(field: &str) -> Self {
        Predicate::Missing {
            field: field.to_string(),
        }
    }

    pub fn equals_ci(field: &str, value: &str) -> Self {
        Predicate::EqualsIgnoreCase {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// A dashboard variant described entirely as data.
///
/// A row is included when every `all_of` predicate holds and, unless
/// `any_of` is empty, at least one `any_of` predicate holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSpec {
    pub title: String,
    pub blurb: String,
    pub source_url: String,
    pub all_of: Vec<Predicate>,
    pub any_of: Vec<Predicate>,
    pub display_columns: Vec<String>,
    pub download_filename: String,
}

/// The built-in report variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    MissingAllDsps,
    MissingAnyDsp,
    DspStatus,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::MissingAllDsps,
        ReportKind::MissingAnyDsp,
        ReportKind::DspStatus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::MissingAllDsps => "Missing all DSPs",
            ReportKind::MissingAnyDsp => "Missing any DSP",
            ReportKind::DspStatus => "DSP status report",
        }
    }

    /// Materialize the configuration for this variant.
    pub fn spec(&self) -> ReportSpec {
        let stage_and_status = vec![
            Predicate::equals_ci("pipeline_stage", "pending launch"),
            Predicate::equals_ci("onboarding_status", "inprogress"),
        ];
        let missing_ids: Vec<Predicate> =
            DSPS.iter().map(|d| Predicate::missing(d.id_column)).collect();

        let missing_display: Vec<String> = [
            STORE_COLUMN,
            "company_name",
            MISSING_DSPS_COLUMN,
            "pipeline_stage",
            "onboarding_status",
            "store_status",
            "store_email",
            "store_phone",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        match self {
            ReportKind::MissingAllDsps => {
                let mut all_of = missing_ids;
                all_of.push(Predicate::missing("store_status"));
                all_of.extend(stage_and_status);
                ReportSpec {
                    title: "Stores missing every DSP ID".to_string(),
                    blurb: "Pending-launch stores with no UberEats, DoorDash or Grubhub ID \
                            and a blank store status."
                        .to_string(),
                    source_url: format!("{DATA_BASE_URL}/dsp_id.csv"),
                    all_of,
                    any_of: Vec::new(),
                    display_columns: missing_display,
                    download_filename: "missing_dsp_stores.csv".to_string(),
                }
            }
            ReportKind::MissingAnyDsp => ReportSpec {
                title: "Stores missing at least one DSP ID".to_string(),
                blurb: "Pending-launch stores with one or more DSP IDs still unassigned."
                    .to_string(),
                source_url: format!("{DATA_BASE_URL}/dsp_id.csv"),
                all_of: stage_and_status,
                any_of: missing_ids,
                display_columns: missing_display,
                download_filename: "missing_dsp_stores.csv".to_string(),
            },
            ReportKind::DspStatus => {
                let mut display = vec![STORE_COLUMN.to_string(), "company_name".to_string()];
                display.extend(DSPS.iter().map(|d| d.status_column.to_string()));
                display.extend(
                    ["pipeline_stage", "onboarding_status", "store_status"]
                        .iter()
                        .map(|s| s.to_string()),
                );
                ReportSpec {
                    title: "DSP status report".to_string(),
                    blurb: "Per-store status across all delivery platforms.".to_string(),
                    source_url: format!("{DATA_BASE_URL}/dsp_status_report.csv"),
                    all_of: Vec::new(),
                    any_of: Vec::new(),
                    display_columns: display,
                    download_filename: "dsp_status_report.csv".to_string(),
                }
            }
        }
    }

    /// Variants fed by the given source URL.
    pub fn kinds_for_source(url: &str) -> Vec<ReportKind> {
        Self::ALL
            .iter()
            .copied()
            .filter(|k| k.spec().source_url == url)
            .collect()
    }
}

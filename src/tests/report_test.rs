//! Unit tests for the built-in report configurations

use crate::data::{ReportKind, ReportSpec, MISSING_DSPS_COLUMN, STORE_COLUMN};

#[test]
fn test_missing_reports_share_id_source() {
    let all = ReportKind::MissingAllDsps.spec();
    let any = ReportKind::MissingAnyDsp.spec();
    assert_eq!(all.source_url, any.source_url);
    assert!(all.source_url.ends_with("dsp_id.csv"));
}

#[test]
fn test_status_report_uses_status_source() {
    let spec = ReportKind::DspStatus.spec();
    assert!(spec.source_url.ends_with("dsp_status_report.csv"));
    assert_eq!(spec.download_filename, "dsp_status_report.csv");
}

#[test]
fn test_missing_reports_download_filename() {
    for kind in [ReportKind::MissingAllDsps, ReportKind::MissingAnyDsp] {
        assert_eq!(kind.spec().download_filename, "missing_dsp_stores.csv");
    }
}

#[test]
fn test_kinds_for_source_groups_variants() {
    let id_url = ReportKind::MissingAllDsps.spec().source_url;
    assert_eq!(
        ReportKind::kinds_for_source(&id_url),
        vec![ReportKind::MissingAllDsps, ReportKind::MissingAnyDsp]
    );

    let status_url = ReportKind::DspStatus.spec().source_url;
    assert_eq!(
        ReportKind::kinds_for_source(&status_url),
        vec![ReportKind::DspStatus]
    );
}

#[test]
fn test_missing_reports_display_derived_columns() {
    for kind in [ReportKind::MissingAllDsps, ReportKind::MissingAnyDsp] {
        let spec = kind.spec();
        assert_eq!(spec.display_columns[0], STORE_COLUMN);
        assert!(spec
            .display_columns
            .iter()
            .any(|c| c == MISSING_DSPS_COLUMN));
    }
}

#[test]
fn test_all_missing_variant_conjunction_only() {
    let spec = ReportKind::MissingAllDsps.spec();
    assert!(spec.any_of.is_empty());
    // Three id checks, the status check, plus the two stage predicates.
    assert_eq!(spec.all_of.len(), 6);
}

#[test]
fn test_any_missing_variant_uses_disjunction() {
    let spec = ReportKind::MissingAnyDsp.spec();
    assert_eq!(spec.any_of.len(), 3);
    assert_eq!(spec.all_of.len(), 2);
}

#[test]
fn test_spec_serde_round_trip() {
    let spec = ReportKind::MissingAnyDsp.spec();
    let json = serde_json::to_string(&spec).unwrap();
    let back: ReportSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);
}

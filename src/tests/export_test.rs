//! CSV export round-trip tests

use crate::data::{cell_str, parse_csv, ReportKind};
use crate::table::to_csv_bytes;

use super::fixtures::build_report;

#[test]
fn test_export_includes_header_row() {
    let table = build_report(ReportKind::MissingAnyDsp);
    let bytes = to_csv_bytes(&table.frame).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.contains("Store"));
    assert!(header.contains("Missing DSPs"));
}

#[test]
fn test_export_then_reparse_preserves_rows_and_values() {
    let table = build_report(ReportKind::MissingAnyDsp);
    let bytes = to_csv_bytes(&table.frame).unwrap();
    let reparsed = parse_csv(&bytes).unwrap();

    assert_eq!(reparsed.height(), table.frame.height());

    let original_names: Vec<String> = table
        .frame
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let reparsed_names: Vec<String> = reparsed
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(reparsed_names, original_names);

    for name in &original_names {
        let before = table.frame.column(name).unwrap();
        let after = reparsed.column(name).unwrap();
        for row in 0..table.frame.height() {
            assert_eq!(
                cell_str(after, row),
                cell_str(before, row),
                "cell mismatch at {name}[{row}]"
            );
        }
    }
}

#[test]
fn test_comma_bearing_summary_survives_round_trip() {
    let table = build_report(ReportKind::MissingAllDsps);
    let bytes = to_csv_bytes(&table.frame).unwrap();
    let reparsed = parse_csv(&bytes).unwrap();

    let summaries = reparsed.column("Missing DSPs").unwrap();
    assert_eq!(cell_str(summaries, 0), Some("All (UE, DD, GH)".to_string()));
}

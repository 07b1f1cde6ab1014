//! Unit tests for CSV parsing and blank normalization

use crate::data::{cell_str, parse_csv, DataLoader, LoaderError};

const SAMPLE: &[u8] = b"store_id,store_name,ubereats_id,doordash_id\n\
1,Alpha,,dd-1\n\
2,   ,ue-2,dd-2\n\
3,Gamma,ue-3,\n";

#[test]
fn test_parse_csv_basic_shape() {
    let df = parse_csv(SAMPLE).unwrap();
    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 4);
}

#[test]
fn test_blank_cells_normalized_to_null() {
    let df = parse_csv(SAMPLE).unwrap();
    let ue = df.column("ubereats_id").unwrap();
    assert_eq!(cell_str(ue, 0), None);
    assert_eq!(cell_str(ue, 1), Some("ue-2".to_string()));
}

#[test]
fn test_whitespace_only_cells_normalized_to_null() {
    let df = parse_csv(SAMPLE).unwrap();
    let names = df.column("store_name").unwrap();
    assert_eq!(cell_str(names, 0), Some("Alpha".to_string()));
    assert_eq!(cell_str(names, 1), None);
}

#[test]
fn test_numeric_ids_still_readable_as_text() {
    let df = parse_csv(SAMPLE).unwrap();
    let ids = df.column("store_id").unwrap();
    assert_eq!(cell_str(ids, 0), Some("1".to_string()));
}

#[test]
fn test_header_only_source_is_empty_error() {
    let err = parse_csv(b"store_id,store_name\n").unwrap_err();
    assert!(matches!(err, LoaderError::Empty));
}

#[test]
fn test_invalid_url_is_load_failure_not_panic() {
    // Simulated network failure: the request never leaves the process.
    let loader = DataLoader::new();
    let result = loader.load("not a url");
    assert!(matches!(result, Err(LoaderError::Http(_))));
}

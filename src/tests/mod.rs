//! Test modules for the DSP tracker
//!
//! ## Test Categories
//!
//! - **Unit Tests**: Individual module functionality
//!   - `cache_test` - Fetch cache TTL and invalidation
//!   - `cell_test` - Cell classification and styling
//!   - `filter_test` - Predicate masks and derived columns
//!   - `loader_test` - CSV parsing and blank normalization
//!   - `report_test` - Built-in report configurations
//!   - `summary_test` - Aggregate metric counts
//!
//! - **Integration Tests**: Cross-module functionality
//!   - `export_test` - CSV export round-trip
//!   - `integration_test` - Bytes-to-report pipeline
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all tests
//! cargo test
//!
//! # Run specific test module
//! cargo test filter_test
//! ```





#[cfg(test)]
pub mod loader_test;

#[cfg(test)]
pub mod report_test;


#[cfg(test)]
pub mod export_test;

#[cfg(test)]
pub mod integration_test;

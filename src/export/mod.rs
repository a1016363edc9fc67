//! Export module for spendlog
//!
//! Writes expenses out as CSV for spreadsheets.

pub mod csv;

pub use self::csv::{export_csv, write_csv, CSV_HEADER};

//! Storage layer for spendlog
//!
//! Provides JSON file storage with atomic writes, automatic directory creation
//! and load results that distinguish missing data from damaged data.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, JsonExpenseStore, MemoryExpenseStore};
pub use file_io::{read_json, write_json_atomic, LoadOutcome};

use crate::config::paths::SpendPaths;

/// Open the JSON expense store at its standard location
pub fn open_json_store(paths: &SpendPaths) -> JsonExpenseStore {
    JsonExpenseStore::new(paths.expenses_file())
}

//! spendlog - Terminal expense tracker
//!
//! This library provides the core functionality for the spendlog expense
//! tracker: recording discretionary spending under a fixed set of
//! categories, searching and filtering it, and summarizing it against a
//! monthly budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense record, category registry and date layouts
//! - `storage`: JSON file storage layer
//! - `services`: Record engine and search/filter pipeline
//! - `reports`: Budget summary and chart series
//! - `export`: CSV export
//! - `display`, `cli`: Terminal front end
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::{SpendPaths, Settings};
//! use spendlog::services::{CreateExpenseInput, ExpenseService};
//! use spendlog::storage::open_json_store;
//!
//! let paths = SpendPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut service = ExpenseService::open(open_json_store(&paths));
//! service.add(CreateExpenseInput::new("Lunch", 12.5, "Food", "15-01-2024"))?;
//! let summary = spendlog::reports::summarize(service.expenses(), settings.monthly_budget);
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendError, SpendResult};

static INIT_TRACING: Once = Once::new();

/// Install the global tracing subscriber
///
/// Defaults to warnings from this crate; `RUST_LOG` adds or overrides
/// directives. Safe to call more than once.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("spendlog=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

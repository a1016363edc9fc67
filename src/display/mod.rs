//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and chart series for terminal
//! display.

pub mod expense;
pub mod report;

pub use expense::{format_amount, format_expense_line, format_expense_table, AmountTier};
pub use report::{format_bar, format_bar_chart};

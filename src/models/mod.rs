//! Core data models for spendlog
//!
//! This module contains the expense record, the fixed category registry and
//! the date layouts records may use.

pub mod category;
pub mod date;
pub mod expense;

pub use category::Category;
pub use expense::{parse_amount, Expense};

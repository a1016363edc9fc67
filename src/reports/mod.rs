//! Reports module for spendlog
//!
//! Provides the budget summary and the aggregated series used for charts.

pub mod chart;
pub mod summary;

pub use chart::{aggregate_by_category, aggregate_by_day, aggregate_by_month};
pub use summary::{
    format_summary, summarize, BudgetStatus, CategoryTotal, Summary, DAYS_PER_MONTH,
};

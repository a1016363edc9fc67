//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod expense;
pub mod report;

pub use config::{handle_config_command, ConfigCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_report_command, ReportCommands};

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::models::category;
use crate::models::Expense;
use crate::services::{ExpenseFilter, ExpenseService};
use crate::storage::ExpenseStore;

/// Search and filter options shared by listing, reporting and export
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keyword matched against name and category
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Category key or display label
    #[arg(short, long)]
    pub category: Option<String>,

    /// Start date, inclusive (YYYY-MM-DD or DD-MM-YYYY)
    #[arg(long)]
    pub from: Option<String>,

    /// End date, inclusive (YYYY-MM-DD or DD-MM-YYYY)
    #[arg(long)]
    pub to: Option<String>,

    /// Only today's expenses
    #[arg(long, conflicts_with_all = ["from", "to", "week", "month"])]
    pub today: bool,

    /// The last 7 days, including today
    #[arg(long, conflicts_with_all = ["from", "to", "month"])]
    pub week: bool,

    /// This month so far
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub month: bool,
}

impl FilterArgs {
    /// Build the filter, resolving date shortcuts against `today`
    pub fn to_filter(&self, today: NaiveDate) -> ExpenseFilter {
        let mut filter = ExpenseFilter::new();

        if let Some(keyword) = &self.keyword {
            filter = filter.keyword(keyword.clone());
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.trim().is_empty()) {
            filter = filter.category(category::from_display(category.trim()));
        }

        if self.today {
            filter = filter.today(today);
        } else if self.week {
            filter = filter.last_7_days(today);
        } else if self.month {
            filter = filter.this_month(today);
        } else {
            filter.start_date = self.from.clone();
            filter.end_date = self.to.clone();
        }

        filter
    }
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Apply `filters` to the service's collection, pairing each match with its
/// canonical index
pub fn filtered_view<'a, S: ExpenseStore>(
    service: &'a ExpenseService<S>,
    filters: &FilterArgs,
) -> Vec<(usize, &'a Expense)> {
    filters
        .to_filter(today())
        .apply(service.expenses())
        .into_iter()
        .filter_map(|e| service.resolve_index(e).map(|i| (i, e)))
        .collect()
}

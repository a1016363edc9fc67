//! Service layer for spendlog
//!
//! The service layer provides the business logic on top of the storage layer:
//! validated mutations of the expense collection and the search/filter
//! pipeline over it.

pub mod expense;
pub mod query;

pub use expense::{CreateExpenseInput, ExpenseService};
pub use query::{filter_by_category_and_date, search, search_and_filter, ExpenseFilter};

//! Expense display formatting
//!
//! Renders the expense list as a table. Rows carry the canonical index so the
//! numbers shown can be passed straight to `edit` and `delete`.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{category, Expense};

/// Rough size of an expense, used to colour amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountTier {
    Small,
    Medium,
    Large,
}

impl AmountTier {
    /// Below 100 is small, below 500 is medium, the rest is large
    pub fn of(amount: f64) -> Self {
        if amount < 100.0 {
            Self::Small
        } else if amount < 500.0 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    fn ansi_color(&self) -> &'static str {
        match self {
            Self::Small => "32",
            Self::Medium => "33",
            Self::Large => "31",
        }
    }
}

/// Format an amount with its currency symbol, optionally coloured by tier
pub fn format_amount(amount: f64, currency_symbol: &str, color: bool) -> String {
    let text = format!("{}{:.2}", currency_symbol, amount);
    if color {
        format!("\x1b[{}m{}\x1b[0m", AmountTier::of(amount).ansi_color(), text)
    } else {
        text
    }
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format `(canonical index, expense)` pairs as a table
pub fn format_expense_table(
    rows: &[(usize, &Expense)],
    currency_symbol: &str,
    color: bool,
) -> String {
    if rows.is_empty() {
        return "No results found.\n".to_string();
    }

    let table_rows: Vec<ExpenseRow> = rows
        .iter()
        .map(|(index, expense)| ExpenseRow {
            index: index.to_string(),
            date: expense.date.clone(),
            name: expense.name.clone(),
            category: category::to_display(&expense.category).to_string(),
            amount: format_amount(expense.amount, currency_symbol, color),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format one expense for confirmation messages
pub fn format_expense_line(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "{} | {} | {} | {}",
        expense.date,
        expense.name,
        category::to_display(&expense.category),
        format_amount(expense.amount, currency_symbol, false)
    )
}

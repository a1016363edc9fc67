//! Expense CLI commands
//!
//! Implements adding, listing, editing and deleting expenses.

use clap::Subcommand;

use super::{filtered_view, today, FilterArgs};
use crate::config::Settings;
use crate::display::{format_expense_line, format_expense_table};
use crate::error::{SpendError, SpendResult};
use crate::models::{category, date, parse_amount};
use crate::reports::{summarize, BudgetStatus};
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount spent (e.g. "12.50")
        amount: String,
        /// Category key or display label
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD or DD-MM-YYYY, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, optionally searched and filtered
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Disable coloured amounts
        #[arg(long)]
        no_color: bool,
    },

    /// Edit the expense at an index shown by `list`
    Edit {
        /// Expense index
        index: usize,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category key or display label
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete the expense at an index shown by `list`
    #[command(alias = "rm")]
    Delete {
        /// Expense index
        index: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: ExpenseStore>(
    service: &mut ExpenseService<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SpendResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = date.unwrap_or_else(|| date::format_day_first(today()));
            warn_if_undated(&date);

            let input = CreateExpenseInput::new(
                name.trim(),
                amount,
                category::from_display(category.trim()),
                date,
            );
            let index = service.add(input)?;

            if let Some(expense) = service.get(index) {
                println!("Added expense #{}: {}", index, format_expense_line(expense, currency));
            }

            let summary = summarize(service.expenses(), settings.monthly_budget);
            if let Some(message) =
                BudgetStatus::classify(summary.total_spent, settings.monthly_budget).message()
            {
                println!("{}", message);
            }
        }

        ExpenseCommands::List { filters, no_color } => {
            let rows = filtered_view(service, &filters);
            print!("{}", format_expense_table(&rows, currency, !no_color));
            println!("{} of {} expenses", rows.len(), service.len());
        }

        ExpenseCommands::Edit {
            index,
            name,
            amount,
            category,
            date,
        } => {
            let mut expense = service
                .get(index)
                .cloned()
                .ok_or_else(|| SpendError::index_out_of_range(index, service.len()))?;

            if let Some(name) = name {
                expense.name = name.trim().to_string();
            }
            if let Some(amount) = amount {
                expense.amount = parse_amount(&amount)?;
            }
            if let Some(category) = category {
                expense.category = category::from_display(category.trim()).to_string();
            }
            if let Some(date) = date {
                warn_if_undated(&date);
                expense.date = date;
            }

            service.update(index, expense)?;
            if let Some(expense) = service.get(index) {
                println!("Updated expense #{}: {}", index, format_expense_line(expense, currency));
            }
        }

        ExpenseCommands::Delete { index } => {
            let removed = service.delete(index)?;
            println!("Deleted expense: {}", format_expense_line(&removed, currency));
        }
    }

    Ok(())
}

fn warn_if_undated(date_text: &str) {
    if date::parse_flexible(date_text).is_none() {
        println!(
            "Note: '{}' is not a YYYY-MM-DD or DD-MM-YYYY date; \
             this expense will not match date filters.",
            date_text
        );
    }
}

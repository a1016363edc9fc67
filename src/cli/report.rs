//! Report CLI commands
//!
//! Budget summary, text charts and CSV export, each over the whole collection
//! or a filtered view of it.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use super::{filtered_view, FilterArgs};
use crate::config::Settings;
use crate::display::format_bar_chart;
use crate::error::SpendResult;
use crate::export::export_csv;
use crate::models::category;
use crate::reports::{
    aggregate_by_category, aggregate_by_day, aggregate_by_month, format_summary, summarize,
    BudgetStatus,
};
use crate::services::ExpenseService;
use crate::storage::ExpenseStore;

/// Width of chart bars in characters
const CHART_WIDTH: usize = 30;

/// Chart series to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Spending per day (DD-MM-YYYY dates only)
    Day,
    /// Spending per month (DD-MM-YYYY dates only)
    Month,
    /// Spending per category
    Category,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show totals against the monthly budget
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Draw a text bar chart
    Chart {
        /// Which series to chart
        #[arg(value_enum, default_value = "category")]
        kind: ChartKind,
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Export expenses to a CSV file
    Export {
        /// Output file path
        output: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Handle a report command
pub fn handle_report_command<S: ExpenseStore>(
    service: &ExpenseService<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> SpendResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { filters } => {
            let view = filtered_view(service, &filters);
            let summary = summarize(view.iter().map(|(_, e)| *e), settings.monthly_budget);

            println!("{}", format_summary(&summary, currency));
            if let Some(message) =
                BudgetStatus::classify(summary.total_spent, settings.monthly_budget).message()
            {
                println!("\n{}", message);
            }
        }

        ReportCommands::Chart { kind, filters } => {
            let view = filtered_view(service, &filters);
            let expenses = view.iter().map(|(_, e)| *e);

            let (title, rows): (&str, Vec<(String, f64)>) = match kind {
                ChartKind::Day => (
                    "Spending by day",
                    aggregate_by_day(expenses)
                        .into_iter()
                        .map(|(day, total)| (day.format("%Y-%m-%d").to_string(), total))
                        .collect(),
                ),
                ChartKind::Month => (
                    "Spending by month",
                    aggregate_by_month(expenses).into_iter().collect(),
                ),
                ChartKind::Category => (
                    "Spending by category",
                    aggregate_by_category(expenses)
                        .into_iter()
                        .map(|t| (category::to_display(&t.category).to_string(), t.amount))
                        .collect(),
                ),
            };

            print!("{}", format_bar_chart(title, &rows, currency, CHART_WIDTH));
        }

        ReportCommands::Export { output, filters } => {
            let view = filtered_view(service, &filters);
            let rows = export_csv(
                view.iter().map(|(_, e)| *e),
                &output,
                settings.csv_delimiter_byte()?,
            )?;
            println!("Exported {} expenses to {}", rows, output.display());
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_config_command, handle_expense_command, handle_report_command, ConfigCommands,
    ExpenseCommands, ReportCommands,
};
use spendlog::config::{Settings, SpendPaths};
use spendlog::models::Category;
use spendlog::services::ExpenseService;
use spendlog::storage::open_json_store;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Terminal expense tracker",
    long_about = "spendlog records day-to-day spending under a handful of categories, \
                  lets you search and filter it, and shows how much of your monthly \
                  budget is left."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// List the available categories
    Categories,

    /// Settings management commands
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    spendlog::init_tracing();
    let cli = Cli::parse();

    let paths = SpendPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Expense(cmd) => {
            let mut service = ExpenseService::open(open_json_store(&paths));
            handle_expense_command(&mut service, &settings, cmd)?;
        }
        Commands::Report(cmd) => {
            let service = ExpenseService::open(open_json_store(&paths));
            handle_report_command(&service, &settings, cmd)?;
        }
        Commands::Categories => {
            for category in Category::all() {
                println!("{:<6} {}", category.key(), category.label());
            }
        }
        Commands::Config(cmd) => {
            handle_config_command(&paths, &mut settings, cmd)?;
        }
    }

    Ok(())
}

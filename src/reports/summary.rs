//! Budget summary
//!
//! Totals spending per category and overall, and compares the total against
//! the monthly budget.

use crate::models::category;
use crate::models::Expense;

/// Fixed number of days the remaining budget is spread over
///
/// Not calendar-aware: every month counts as 30 days.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Share of the budget at which spending counts as approaching the limit
pub const BUDGET_WARNING_RATIO: f64 = 0.8;

/// Spending total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Internal category key
    pub category: String,
    /// Sum of amounts in this category
    pub amount: f64,
}

/// Spending compared against the monthly budget
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Per-category totals, in order of first appearance
    pub category_totals: Vec<CategoryTotal>,
    /// Sum of all amounts
    pub total_spent: f64,
    /// Monthly budget minus total spent (negative when over budget)
    pub budget_left: f64,
    /// Remaining budget spread over [`DAYS_PER_MONTH`] days
    pub per_day: f64,
}

/// How close spending is to the monthly budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Below [`BUDGET_WARNING_RATIO`] of the budget, or no budget set
    OnTrack,
    /// At least [`BUDGET_WARNING_RATIO`] of the budget but not over it
    Approaching,
    /// Spent the whole budget or more
    Exceeded,
}

impl BudgetStatus {
    /// Classify `total_spent` against `monthly_budget`
    ///
    /// A budget of zero or less disables the check.
    pub fn classify(total_spent: f64, monthly_budget: f64) -> Self {
        if monthly_budget <= 0.0 {
            return Self::OnTrack;
        }
        let ratio = total_spent / monthly_budget;
        if ratio >= 1.0 {
            Self::Exceeded
        } else if ratio >= BUDGET_WARNING_RATIO {
            Self::Approaching
        } else {
            Self::OnTrack
        }
    }

    /// Message for the user, if there is anything to say
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::OnTrack => None,
            Self::Approaching => Some("You've reached 80% of your monthly budget!"),
            Self::Exceeded => Some("You've exceeded your monthly budget!"),
        }
    }
}

/// Group totals by category key, in order of first appearance
pub fn category_totals<'a, I>(expenses: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        add_to_totals(&mut totals, expense);
    }
    totals
}

fn add_to_totals(totals: &mut Vec<CategoryTotal>, expense: &Expense) {
    match totals.iter_mut().find(|t| t.category == expense.category) {
        Some(total) => total.amount += expense.amount,
        None => totals.push(CategoryTotal {
            category: expense.category.clone(),
            amount: expense.amount,
        }),
    }
}

/// Summarize spending against `monthly_budget`
///
/// An empty collection spends nothing, so the full budget is left.
pub fn summarize<'a, I>(expenses: I, monthly_budget: f64) -> Summary
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut category_totals = Vec::new();
    let mut total_spent = 0.0;
    for expense in expenses {
        add_to_totals(&mut category_totals, expense);
        total_spent += expense.amount;
    }
    let budget_left = monthly_budget - total_spent;

    Summary {
        category_totals,
        total_spent,
        budget_left,
        per_day: budget_left / DAYS_PER_MONTH,
    }
}

/// Render a summary as text
///
/// Amounts use two decimals prefixed with `currency_symbol`; categories are
/// shown by display label.
pub fn format_summary(summary: &Summary, currency_symbol: &str) -> String {
    let mut lines = vec![
        format!("Total Spent: {}{:.2}", currency_symbol, summary.total_spent),
        format!("Budget Left: {}{:.2}", currency_symbol, summary.budget_left),
        format!(
            "Daily Limit (approx): {}{:.2}",
            currency_symbol, summary.per_day
        ),
        String::new(),
        "Breakdown by Category:".to_string(),
    ];

    for total in &summary.category_totals {
        lines.push(format!(
            " - {}: {}{:.2}",
            category::to_display(&total.category),
            currency_symbol,
            total.amount
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_food_expense() {
        let expenses = vec![Expense::new("Groceries", 100.0, "Food", "01-01-2024")];

        let summary = summarize(&expenses, 1000.0);

        assert_eq!(summary.total_spent, 100.0);
        assert_eq!(summary.budget_left, 900.0);
        assert_eq!(summary.per_day, 30.0);
        assert_eq!(
            summary.category_totals,
            vec![CategoryTotal {
                category: "Food".into(),
                amount: 100.0
            }]
        );
    }

    #[test]
    fn test_empty_collection() {
        let expenses: Vec<Expense> = Vec::new();
        let summary = summarize(&expenses, 1500.0);
        assert_eq!(summary.total_spent, 0.0);
        assert_eq!(summary.budget_left, 1500.0);
        assert_eq!(summary.per_day, 50.0);
        assert!(summary.category_totals.is_empty());
    }

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let expenses = vec![
            Expense::new("Bus", 3.0, "Work", "01-01-2024"),
            Expense::new("Bread", 2.0, "Food", "01-01-2024"),
            Expense::new("Train", 7.0, "Work", "02-01-2024"),
        ];

        let summary = summarize(&expenses, 100.0);
        let order: Vec<_> = summary
            .category_totals
            .iter()
            .map(|t| t.category.as_str())
            .collect();

        assert_eq!(order, ["Work", "Food"]);
        assert_eq!(summary.category_totals[0].amount, 10.0);
    }

    #[test]
    fn test_over_budget() {
        let expenses = vec![Expense::new("Laptop", 1300.0, "Work", "01-01-2024")];
        let summary = summarize(&expenses, 1000.0);
        assert_eq!(summary.budget_left, -300.0);
        assert_eq!(summary.per_day, -10.0);
    }

    #[test]
    fn test_format_summary() {
        let expenses = vec![
            Expense::new("Groceries", 100.0, "Food", "01-01-2024"),
            Expense::new("Cinema", 12.5, "Fun", "02-01-2024"),
        ];
        let summary = summarize(&expenses, 1000.0);

        let text = format_summary(&summary, "$");

        assert_eq!(
            text,
            "Total Spent: $112.50\n\
             Budget Left: $887.50\n\
             Daily Limit (approx): $29.58\n\
             \n\
             Breakdown by Category:\n \
             - 🍔 Food: $100.00\n \
             - 🎉 Fun: $12.50"
        );
    }

    #[test]
    fn test_format_unknown_category_uses_key() {
        let expenses = vec![Expense::new("Taxi", 20.0, "Travel", "01-01-2024")];
        let text = format_summary(&summarize(&expenses, 100.0), "₹");
        assert!(text.ends_with(" - Travel: ₹20.00"));
    }

    #[test]
    fn test_budget_status() {
        assert_eq!(BudgetStatus::classify(10.0, 100.0), BudgetStatus::OnTrack);
        assert_eq!(BudgetStatus::classify(80.0, 100.0), BudgetStatus::Approaching);
        assert_eq!(BudgetStatus::classify(100.0, 100.0), BudgetStatus::Exceeded);
        assert_eq!(BudgetStatus::classify(500.0, 0.0), BudgetStatus::OnTrack);
        assert!(BudgetStatus::Exceeded.message().is_some());
        assert!(BudgetStatus::OnTrack.message().is_none());
    }
}

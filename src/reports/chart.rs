//! Chart data
//!
//! Pre-aggregated series for whatever draws the charts. Day and month series
//! only understand `DD-MM-YYYY` dates; expenses in any other layout are left
//! out of them.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::summary::{category_totals, CategoryTotal};
use crate::models::date::parse_day_first;
use crate::models::Expense;

/// Total spent per calendar day, ascending
pub fn aggregate_by_day<'a, I>(expenses: I) -> BTreeMap<NaiveDate, f64>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals = BTreeMap::new();
    for expense in expenses {
        if let Some(day) = parse_day_first(&expense.date) {
            *totals.entry(day).or_insert(0.0) += expense.amount;
        }
    }
    totals
}

/// Total spent per month keyed `YYYY-MM`, ascending
pub fn aggregate_by_month<'a, I>(expenses: I) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals = BTreeMap::new();
    for expense in expenses {
        if let Some(day) = parse_day_first(&expense.date) {
            *totals.entry(day.format("%Y-%m").to_string()).or_insert(0.0) += expense.amount;
        }
    }
    totals
}

/// Total spent per category key, in order of first appearance
///
/// Same grouping as the summary; handy for pie and bar charts.
pub fn aggregate_by_category<'a, I>(expenses: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    category_totals(expenses)
}

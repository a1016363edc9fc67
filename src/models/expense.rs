//! Expense record model
//!
//! A single logged spending entry. The category is kept as its raw internal
//! key and the date as the text the user entered, so records written by older
//! versions (or edited by hand) still load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category;
use super::date;
use crate::error::{SpendError, SpendResult};

/// A spending entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// What the money was spent on
    pub name: String,

    /// Amount spent, never negative for validated records
    pub amount: f64,

    /// Internal category key (see [`Category::key`](category::Category::key))
    pub category: String,

    /// Date text in `YYYY-MM-DD` or `DD-MM-YYYY` layout
    pub date: String,
}

impl Expense {
    /// Create a new expense without validating it
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            category: category.into(),
            date: date.into(),
        }
    }

    /// Validate the record the way the engine does before storing it
    pub fn validate(&self) -> SpendResult<()> {
        if self.name.trim().is_empty() {
            return Err(SpendError::Validation("Expense name cannot be empty".into()));
        }

        if !category::is_valid_key(&self.category) {
            return Err(SpendError::InvalidCategory(self.category.clone()));
        }

        validate_amount(self.amount)?;

        Ok(())
    }

    /// Date parsed with either accepted layout
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        date::parse_flexible(&self.date)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {:.2}",
            self.date,
            self.name,
            category::to_display(&self.category),
            self.amount
        )
    }
}

/// Parse user-entered amount text
///
/// Surrounding whitespace is ignored. Anything that is not a finite,
/// non-negative number is rejected.
pub fn parse_amount(s: &str) -> SpendResult<f64> {
    let trimmed = s.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| SpendError::InvalidAmount(format!("'{}' is not a number", trimmed)))?;
    validate_amount(amount)?;
    Ok(amount)
}

fn validate_amount(amount: f64) -> SpendResult<()> {
    if !amount.is_finite() {
        return Err(SpendError::InvalidAmount(format!("{} is not finite", amount)));
    }
    if amount < 0.0 {
        return Err(SpendError::InvalidAmount(format!(
            "{} is negative",
            amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let expense = Expense::new("Lunch", 12.5, "Food", "15-01-2024");
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects() {
        let expense = Expense::new("Lunch", 12.5, "Travel", "15-01-2024");
        assert!(matches!(
            expense.validate(),
            Err(SpendError::InvalidCategory(_))
        ));

        let expense = Expense::new("  ", 12.5, "Food", "15-01-2024");
        assert!(matches!(expense.validate(), Err(SpendError::Validation(_))));

        let expense = Expense::new("Lunch", -1.0, "Food", "15-01-2024");
        assert!(matches!(
            expense.validate(),
            Err(SpendError::InvalidAmount(_))
        ));

        let expense = Expense::new("Lunch", f64::NAN, "Food", "15-01-2024");
        assert!(matches!(
            expense.validate(),
            Err(SpendError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_date_is_not_validated() {
        let expense = Expense::new("Lunch", 1.0, "Food", "someday");
        assert!(expense.validate().is_ok());
        assert_eq!(expense.parsed_date(), None);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert_eq!(parse_amount(" 12.75 ").unwrap(), 12.75);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
        assert!(matches!(parse_amount("abc"), Err(SpendError::InvalidAmount(_))));
        assert!(matches!(parse_amount(""), Err(SpendError::InvalidAmount(_))));
        assert!(matches!(parse_amount("-5"), Err(SpendError::InvalidAmount(_))));
        assert!(matches!(parse_amount("inf"), Err(SpendError::InvalidAmount(_))));
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::new("Rent", 900.0, "Home", "2024-02-01");
        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"category\":\"Home\""));
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
    }
}

//! Expense search and filtering
//!
//! Every function here reads a collection and returns a new `Vec` of
//! references into it. The results are views: they are never used to change
//! the canonical collection, and their positions are not canonical indices
//! (see [`ExpenseService::resolve_index`](super::ExpenseService::resolve_index)).
//!
//! Inputs are anything that yields `&Expense`, so a view can be fed back in
//! to narrow it further.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::date::{self, format_day_first};
use crate::models::Expense;

/// Keyword search over name and category key
///
/// Matching is case-insensitive substring matching after trimming the
/// keyword. A blank keyword keeps every expense.
pub fn search<'a, I>(expenses: I, keyword: &str) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return expenses.into_iter().collect();
    }

    expenses
        .into_iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&keyword)
                || e.category.to_lowercase().contains(&keyword)
        })
        .collect()
}

/// Filter by exact category key and an inclusive date range
///
/// Bounds that do not parse in either accepted layout are ignored. When a
/// usable bound is present, expenses whose own date does not parse are
/// dropped. Empty strings count as "not given".
pub fn filter_by_category_and_date<'a, I>(
    expenses: I,
    category: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let category = category.filter(|c| !c.is_empty());
    let start = start_date.and_then(date::parse_flexible);
    let end = end_date.and_then(date::parse_flexible);

    expenses
        .into_iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
        .filter(|e| {
            if start.is_none() && end.is_none() {
                return true;
            }
            match e.parsed_date() {
                Some(d) => start.map_or(true, |s| d >= s) && end.map_or(true, |en| d <= en),
                None => false,
            }
        })
        .collect()
}

/// Keyword search followed by category/date filtering
pub fn search_and_filter<'a, I>(
    expenses: I,
    keyword: &str,
    category: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let found = search(expenses, keyword);
    filter_by_category_and_date(found, category, start_date, end_date)
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    /// Search keyword (name or category key)
    pub keyword: Option<String>,
    /// Exact category key
    pub category: Option<String>,
    /// Inclusive start date, either accepted layout
    pub start_date: Option<String>,
    /// Inclusive end date, either accepted layout
    pub end_date: Option<String>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by keyword
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Filter by category key
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by date range
    pub fn date_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    /// Only expenses dated `today`
    pub fn today(self, today: NaiveDate) -> Self {
        self.between(today, today)
    }

    /// The seven days ending with `today`
    pub fn last_7_days(self, today: NaiveDate) -> Self {
        self.between(today - Duration::days(6), today)
    }

    /// From the first of `today`'s month through `today`
    pub fn this_month(self, today: NaiveDate) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        self.between(first, today)
    }

    fn between(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range(format_day_first(start), format_day_first(end))
    }

    /// Whether the filter keeps everything
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Run the filter over `expenses`
    pub fn apply<'a, I>(&self, expenses: I) -> Vec<&'a Expense>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        search_and_filter(
            expenses,
            self.keyword.as_deref().unwrap_or(""),
            self.category.as_deref(),
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("Groceries", 40.0, "Food", "2024-01-10"),
            Expense::new("Office chair", 150.0, "Work", "15-01-2024"),
            Expense::new("Concert", 60.0, "Fun", "20-01-2024"),
            Expense::new("Pizza", 18.0, "Food", "2024-02-01"),
            Expense::new("Mystery", 5.0, "Misc", "sometime"),
        ]
    }

    fn names(view: &[&Expense]) -> Vec<String> {
        view.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_blank_search_keeps_everything() {
        let expenses = sample();
        let view = search(&expenses, "   ");
        assert_eq!(view.len(), expenses.len());
        assert!(view.iter().zip(&expenses).all(|(a, b)| std::ptr::eq(*a, b)));
        assert_eq!(search(&expenses, "").len(), expenses.len());
    }

    #[test]
    fn test_search_name_and_category() {
        let expenses = sample();
        assert_eq!(names(&search(&expenses, " CHAIR ")), ["Office chair"]);
        assert_eq!(names(&search(&expenses, "food")), ["Groceries", "Pizza"]);
        assert!(search(&expenses, "🍔").is_empty());
    }

    #[test]
    fn test_filter_category_exact() {
        let expenses = sample();
        let view = filter_by_category_and_date(&expenses, Some("Food"), None, None);
        assert_eq!(names(&view), ["Groceries", "Pizza"]);

        assert!(filter_by_category_and_date(&expenses, Some("food"), None, None).is_empty());
        assert_eq!(
            filter_by_category_and_date(&expenses, Some(""), None, None).len(),
            expenses.len()
        );
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let expenses = sample();
        let view =
            filter_by_category_and_date(&expenses, None, Some("2024-01-15"), Some("20-01-2024"));
        assert_eq!(names(&view), ["Office chair", "Concert"]);
    }

    #[test]
    fn test_mixed_bound_layouts_are_equivalent() {
        let expenses = sample();
        let iso = filter_by_category_and_date(&expenses, None, Some("2024-01-15"), None);
        let day_first = filter_by_category_and_date(&expenses, None, Some("15-01-2024"), None);
        assert_eq!(names(&iso), names(&day_first));
        assert_eq!(names(&iso), ["Office chair", "Concert", "Pizza"]);
    }

    #[test]
    fn test_unparseable_bound_is_ignored() {
        let expenses = sample();
        let view = filter_by_category_and_date(&expenses, None, Some("next week"), None);
        assert_eq!(view.len(), expenses.len());
    }

    #[test]
    fn test_short_year_bound_is_ignored() {
        let expenses = sample();
        let view = filter_by_category_and_date(&expenses, None, None, Some("15-01-24"));
        assert_eq!(view.len(), expenses.len());

        let view = filter_by_category_and_date(&expenses, None, Some("10-01-24"), None);
        assert_eq!(view.len(), expenses.len());
    }

    #[test]
    fn test_short_year_record_excluded_when_bounded() {
        let expenses = vec![
            Expense::new("Bus", 5.0, "Misc", "10-01-24"),
            Expense::new("Train", 7.0, "Misc", "10-01-2024"),
        ];
        let view = filter_by_category_and_date(&expenses, None, Some("0001-01-01"), None);
        assert_eq!(names(&view), ["Train"]);
    }

    #[test]
    fn test_unparseable_record_date_excluded_when_bounded() {
        let expenses = sample();
        let view = filter_by_category_and_date(&expenses, None, None, Some("2030-12-31"));
        assert_eq!(view.len(), expenses.len() - 1);
        assert!(view.iter().all(|e| e.name != "Mystery"));
    }

    #[test]
    fn test_search_then_filter() {
        let expenses = sample();
        let view = search_and_filter(&expenses, "o", Some("Food"), Some("2024-01-31"), None);
        assert_eq!(names(&view), ["Pizza"]);

        let manual = filter_by_category_and_date(
            search(&expenses, "o"),
            Some("Food"),
            Some("2024-01-31"),
            None,
        );
        assert_eq!(names(&view), names(&manual));
    }

    #[test]
    fn test_filter_does_not_touch_source() {
        let expenses = sample();
        let before = expenses.clone();
        let _ = ExpenseFilter::new().keyword("pizza").apply(&expenses);
        assert_eq!(expenses, before);
    }

    #[test]
    fn test_date_shortcuts() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();

        let filter = ExpenseFilter::new().today(today);
        assert_eq!(filter.start_date.as_deref(), Some("20-01-2024"));
        assert_eq!(filter.end_date.as_deref(), Some("20-01-2024"));

        let filter = ExpenseFilter::new().last_7_days(today);
        assert_eq!(filter.start_date.as_deref(), Some("14-01-2024"));

        let filter = ExpenseFilter::new().this_month(today);
        assert_eq!(filter.start_date.as_deref(), Some("01-01-2024"));

        let expenses = sample();
        let view = ExpenseFilter::new().last_7_days(today).apply(&expenses);
        assert_eq!(names(&view), ["Office chair", "Concert"]);
    }

    #[test]
    fn test_empty_filter() {
        assert!(ExpenseFilter::new().is_empty());
        assert!(!ExpenseFilter::new().category("Fun").is_empty());
        let expenses = sample();
        assert_eq!(ExpenseFilter::new().apply(&expenses).len(), expenses.len());
    }
}

//! Expense date handling
//!
//! Record dates are stored exactly as entered. Two textual layouts are
//! accepted and tried in order; the first that parses wins. Text that matches
//! neither layout has no date at all, which callers treat as "bound ignored"
//! or "record excluded" depending on context.

use chrono::NaiveDate;

/// ISO layout, e.g. `2024-01-15`
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Day-first layout, e.g. `15-01-2024`
pub const DAY_FIRST_FORMAT: &str = "%d-%m-%Y";

/// Accepted layouts, in the order they are tried
pub const ACCEPTED_FORMATS: [&str; 2] = [ISO_FORMAT, DAY_FIRST_FORMAT];

/// Parse a date with the first accepted layout that matches
pub fn parse_flexible(s: &str) -> Option<NaiveDate> {
    ACCEPTED_FORMATS.iter().find_map(|fmt| parse_with(s, fmt))
}

/// Parse a date strictly as `DD-MM-YYYY`
///
/// Chart aggregation only understands the day-first layout.
pub fn parse_day_first(s: &str) -> Option<NaiveDate> {
    parse_with(s, DAY_FIRST_FORMAT)
}

fn parse_with(s: &str, fmt: &str) -> Option<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(s, fmt).ok()?;
    has_full_year(s, fmt).then_some(parsed)
}

/// chrono's `%Y` takes a year of any width; both layouts need exactly four digits
fn has_full_year(s: &str, fmt: &str) -> bool {
    let mut fields = s.split('-');
    let year = if fmt == ISO_FORMAT {
        fields.next()
    } else {
        fields.nth(2)
    };
    year.is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
}

/// Render a date the way new records store it (`DD-MM-YYYY`)
pub fn format_day_first(date: NaiveDate) -> String {
    date.format(DAY_FIRST_FORMAT).to_string()
}

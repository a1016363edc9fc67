//! Report formatting utilities for terminal output
//!
//! Turns chart series into rows of text bars.

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Render labelled values as a horizontal bar chart
///
/// Bars are scaled against the largest value; each row also shows the amount
/// and its share of the total.
pub fn format_bar_chart<L: AsRef<str>>(
    title: &str,
    rows: &[(L, f64)],
    currency_symbol: &str,
    width: usize,
) -> String {
    let mut output = format!("{}\n", title);
    output.push_str(&separator(title.chars().count()));
    output.push('\n');

    if rows.is_empty() {
        output.push_str("No data to chart.\n");
        return output;
    }

    let max = rows.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let total: f64 = rows.iter().map(|(_, v)| *v).sum();
    let label_width = rows
        .iter()
        .map(|(l, _)| l.as_ref().chars().count())
        .max()
        .unwrap_or(0);

    for (label, value) in rows {
        let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        let label = label.as_ref();
        let padding = label_width - label.chars().count();
        output.push_str(&format!(
            "{}{}  {}  {}{:.2} ({})\n",
            label,
            " ".repeat(padding),
            format_bar(*value, max, width),
            currency_symbol,
            value,
            format_percentage(share)
        ));
    }

    output
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_bar_chart_rows() {
        let rows = vec![("2024-01", 75.0), ("2024-02", 25.0)];
        let chart = format_bar_chart("By month", &rows, "$", 4);

        assert!(chart.starts_with("By month\n"));
        assert!(chart.contains("2024-01  ████  $75.00 (75%)"));
        assert!(chart.contains("2024-02  █░░░  $25.00 (25%)"));
    }

    #[test]
    fn test_empty_chart() {
        let rows: Vec<(String, f64)> = Vec::new();
        assert!(format_bar_chart("By day", &rows, "$", 10).contains("No data to chart."));
    }
}

//! CSV Export functionality
//!
//! Exports expenses with the fixed column order `date, category, amount, name`.
//! The header row is always written, even when there is nothing to export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{SpendError, SpendResult};
use crate::models::Expense;

/// Export column names, in order
pub const CSV_HEADER: [&str; 4] = ["date", "category", "amount", "name"];

/// Write expenses as CSV to any writer
///
/// Fields containing the delimiter, quotes or newlines are quoted.
pub fn write_csv<'a, W, I>(writer: W, expenses: I, delimiter: u8) -> SpendResult<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Expense>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for expense in expenses {
        // Shortest text that reads back to the same f64, keeping `.0` on whole amounts
        let amount = format!("{:?}", expense.amount);
        csv_writer.write_record([
            expense.date.as_str(),
            expense.category.as_str(),
            amount.as_str(),
            expense.name.as_str(),
        ])?;
        rows += 1;
    }

    csv_writer.flush()?;
    Ok(rows)
}

/// Export expenses to a CSV file at `path`, replacing it if it exists
///
/// Returns the number of data rows written.
pub fn export_csv<'a, I, P>(expenses: I, path: P, delimiter: u8) -> SpendResult<usize>
where
    I: IntoIterator<Item = &'a Expense>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        SpendError::Io(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    let rows = write_csv(file, expenses, delimiter)?;
    info!(path = %path.display(), rows, "exported expenses");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("Groceries", 100.0, "Food", "01-01-2024"),
            Expense::new("Chair, office", 12.5, "Work", "2024-01-02"),
        ]
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let expenses: Vec<Expense> = Vec::new();

        let rows = export_csv(&expenses, &path, b',').unwrap();

        assert_eq!(rows, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "date,category,amount,name\n");
    }

    #[test]
    fn test_column_order_and_quoting() {
        let mut output = Vec::new();
        write_csv(&mut output, &sample(), b',').unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "date,category,amount,name\n\
             01-01-2024,Food,100.0,Groceries\n\
             2024-01-02,Work,12.5,\"Chair, office\"\n"
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let mut output = Vec::new();
        write_csv(&mut output, &sample(), b';').unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("date;category;amount;name\n"));
        assert!(text.contains("2024-01-02;Work;12.5;Chair, office\n"));
    }

    #[test]
    fn test_amounts_are_not_rounded() {
        let expenses = vec![
            Expense::new("Snack", 12.345, "Food", "01-01-2024"),
            Expense::new("Stamp", 0.125, "Misc", "01-01-2024"),
        ];
        let mut output = Vec::new();
        write_csv(&mut output, &expenses, b',').unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("01-01-2024,Food,12.345,Snack\n"));
        assert!(text.contains("01-01-2024,Misc,0.125,Stamp\n"));

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let amounts: Vec<f64> = reader
            .records()
            .map(|r| r.unwrap()[2].parse().unwrap())
            .collect();
        assert_eq!(amounts, [12.345, 0.125]);
    }

    #[test]
    fn test_output_reads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        export_csv(&sample(), &path, b',').unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let names: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[3].to_string())
            .collect();
        assert_eq!(names, ["Groceries", "Chair, office"]);
    }

    #[test]
    fn test_unwritable_destination() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.csv");

        let result = export_csv(&sample(), &path, b',');
        assert!(matches!(result, Err(SpendError::Io(_))));
    }
}

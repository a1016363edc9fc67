//! User settings for spendlog
//!
//! Settings are loaded once per session and passed explicitly to whatever
//! needs them. Every change is written back to disk immediately.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::paths::SpendPaths;
use crate::error::SpendError;
use crate::storage::file_io::{read_json, write_json_atomic, LoadOutcome};

/// Recognized settings keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    MonthlyBudget,
    CurrencySymbol,
    Theme,
    CsvDelimiter,
}

impl SettingKey {
    /// All keys in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::MonthlyBudget,
            Self::CurrencySymbol,
            Self::Theme,
            Self::CsvDelimiter,
        ]
    }

    /// Key name as stored in settings.json
    pub fn name(&self) -> &'static str {
        match self {
            Self::MonthlyBudget => "monthly_budget",
            Self::CurrencySymbol => "currency_symbol",
            Self::Theme => "theme",
            Self::CsvDelimiter => "csv_delimiter",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SettingKey {
    type Err = SpendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.name() == s.trim())
            .ok_or_else(|| SpendError::Config(format!("Unknown setting: {}", s)))
    }
}

/// User settings for spendlog
///
/// Read key by key: a missing or invalid value falls back to its default
/// without discarding the other keys, and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Budget for one month of spending
    pub monthly_budget: f64,

    /// Symbol prefixed to rendered amounts
    pub currency_symbol: String,

    /// Front-end theme name, opaque to the core
    pub theme: String,

    /// Field delimiter for CSV export
    pub csv_delimiter: char,
}

fn default_monthly_budget() -> f64 {
    25000.0
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_theme() -> String {
    "litera".to_string()
}

fn default_csv_delimiter() -> char {
    ','
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_budget: default_monthly_budget(),
            currency_symbol: default_currency(),
            theme: default_theme(),
            csv_delimiter: default_csv_delimiter(),
        }
    }
}

impl Settings {
    /// Read settings from disk without falling back
    ///
    /// Only a file that is not a JSON object counts as corrupt.
    pub fn load(paths: &SpendPaths) -> LoadOutcome<Self> {
        match read_json::<Value, _>(paths.settings_file()) {
            LoadOutcome::Present(Value::Object(fields)) => {
                LoadOutcome::Present(Self::from_fields(&fields))
            }
            LoadOutcome::Present(_) => LoadOutcome::Corrupt(format!(
                "{} does not hold a JSON object",
                paths.settings_file().display()
            )),
            LoadOutcome::Absent => LoadOutcome::Absent,
            LoadOutcome::Corrupt(reason) => LoadOutcome::Corrupt(reason),
        }
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        let mut settings = Self::default();
        for key in SettingKey::all() {
            let text = match fields.get(key.name()) {
                None => continue,
                Some(Value::String(text)) => text.clone(),
                Some(Value::Number(number)) => number.to_string(),
                Some(other) => {
                    warn!(setting = %key, value = %other, "ignoring stored setting");
                    continue;
                }
            };
            if let Err(e) = settings.apply(*key, &text) {
                warn!(setting = %key, error = %e, "ignoring stored setting");
            }
        }
        settings
    }

    /// Load settings from disk, creating the file with defaults if it is missing
    ///
    /// An unreadable settings file is left untouched and defaults are used
    /// for this session.
    pub fn load_or_create(paths: &SpendPaths) -> Result<Self, SpendError> {
        match Self::load(paths) {
            LoadOutcome::Present(settings) => Ok(settings),
            LoadOutcome::Absent => {
                let settings = Self::default();
                settings.save(paths)?;
                Ok(settings)
            }
            LoadOutcome::Corrupt(reason) => {
                warn!(%reason, "settings file is unreadable, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendPaths) -> Result<(), SpendError> {
        debug!(path = %paths.settings_file().display(), "saving settings");
        write_json_atomic(paths.settings_file(), self)
    }

    /// Current value of `key`, rendered as text
    pub fn get(&self, key: SettingKey) -> String {
        match key {
            SettingKey::MonthlyBudget => self.monthly_budget.to_string(),
            SettingKey::CurrencySymbol => self.currency_symbol.clone(),
            SettingKey::Theme => self.theme.clone(),
            SettingKey::CsvDelimiter => self.csv_delimiter.to_string(),
        }
    }

    /// Validate and apply a new value for `key` without saving
    pub fn apply(&mut self, key: SettingKey, value: &str) -> Result<(), SpendError> {
        match key {
            SettingKey::MonthlyBudget => {
                let budget: f64 = value.trim().parse().map_err(|_| {
                    SpendError::Validation(format!("Monthly budget must be a number: {}", value))
                })?;
                if !budget.is_finite() {
                    return Err(SpendError::Validation(
                        "Monthly budget must be finite".into(),
                    ));
                }
                self.monthly_budget = budget;
            }
            SettingKey::CurrencySymbol => {
                let symbol = value.trim();
                if symbol.is_empty() {
                    return Err(SpendError::Validation(
                        "Currency symbol cannot be empty".into(),
                    ));
                }
                self.currency_symbol = symbol.to_string();
            }
            SettingKey::Theme => {
                let theme = value.trim();
                if theme.is_empty() {
                    return Err(SpendError::Validation("Theme cannot be empty".into()));
                }
                self.theme = theme.to_string();
            }
            SettingKey::CsvDelimiter => {
                self.csv_delimiter = parse_delimiter(value)?;
            }
        }
        Ok(())
    }

    /// Set `key` to `value` and save immediately
    pub fn set(
        &mut self,
        paths: &SpendPaths,
        key: SettingKey,
        value: &str,
    ) -> Result<(), SpendError> {
        self.apply(key, value)?;
        self.save(paths)
    }

    /// Restore default settings and save them
    pub fn reset_defaults(&mut self, paths: &SpendPaths) -> Result<(), SpendError> {
        *self = Self::default();
        self.save(paths)
    }

    /// The CSV delimiter as the single byte the csv writer expects
    pub fn csv_delimiter_byte(&self) -> Result<u8, SpendError> {
        delimiter_byte(self.csv_delimiter)
    }
}

fn parse_delimiter(value: &str) -> Result<char, SpendError> {
    // A lone space or tab is a legitimate delimiter, so no trimming here
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            delimiter_byte(c)?;
            Ok(c)
        }
        _ => Err(SpendError::Validation(format!(
            "CSV delimiter must be a single character: '{}'",
            value
        ))),
    }
}

fn delimiter_byte(c: char) -> Result<u8, SpendError> {
    if c.is_ascii() && c != '"' && c != '\n' && c != '\r' {
        Ok(c as u8)
    } else {
        Err(SpendError::Validation(format!(
            "CSV delimiter must be an ASCII character other than a quote or newline: '{}'",
            c
        )))
    }
}

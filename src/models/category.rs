//! Category registry
//!
//! Expenses are filed under one of a fixed set of categories. Each category
//! has an internal key (stored on records), a display label for the front end
//! and an icon resource path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpendError;

/// One of the fixed spending categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Home,
    Work,
    Fun,
    Misc,
}

const ALL: [Category; 5] = [
    Category::Food,
    Category::Home,
    Category::Work,
    Category::Fun,
    Category::Misc,
];

const KEYS: [&str; 5] = ["Food", "Home", "Work", "Fun", "Misc"];

impl Category {
    /// All categories in registry order
    pub fn all() -> &'static [Self] {
        &ALL
    }

    /// Internal key stored on records (e.g. "Food")
    pub fn key(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Home => "Home",
            Self::Work => "Work",
            Self::Fun => "Fun",
            Self::Misc => "Misc",
        }
    }

    /// User-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "🍔 Food",
            Self::Home => "🏠 Home",
            Self::Work => "💻 Work",
            Self::Fun => "🎉 Fun",
            Self::Misc => "✨ Misc",
        }
    }

    /// Icon resource path, relative to the application assets
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "assets/icons/food.png",
            Self::Home => "assets/icons/home.png",
            Self::Work => "assets/icons/work.png",
            Self::Fun => "assets/icons/fun.png",
            Self::Misc => "assets/icons/misc.png",
        }
    }

    /// Look up a category by its exact internal key
    pub fn from_key(key: &str) -> Option<Self> {
        ALL.iter().copied().find(|c| c.key() == key)
    }

    /// Look up a category by its exact display label
    pub fn from_label(label: &str) -> Option<Self> {
        ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = SpendError;

    /// Accepts an internal key or a display label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
            .or_else(|| Self::from_label(s))
            .ok_or_else(|| SpendError::InvalidCategory(s.to_string()))
    }
}

/// The set of valid internal category keys, in registry order
pub fn internal_keys() -> &'static [&'static str] {
    &KEYS
}

/// Check whether `key` is one of the registry's internal keys
pub fn is_valid_key(key: &str) -> bool {
    Category::from_key(key).is_some()
}

/// Display label for `key`, or `key` itself if it is not a known category
pub fn to_display(key: &str) -> &str {
    Category::from_key(key).map_or(key, |c| c.label())
}

/// Internal key for a display label, or the label itself if nothing matches
pub fn from_display(label: &str) -> &str {
    Category::from_label(label).map_or(label, |c| c.key())
}

/// Icon path for `key`, if it is a known category
pub fn icon_path(key: &str) -> Option<&'static str> {
    Category::from_key(key).map(|c| c.icon())
}

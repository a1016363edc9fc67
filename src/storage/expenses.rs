//! Expense persistence
//!
//! The record engine talks to storage through [`ExpenseStore`]: load the whole
//! collection once, save the whole collection after every change.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{SpendError, SpendResult};
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic, LoadOutcome};

/// Durable load/save of the full expense collection
pub trait ExpenseStore {
    /// Load every stored expense, reporting absent or corrupt data
    fn load(&self) -> LoadOutcome<Vec<Expense>>;

    /// Replace the stored collection
    fn save(&self, expenses: &[Expense]) -> SpendResult<()>;

    /// Load, falling back to an empty collection when nothing usable is stored
    fn load_or_default(&self) -> Vec<Expense> {
        match self.load() {
            LoadOutcome::Present(expenses) => expenses,
            LoadOutcome::Absent => Vec::new(),
            LoadOutcome::Corrupt(reason) => {
                warn!(%reason, "stored expenses are unreadable, starting empty");
                Vec::new()
            }
        }
    }
}

/// JSON file store (`data/expenses.json`)
#[derive(Debug, Clone)]
pub struct JsonExpenseStore {
    path: PathBuf,
}

impl JsonExpenseStore {
    /// Create a store backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExpenseStore for JsonExpenseStore {
    fn load(&self) -> LoadOutcome<Vec<Expense>> {
        read_json(&self.path)
    }

    fn save(&self, expenses: &[Expense]) -> SpendResult<()> {
        debug!(path = %self.path.display(), count = expenses.len(), "saving expenses");
        write_json_atomic(&self.path, expenses)
    }
}

/// In-memory store, for callers that do not want a file
///
/// Can be told to fail its writes so durability errors are easy to provoke.
#[derive(Debug, Default)]
pub struct MemoryExpenseStore {
    saved: RefCell<Option<Vec<Expense>>>,
    save_count: RefCell<usize>,
    fail_writes: bool,
}

impl MemoryExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `expenses`
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            saved: RefCell::new(Some(expenses)),
            ..Self::default()
        }
    }

    /// Create a store whose every save fails with an I/O error
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// What was last saved, if anything
    pub fn saved(&self) -> Option<Vec<Expense>> {
        self.saved.borrow().clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        *self.save_count.borrow()
    }
}

impl ExpenseStore for MemoryExpenseStore {
    fn load(&self) -> LoadOutcome<Vec<Expense>> {
        match self.saved.borrow().as_ref() {
            Some(expenses) => LoadOutcome::Present(expenses.clone()),
            None => LoadOutcome::Absent,
        }
    }

    fn save(&self, expenses: &[Expense]) -> SpendResult<()> {
        if self.fail_writes {
            return Err(SpendError::Io("memory store is read-only".into()));
        }
        *self.saved.borrow_mut() = Some(expenses.to_vec());
        *self.save_count.borrow_mut() += 1;
        Ok(())
    }
}

//! Expense service
//!
//! Owns the canonical, insertion-ordered expense collection and keeps the
//! store in sync with it. Every successful mutation writes the whole
//! collection back through the store before returning.
//!
//! A failed write does not roll anything back: the change stays applied in
//! memory and the I/O error is returned. Call [`ExpenseService::save`] to try
//! again.

use tracing::debug;

use crate::error::{SpendError, SpendResult};
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

impl CreateExpenseInput {
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
}

impl From<CreateExpenseInput> for Expense {
    fn from(input: CreateExpenseInput) -> Self {
        Expense::new(input.name, input.amount, input.category, input.date)
    }
}

/// Service for expense management
pub struct ExpenseService<S: ExpenseStore> {
    store: S,
    expenses: Vec<Expense>,
}

impl<S: ExpenseStore> ExpenseService<S> {
    /// Open the service, loading whatever the store holds
    ///
    /// Missing or damaged data yields an empty collection.
    pub fn open(store: S) -> Self {
        let expenses = store.load_or_default();
        debug!(count = expenses.len(), "loaded expenses");
        Self { store, expenses }
    }

    /// The canonical collection, in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Get an expense by index
    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether there are no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add a new expense and persist; returns its index
    ///
    /// Nothing changes if validation fails.
    pub fn add(&mut self, input: CreateExpenseInput) -> SpendResult<usize> {
        let expense = Expense::from(input);
        expense.validate()?;

        debug!(name = %expense.name, category = %expense.category, "adding expense");
        self.expenses.push(expense);
        self.save()?;

        Ok(self.expenses.len() - 1)
    }

    /// Remove the expense at `index` and persist; returns the removed record
    ///
    /// Later expenses shift down by one.
    pub fn delete(&mut self, index: usize) -> SpendResult<Expense> {
        self.check_index(index)?;

        let removed = self.expenses.remove(index);
        debug!(index, name = %removed.name, "deleted expense");
        self.save()?;

        Ok(removed)
    }

    /// Replace the expense at `index` and persist; returns the previous record
    ///
    /// The replacement is validated exactly like a new expense. An
    /// out-of-range index or an invalid record leaves the collection as it was.
    pub fn update(&mut self, index: usize, expense: Expense) -> SpendResult<Expense> {
        self.check_index(index)?;
        expense.validate()?;

        let before = std::mem::replace(&mut self.expenses[index], expense);
        debug!(index, before = %before, after = %self.expenses[index], "updated expense");
        self.save()?;

        Ok(before)
    }

    /// Write the whole collection to the store
    pub fn save(&self) -> SpendResult<()> {
        self.store.save(&self.expenses)
    }

    /// Canonical index of an expense borrowed from this service
    ///
    /// Filtered views hold references into the canonical collection; use this
    /// to turn one of those references back into an index for a mutator.
    /// Returns `None` for records that do not live in this collection.
    pub fn resolve_index(&self, expense: &Expense) -> Option<usize> {
        self.expenses.iter().position(|e| std::ptr::eq(e, expense))
    }

    fn check_index(&self, index: usize) -> SpendResult<()> {
        if index < self.expenses.len() {
            Ok(())
        } else {
            Err(SpendError::index_out_of_range(index, self.expenses.len()))
        }
    }
}

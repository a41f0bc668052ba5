//! Exam management use cases
//!
//! Each operation follows the same round: validate user input, mutate the
//! store in memory, then persist. A failed save leaves memory ahead of disk
//! but never touches the stored file.

use crate::application::ExamStore;
use crate::domain::{date_codec, Exam};
use crate::error::{ExamError, Result};
use crate::infrastructure::ExamStorage;

/// Service for creating, editing and deleting exams from user input
pub struct ExamService<S: ExamStorage> {
    store: ExamStore<S>,
}

impl<S: ExamStorage> ExamService<S> {
    /// Create a new exam service around an unloaded store
    pub fn new(store: ExamStore<S>) -> Self {
        ExamService { store }
    }

    /// Load the store; must run once before anything else
    pub fn initialize(&mut self) -> Result<()> {
        self.store.load()
    }

    /// Exams in display order
    pub fn exams(&self) -> Vec<Exam> {
        self.store.list()
    }

    pub fn store(&self) -> &ExamStore<S> {
        &self.store
    }

    /// Add an exam from a name and a `DD.MM.YYYY` date
    pub fn add(&mut self, name: &str, display_date: &str) -> Result<Exam> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ExamError::EmptyName);
        }
        let date = canonical_from_input(display_date)?;

        let exam = self.store.add(name, &date);
        self.store.save()?;
        Ok(exam)
    }

    /// Edit an exam. Blank inputs keep the current value.
    pub fn edit(
        &mut self,
        id: &str,
        name: Option<&str>,
        display_date: Option<&str>,
    ) -> Result<Exam> {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        let date = match display_date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(d) => Some(canonical_from_input(d)?),
            None => None,
        };

        if !self.store.update(id, name, date.as_deref()) {
            return Err(ExamError::NotFound(id.to_string()));
        }
        self.store.save()?;

        self.store
            .get_by_id(id)
            .cloned()
            .ok_or_else(|| ExamError::NotFound(id.to_string()))
    }

    /// Delete one exam and return it
    pub fn delete(&mut self, id: &str) -> Result<Exam> {
        let exam = self
            .store
            .get_by_id(id)
            .cloned()
            .ok_or_else(|| ExamError::NotFound(id.to_string()))?;

        self.store.remove(id);
        self.store.save()?;
        Ok(exam)
    }

    /// Delete every exam; returns how many were removed
    pub fn clear(&mut self) -> Result<usize> {
        let count = self.store.len();
        self.store.remove_all();
        self.store.save()?;
        tracing::info!("cleared {} exams", count);
        Ok(count)
    }
}

/// Validate a display date and convert it to canonical form
fn canonical_from_input(display_date: &str) -> Result<String> {
    let display_date = display_date.trim();
    if !date_codec::is_valid_display_date(display_date) {
        return Err(ExamError::InvalidFormat(display_date.to_string()));
    }
    date_codec::to_canonical(display_date)
}

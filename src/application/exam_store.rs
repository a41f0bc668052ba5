//! Exam store: the authoritative record collection and its durable form

use crate::domain::{Exam, ExamData};
use crate::error::{ExamError, Result};
use crate::infrastructure::ExamStorage;
use uuid::Uuid;

/// Owns the exam records and persists them through an [`ExamStorage`].
///
/// Mutating operations only touch memory. Callers persist explicitly with
/// [`ExamStore::save`] once a change has been applied.
pub struct ExamStore<S: ExamStorage> {
    storage: S,
    exams: Vec<Exam>,
}

impl<S: ExamStorage> ExamStore<S> {
    /// Create an empty store; call [`ExamStore::load`] before use
    pub fn new(storage: S) -> Self {
        ExamStore {
            storage,
            exams: Vec::new(),
        }
    }

    /// Load the stored collection.
    ///
    /// Missing data initializes an empty collection and writes it back right
    /// away. Unreadable or unparsable data is an error.
    pub fn load(&mut self) -> Result<()> {
        match self.storage.read()? {
            Some(contents) => {
                let data: ExamData =
                    serde_json::from_str(&contents).map_err(|source| ExamError::Corrupt {
                        path: self.storage.location().to_path_buf(),
                        source,
                    })?;
                self.exams = data.exams;
                tracing::debug!(
                    "loaded {} exams from {}",
                    self.exams.len(),
                    self.storage.location().display()
                );
            }
            None => {
                tracing::info!(
                    "no data at {}, starting empty",
                    self.storage.location().display()
                );
                self.exams = Vec::new();
                self.save()?;
            }
        }
        Ok(())
    }

    /// Overwrite the stored data with the current collection
    pub fn save(&mut self) -> Result<()> {
        let data = ExamData {
            exams: self.exams.clone(),
        };
        let contents = serde_json::to_string_pretty(&data)?;
        self.storage.write(&contents)?;
        tracing::debug!(
            "saved {} exams to {}",
            self.exams.len(),
            self.storage.location().display()
        );
        Ok(())
    }

    /// All exams ordered by date, ties kept in insertion order
    pub fn list(&self) -> Vec<Exam> {
        let mut exams = self.exams.clone();
        exams.sort_by(|a, b| a.date.cmp(&b.date));
        exams
    }

    /// Add an exam with a freshly generated id and return it
    pub fn add(&mut self, name: &str, date: &str) -> Exam {
        let id = self.fresh_id();
        let exam = Exam::new(id, name.to_string(), date.to_string());
        self.exams.push(exam.clone());
        exam
    }

    /// Remove the exam with `id`; returns whether one was removed
    pub fn remove(&mut self, id: &str) -> bool {
        match self.exams.iter().position(|e| e.id == id) {
            Some(index) => {
                self.exams.remove(index);
                true
            }
            None => false,
        }
    }

    /// Update the supplied fields of the exam with `id`.
    ///
    /// `None` and empty strings leave the field as it is. Returns whether
    /// the exam was found.
    pub fn update(&mut self, id: &str, name: Option<&str>, date: Option<&str>) -> bool {
        let Some(exam) = self.exams.iter_mut().find(|e| e.id == id) else {
            return false;
        };

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            exam.name = name.to_string();
        }
        if let Some(date) = date.filter(|d| !d.is_empty()) {
            exam.date = date.to_string();
        }
        true
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Exam> {
        self.exams.iter().find(|e| e.id == id)
    }

    /// Drop every exam from memory
    pub fn remove_all(&mut self) {
        self.exams.clear();
    }

    pub fn len(&self) -> usize {
        self.exams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exams.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get_by_id(&id).is_none() {
                return id;
            }
        }
    }
}

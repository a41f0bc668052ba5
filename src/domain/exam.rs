//! Exam record and persisted document

use serde::{Deserialize, Deserializer, Serialize};

/// A single exam entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    /// Opaque identifier, assigned on creation and never changed
    pub id: String,
    pub name: String,
    /// Canonical `YYYY-MM-DD` date
    pub date: String,
}

impl Exam {
    pub fn new(id: String, name: String, date: String) -> Self {
        Exam { id, name, date }
    }
}

/// Top-level shape of the data file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub exams: Vec<Exam>,
}

/// `"exams": null` reads as an empty list, same as a missing key
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Exam>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Exam>>::deserialize(deserializer)?.unwrap_or_default())
}

//! Infrastructure layer - External I/O and persistence

pub mod settings;
pub mod storage;

pub use settings::Settings;
pub use storage::{ExamStorage, FileStorage, MemoryStorage};

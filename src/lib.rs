//! examplan - Terminal exam planner
//!
//! Keeps a list of upcoming exams in a local JSON file and offers an
//! interactive menu plus one-shot commands to manage it.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ExamError;

//! Application layer - Use cases and orchestration

pub mod exam_store;
pub mod manage_exams;

pub use exam_store::ExamStore;
pub use manage_exams::ExamService;

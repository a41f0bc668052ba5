//! Domain layer - Exam records and date logic

pub mod countdown;
pub mod date_codec;
pub mod exam;

pub use countdown::{format_long_date, Countdown, Urgency};
pub use exam::{Exam, ExamData};

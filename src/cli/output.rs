//! Output formatting utilities

use crate::domain::{date_codec, format_long_date, Countdown, Exam, Urgency};
use chrono::NaiveDate;

/// Long form of a stored date, falling back to the raw text when malformed
pub fn describe_date(canonical: &str) -> String {
    match date_codec::parse_canonical(canonical) {
        Some(date) => format_long_date(date),
        None => date_codec::to_display(canonical),
    }
}

/// Time remaining until a stored date, relative to `today`
pub fn describe_countdown(canonical: &str, today: NaiveDate) -> String {
    let Some(date) = date_codec::parse_canonical(canonical) else {
        return "unknown".to_string();
    };

    let countdown = Countdown::between(today, date);
    match countdown.urgency() {
        Some(Urgency::Urgent) => format!("{} [urgent]", countdown),
        Some(Urgency::Soon) => format!("{} [soon]", countdown),
        _ => countdown.to_string(),
    }
}

/// One-line summary used in selection lists, e.g. `1. Math - Mittwoch, 3. September 2025`
pub fn format_exam_line(position: usize, exam: &Exam) -> String {
    format!("{}. {} - {}", position, exam.name, describe_date(&exam.date))
}

/// Format exams for display, in the order given
pub fn format_exam_list(exams: &[Exam], today: NaiveDate, show_ids: bool) -> String {
    if exams.is_empty() {
        return "No exams available yet.".to_string();
    }

    let mut output = String::new();
    for (index, exam) in exams.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, exam.name));
        output.push_str(&format!(
            "   Date: {} ({})\n",
            date_codec::to_display(&exam.date),
            describe_date(&exam.date)
        ));
        output.push_str(&format!(
            "   Time remaining: {}\n",
            describe_countdown(&exam.date, today)
        ));
        if show_ids {
            output.push_str(&format!("   Id: {}\n", exam.id));
        }
    }
    output
}

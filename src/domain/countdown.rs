//! Days-remaining classification and long date rendering

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// How close an upcoming exam is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// More than a week away
    Relaxed,
    /// Four to seven days away
    Soon,
    /// Three days or fewer
    Urgent,
}

/// Time left until an exam, measured in whole calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Passed,
    Today,
    Days(i64),
}

impl Countdown {
    /// Compute the countdown from `today` to `exam_date`
    pub fn between(today: NaiveDate, exam_date: NaiveDate) -> Self {
        let days = (exam_date - today).num_days();
        match days {
            d if d < 0 => Countdown::Passed,
            0 => Countdown::Today,
            d => Countdown::Days(d),
        }
    }

    /// Urgency bucket, or `None` once the exam has passed
    pub fn urgency(&self) -> Option<Urgency> {
        match self {
            Countdown::Passed => None,
            Countdown::Today => Some(Urgency::Urgent),
            Countdown::Days(d) if *d > 7 => Some(Urgency::Relaxed),
            Countdown::Days(d) if *d > 3 => Some(Urgency::Soon),
            Countdown::Days(_) => Some(Urgency::Urgent),
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Passed => write!(f, "Already passed"),
            Countdown::Today => write!(f, "Today"),
            Countdown::Days(1) => write!(f, "1 day"),
            Countdown::Days(d) => write!(f, "{} days", d),
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Render a date in long German form, e.g. `Mittwoch, 3. September 2025`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {}. {} {}",
        weekday_name(date.weekday()),
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}

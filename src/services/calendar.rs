use chrono::{Datelike, Local, NaiveDate};
use std::fmt::Debug;

/// Three-letter month labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Source of "today" for anything that labels months relative to now.
pub trait Calendar: Send + Sync + Debug {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCalendar;

impl Calendar for SystemCalendar {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Calendar pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedCalendar(pub NaiveDate);

impl Calendar for FixedCalendar {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Label of the month `offset` months after the month of `today`, wrapping
/// across year boundaries. The day of month plays no part.
pub fn month_label(today: NaiveDate, offset: u32) -> &'static str {
    let index = (today.month0() + offset % 12) % 12;
    MONTH_LABELS[index as usize]
}

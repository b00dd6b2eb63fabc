use chrono::{Datelike, NaiveDate};

use crate::activity::{classify, Classification};
use crate::color::{color_for, Rgb};
use crate::phase_table::{PhaseEvent, PhaseKind};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Sunday-first, matching the grid layout below.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One rendered day: the classification it received, the shading derived
/// from it, and any phase transition landing on that exact date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub classification: Classification,
    pub color: Option<Rgb>,
    pub event: Option<PhaseKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: u32,
    /// Empty cells before day 1 in a Sunday-first week row.
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    next.signed_duration_since(first).num_days() as u32
}

/// The phase transition on exactly this date, if any.
pub fn phase_event_on(date: NaiveDate, events: &[PhaseEvent]) -> Option<PhaseKind> {
    events.iter().find(|e| e.date == date).map(|e| e.kind)
}

pub fn day_cell(date: NaiveDate, events: &[PhaseEvent]) -> DayCell {
    let classification = classify(date, events);
    DayCell {
        day: date.day(),
        date,
        classification,
        color: color_for(classification.sub_phase, classification.day_index),
        event: phase_event_on(date, events),
    }
}

pub fn month_grid(year: i32, month: u32, events: &[PhaseEvent]) -> MonthGrid {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let cells = (1..=days_in_month(year, month))
        .map(|day| day_cell(first.with_day(day).unwrap(), events))
        .collect();
    MonthGrid {
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        cells,
    }
}

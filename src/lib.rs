pub mod activity;
pub mod app;
pub mod color;
pub mod month;
pub mod phase_table;

pub use activity::{classify, classify_utc, Classification, SubPhase};
pub use color::{blend, color_for, Rgb, ACTIVITY_GREEN, ACTIVITY_RED};
pub use month::{
    day_cell, days_in_month, month_grid, phase_event_on, DayCell, MonthGrid, MONTH_NAMES,
    WEEKDAY_LABELS,
};
pub use phase_table::{
    days_between, events, validate, PhaseEvent, PhaseKind, TableError, TARGET_YEAR,
};

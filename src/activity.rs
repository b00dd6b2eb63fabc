use chrono::{DateTime, NaiveDate, Utc};

use crate::phase_table::{days_between, PhaseEvent, PhaseKind};

// Each classification window covers the seven days starting at its anchor
// event. Windows are half-open: a date exactly seven days after the anchor
// is outside it and falls through to the next rule.
const WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubPhase {
    WaxingCrescent,
    WaxingGibbous,
    None,
}

impl SubPhase {
    pub fn label(&self) -> &'static str {
        match self {
            SubPhase::WaxingCrescent => "Waxing Crescent",
            SubPhase::WaxingGibbous => "Waxing Gibbous",
            SubPhase::None => "Quiet",
        }
    }
}

/// Where a date landed: the window it belongs to and its 1-based day within
/// that window (0 when the date is outside both windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub sub_phase: SubPhase,
    pub day_index: i32,
}

impl Classification {
    pub const NONE: Self = Self {
        sub_phase: SubPhase::None,
        day_index: 0,
    };
}

/// Classify a date against the phase table.
///
/// New moon windows are checked first, in table order, then first quarter
/// windows; the scan stops at the first hit. Table order is chronological,
/// so the first hit is the nearest preceding anchor whose window still
/// covers the date.
pub fn classify(date: NaiveDate, events: &[PhaseEvent]) -> Classification {
    for (kind, sub_phase) in [
        (PhaseKind::NewMoon, SubPhase::WaxingCrescent),
        (PhaseKind::FirstQuarter, SubPhase::WaxingGibbous),
    ] {
        for event in events.iter().filter(|e| e.kind == kind) {
            let offset = days_between(event.date, date);
            if (0..WINDOW_DAYS).contains(&offset) {
                return Classification {
                    sub_phase,
                    day_index: offset as i32 + 1,
                };
            }
        }
    }
    Classification::NONE
}

/// Classify a UTC timestamp by its calendar date; time of day is ignored.
pub fn classify_utc(dt: DateTime<Utc>, events: &[PhaseEvent]) -> Classification {
    classify(dt.date_naive(), events)
}

use chrono::NaiveDate;
use lazy_static::lazy_static;

/// Year the phase table below is authored for. Showing a different year
/// means supplying a new literal table; nothing here is generated.
pub const TARGET_YEAR: i32 = 2025;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    NewMoon,
    FirstQuarter,
}

/// A single phase transition: the UTC calendar date a phase instant falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseEvent {
    pub kind: PhaseKind,
    pub date: NaiveDate,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("phase table is empty")]
    Empty,

    #[error("invalid calendar date {year}-{month:02}-{day:02} in phase table")]
    BadDate { year: i32, month: u32, day: u32 },

    #[error("phase table entry {index} ({date}) does not come after {prev}")]
    OutOfOrder {
        index: usize,
        date: NaiveDate,
        prev: NaiveDate,
    },
}

// New moon and first quarter instants for 2025 (UTC), truncated to dates.
// Merged chronologically; the kinds alternate on the ~29.5-day synodic cycle.
const PHASE_DATES: &[(PhaseKind, u32, u32)] = &[
    (PhaseKind::FirstQuarter, 1, 6),
    (PhaseKind::NewMoon, 1, 29),
    (PhaseKind::FirstQuarter, 2, 5),
    (PhaseKind::NewMoon, 2, 28),
    (PhaseKind::FirstQuarter, 3, 6),
    (PhaseKind::NewMoon, 3, 29),
    (PhaseKind::FirstQuarter, 4, 5),
    (PhaseKind::NewMoon, 4, 27),
    (PhaseKind::FirstQuarter, 5, 4),
    (PhaseKind::NewMoon, 5, 27),
    (PhaseKind::FirstQuarter, 6, 3),
    (PhaseKind::NewMoon, 6, 25),
    (PhaseKind::FirstQuarter, 7, 2),
    (PhaseKind::NewMoon, 7, 24),
    (PhaseKind::FirstQuarter, 8, 1),
    (PhaseKind::NewMoon, 8, 23),
    (PhaseKind::FirstQuarter, 8, 31),
    (PhaseKind::NewMoon, 9, 21),
    (PhaseKind::FirstQuarter, 9, 29),
    (PhaseKind::NewMoon, 10, 21),
    (PhaseKind::FirstQuarter, 10, 29),
    (PhaseKind::NewMoon, 11, 20),
    (PhaseKind::FirstQuarter, 11, 28),
    (PhaseKind::NewMoon, 12, 20),
    (PhaseKind::FirstQuarter, 12, 27),
];

fn build_table(year: i32, raw: &[(PhaseKind, u32, u32)]) -> Result<Vec<PhaseEvent>, TableError> {
    let mut events = Vec::with_capacity(raw.len());
    for &(kind, month, day) in raw {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TableError::BadDate { year, month, day })?;
        events.push(PhaseEvent { kind, date });
    }
    Ok(events)
}

lazy_static! {
    static ref PHASE_EVENTS: Vec<PhaseEvent> =
        build_table(TARGET_YEAR, PHASE_DATES).expect("phase table literals are well-formed");
}

/// The ordered, read-only phase transition table for [`TARGET_YEAR`].
pub fn events() -> &'static [PhaseEvent] {
    &PHASE_EVENTS
}

/// Signed count of whole calendar days from `a` to `b`.
///
/// Both operands are plain calendar dates, so the count is exact: there is no
/// local-time, DST, or leap-second arithmetic to distort it.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// Check the table once at startup: non-empty and strictly increasing by
/// date. A malformed table is an authoring fault and the caller should abort
/// with the returned message rather than misclassify at runtime.
pub fn validate(events: &[PhaseEvent]) -> Result<(), TableError> {
    if events.is_empty() {
        return Err(TableError::Empty);
    }
    for (index, pair) in events.windows(2).enumerate() {
        if pair[1].date <= pair[0].date {
            return Err(TableError::OutOfOrder {
                index: index + 1,
                date: pair[1].date,
                prev: pair[0].date,
            });
        }
    }
    Ok(())
}

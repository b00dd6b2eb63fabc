use chrono::{Datelike, NaiveDate};
use pretty_assertions::assert_eq;

use lunar_calendar::phase_table::{
    days_between, events, validate, PhaseEvent, PhaseKind, TableError, TARGET_YEAR,
};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(TARGET_YEAR, month, day).unwrap()
}

// ── Table shape ──

#[test]
fn test_table_passes_validation() {
    validate(events()).expect("shipped table is well-formed");
}

#[test]
fn test_table_covers_the_target_year() {
    assert_eq!(events().len(), 25);
    assert!(events().iter().all(|e| e.date.year() == TARGET_YEAR));

    let new_moons = events()
        .iter()
        .filter(|e| e.kind == PhaseKind::NewMoon)
        .count();
    let first_quarters = events()
        .iter()
        .filter(|e| e.kind == PhaseKind::FirstQuarter)
        .count();
    assert_eq!(new_moons, 12);
    assert_eq!(first_quarters, 13);
}

#[test]
fn test_table_is_strictly_increasing() {
    assert!(events().windows(2).all(|pair| pair[0].date < pair[1].date));
}

#[test]
fn test_table_kinds_alternate() {
    assert!(events().windows(2).all(|pair| pair[0].kind != pair[1].kind));
}

#[test]
fn test_table_endpoints() {
    let first = events().first().unwrap();
    assert_eq!(first.kind, PhaseKind::FirstQuarter);
    assert_eq!(first.date, date(1, 6));

    let last = events().last().unwrap();
    assert_eq!(last.kind, PhaseKind::FirstQuarter);
    assert_eq!(last.date, date(12, 27));
}

// ── Validation failures ──

#[test]
fn test_validate_rejects_empty_table() {
    assert!(matches!(validate(&[]), Err(TableError::Empty)));
}

#[test]
fn test_validate_rejects_out_of_order_entries() {
    let table = [
        PhaseEvent {
            kind: PhaseKind::NewMoon,
            date: date(1, 29),
        },
        PhaseEvent {
            kind: PhaseKind::FirstQuarter,
            date: date(1, 6),
        },
    ];
    match validate(&table) {
        Err(TableError::OutOfOrder { index, date, prev }) => {
            assert_eq!(index, 1);
            assert_eq!(date, NaiveDate::from_ymd_opt(TARGET_YEAR, 1, 6).unwrap());
            assert_eq!(prev, NaiveDate::from_ymd_opt(TARGET_YEAR, 1, 29).unwrap());
        }
        other => panic!("expected OutOfOrder, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_duplicate_dates() {
    let event = PhaseEvent {
        kind: PhaseKind::NewMoon,
        date: date(1, 29),
    };
    let table = [
        event,
        PhaseEvent {
            kind: PhaseKind::FirstQuarter,
            ..event
        },
    ];
    assert!(matches!(
        validate(&table),
        Err(TableError::OutOfOrder { .. })
    ));
}

// ── Day arithmetic ──

#[test]
fn test_days_between_same_day_is_zero() {
    assert_eq!(days_between(date(1, 1), date(1, 1)), 0);
}

#[test]
fn test_days_between_is_signed() {
    assert_eq!(days_between(date(1, 29), date(2, 2)), 4);
    assert_eq!(days_between(date(2, 2), date(1, 29)), -4);
}

#[test]
fn test_days_between_crosses_february() {
    // 2025 is not a leap year.
    assert_eq!(days_between(date(2, 27), date(3, 1)), 2);
    assert_eq!(
        days_between(
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        ),
        2
    );
}

#[test]
fn test_days_between_spans_the_year() {
    assert_eq!(days_between(date(1, 1), date(12, 31)), 364);
}

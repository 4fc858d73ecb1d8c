use std::time::Duration;

use date_helpers::{
    add_offset,
    error::ErrorKind,
    fetch_holidays,
    holidays::{fetch_holidays_with_provider, is_holiday_with_provider, FixedHolidayProvider},
    is_before, is_holiday, is_same_calendar_day, is_within_range,
    time::EpochNanoseconds,
    Instant, UnitKind, UtcOffset,
};

fn date(year: i32, month: u8, day: u8) -> Instant {
    Instant::from_date(year, month, day).unwrap()
}

fn datetime(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Instant {
    Instant::try_from_local(year, month, day, hour, minute, second, UtcOffset::UTC).unwrap()
}

const UNITS: [UnitKind; 6] = [
    UnitKind::Seconds,
    UnitKind::Minutes,
    UnitKind::Days,
    UnitKind::Weeks,
    UnitKind::Months,
    UnitKind::Years,
];

#[test]
fn add_then_subtract_returns_to_start() {
    let start = datetime(2026, 1, 15, 13, 45, 10);
    for unit in UNITS {
        for amount in [1.0, 7.0, 30.0, -12.0] {
            let forward = add_offset(&start, amount, Some(unit)).unwrap();
            let back = add_offset(&forward, -amount, Some(unit)).unwrap();
            assert_eq!(back, start, "{amount} {unit}");
        }
    }
}

#[test]
fn month_end_clamping_is_not_reversible() {
    let jan_31 = date(2026, 1, 31);
    let feb = add_offset(&jan_31, 1.0, Some(UnitKind::Months)).unwrap();
    assert_eq!(feb.ymd(), (2026, 2, 28));
    let back = add_offset(&feb, -1.0, Some(UnitKind::Months)).unwrap();
    assert_eq!(back.ymd(), (2026, 1, 28));

    let leap_day = date(2028, 2, 29);
    let next_year = add_offset(&leap_day, 1.0, Some(UnitKind::Years)).unwrap();
    assert_eq!(next_year.ymd(), (2029, 2, 28));
}

#[test]
fn unrecognized_unit_text_adds_days() {
    let start = date(2026, 1, 15);
    let by_text = add_offset(&start, 3.0, Some(UnitKind::from("fortnights"))).unwrap();
    let by_days = add_offset(&start, 3.0, Some(UnitKind::Days)).unwrap();
    assert_eq!(by_text, by_days);
    assert_eq!(by_text.ymd(), (2026, 1, 18));
}

#[test]
fn add_offset_rejects_invalid_input() {
    let corrupt = Instant::from(EpochNanoseconds::from(-i128::MAX));
    assert!(!corrupt.is_valid());
    let err = add_offset(&corrupt, 1.0, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "InvalidArgument: Invalid date provided");

    let err = add_offset(&date(2026, 1, 15), f64::NAN, Some(UnitKind::Weeks)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), "Invalid amount provided");
}

#[test]
fn input_is_never_mutated() {
    let start = date(2026, 1, 15);
    let copy = start;
    let _ = add_offset(&start, 10.0, Some(UnitKind::Years)).unwrap();
    assert_eq!(start.epoch_nanoseconds(), copy.epoch_nanoseconds());
}

#[test]
fn within_range_is_exclusive_and_validated() {
    let from = date(2026, 2, 1);
    let to = date(2026, 2, 28);
    assert!(is_within_range(&date(2026, 2, 15), &from, &to).unwrap());
    assert!(!is_within_range(&from, &from, &to).unwrap());
    assert!(!is_within_range(&to, &from, &to).unwrap());

    // Reversed bounds fail no matter where the instant falls.
    for probe in [date(2026, 1, 1), date(2026, 2, 15), date(2026, 3, 1)] {
        let err = is_within_range(&probe, &to, &from).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
    }
}

#[test]
fn before_is_a_strict_order() {
    let instants = [
        date(2025, 2, 15),
        datetime(2026, 2, 15, 10, 0, 0),
        datetime(2026, 2, 15, 14, 0, 0),
        date(2026, 3, 15),
    ];
    for (i, a) in instants.iter().enumerate() {
        for (j, b) in instants.iter().enumerate() {
            assert_eq!(is_before(a, b), i < j);
        }
    }
}

#[test]
fn same_calendar_day_ignores_time() {
    assert!(is_same_calendar_day(
        &datetime(2026, 1, 15, 0, 0, 0),
        &datetime(2026, 1, 15, 23, 59, 59)
    ));
    assert!(!is_same_calendar_day(
        &datetime(2026, 1, 15, 23, 59, 59),
        &datetime(2026, 1, 16, 0, 0, 0)
    ));
}

#[tokio::test]
async fn fetch_holidays_in_order() {
    for year in [2025, 2026] {
        let set = fetch_holidays(year).await;
        assert_eq!(
            set.instants(),
            [date(year, 1, 1), date(year, 12, 25), date(year, 12, 31)]
        );
    }
}

#[tokio::test]
async fn holidays_match_any_time_of_day() {
    assert!(is_holiday(&date(2026, 1, 1)).await);
    assert!(is_holiday(&date(2026, 12, 25)).await);
    assert!(is_holiday(&date(2026, 12, 31)).await);
    assert!(is_holiday(&date(2025, 1, 1)).await);
    assert!(is_holiday(&datetime(2026, 12, 25, 8, 0, 0)).await);
    assert!(is_holiday(&datetime(2026, 12, 25, 20, 0, 0)).await);
    assert!(!is_holiday(&date(2026, 6, 15)).await);
}

#[tokio::test]
async fn custom_provider() {
    let offset = UtcOffset::from_hours_minutes(9, 0).unwrap();
    let provider = FixedHolidayProvider::default()
        .with_latency(Duration::from_millis(5))
        .with_offset(offset);

    let set = fetch_holidays_with_provider(2026, &provider).await;
    let new_year = set.instants()[0];
    assert_eq!(new_year.offset(), offset);
    assert_eq!(new_year.with_offset(UtcOffset::UTC).ymd(), (2025, 12, 31));

    let local_new_year = Instant::try_from_local(2026, 1, 1, 12, 0, 0, offset).unwrap();
    assert!(is_holiday_with_provider(&local_new_year, &provider).await);
}

#[tokio::test]
async fn concurrent_lookups() {
    let new_year = date(2026, 1, 1);
    let midsummer = date(2026, 6, 15);
    let (a, b, c) = tokio::join!(
        is_holiday(&new_year),
        is_holiday(&midsummer),
        fetch_holidays(2030),
    );
    assert!(a);
    assert!(!b);
    assert_eq!(c.year(), 2030);
}

#[tokio::test]
async fn provider_calendar_decides_the_day() {
    let tokyo = UtcOffset::from_hours_minutes(9, 0).unwrap();
    let provider = FixedHolidayProvider::default()
        .with_latency(Duration::from_millis(1))
        .with_offset(tokyo);

    // Noon UTC is 21:00 the same day in Tokyo.
    let noon = |month, day| datetime(2026, month, day, 12, 0, 0);
    assert!(!is_holiday_with_provider(&noon(12, 24), &provider).await);
    assert!(!is_holiday_with_provider(&noon(12, 30), &provider).await);
    assert!(is_holiday_with_provider(&noon(1, 1), &provider).await);
    assert!(is_holiday_with_provider(&noon(12, 25), &provider).await);
    assert!(is_holiday_with_provider(&noon(12, 31), &provider).await);

    // 2025-12-31T16:00Z is already New Year's Day 2026 in Tokyo.
    let late = datetime(2025, 12, 31, 16, 0, 0);
    assert!(is_holiday_with_provider(&late, &provider).await);
    assert!(is_holiday(&late).await);
    // 2026-01-01T20:00Z is January 2nd in Tokyo.
    assert!(!is_holiday_with_provider(&datetime(2026, 1, 1, 20, 0, 0), &provider).await);
}

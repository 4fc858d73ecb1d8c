//! Date arithmetic and comparison helpers.
//!
//! All helpers are pure: they never mutate their arguments and always return
//! a new [`Instant`] or a plain value.

use crate::{
    error::ErrorMessage, host::HostClock, offset::UtcOffset, options::UnitKind,
    primitive::FiniteF64, DateError, DateResult, Instant, NS_PER_MILLISECOND,
};

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60_000.0;

/// Returns the calendar year of the current moment in the UTC calendar.
///
/// Falls back to the year of the Unix epoch if the system clock cannot be
/// read.
#[cfg(feature = "sys")]
#[must_use]
pub fn current_year() -> i32 {
    current_year_with_clock(&crate::sys::SystemClock, UtcOffset::UTC).unwrap_or_else(|_e| {
        #[cfg(feature = "log")]
        log::error!("unable to read the system clock: {_e}");
        1970
    })
}

/// Returns the calendar year of the current moment of `clock`, read in the
/// local calendar of `offset`.
pub fn current_year_with_clock(clock: &impl HostClock, offset: UtcOffset) -> DateResult<i32> {
    Instant::now_with_clock(clock, offset).map(|now| now.year())
}

/// Adds `amount` units of `unit` to `instant`, returning a new `Instant`.
///
/// A `unit` of `None` adds days. Negative amounts subtract.
///
/// - Seconds and minutes add exact time, truncated to whole milliseconds.
/// - Days and weeks move the local calendar date and keep the wall-clock time.
/// - Months and years move the local calendar month, clamping the day to the
///   length of the resulting month. Years are added as `amount * 12` months.
///
/// Fractional amounts are truncated toward zero after scaling to the unit's
/// base (milliseconds, days, or months).
///
/// ## Errors
///
/// - `InvalidArgument` if `instant` is corrupt or `amount` is not finite.
/// - `Range` if the result is not representable.
///
/// ```rust
/// use date_helpers::{add_offset, Instant, UnitKind};
///
/// let jan_31 = Instant::from_date(2026, 1, 31).unwrap();
/// let result = add_offset(&jan_31, 1.0, Some(UnitKind::Months)).unwrap();
/// assert_eq!(result.ymd(), (2026, 2, 28));
///
/// let result = add_offset(&jan_31, 5.0, None).unwrap();
/// assert_eq!(result.ymd(), (2026, 2, 5));
/// ```
pub fn add_offset(instant: &Instant, amount: f64, unit: Option<UnitKind>) -> DateResult<Instant> {
    if !instant.is_valid() {
        #[cfg(feature = "log")]
        log::debug!("rejecting corrupt instant {}", instant.epoch_nanoseconds());
        return Err(DateError::invalid_argument().with_enum(ErrorMessage::InvalidDate));
    }
    let amount = FiniteF64::try_from(amount)?;
    let unit = unit.unwrap_or_default();

    #[cfg(feature = "log")]
    log::trace!("adding {} {unit} to {instant}", amount.as_inner());

    if amount.is_zero() {
        return Ok(*instant);
    }

    match unit {
        UnitKind::Seconds => add_milliseconds(instant, amount.scaled_trunc(MS_PER_SECOND)?),
        UnitKind::Minutes => add_milliseconds(instant, amount.scaled_trunc(MS_PER_MINUTE)?),
        UnitKind::Days => instant.add_calendar_days(amount.scaled_trunc(1.0)?),
        UnitKind::Weeks => instant.add_calendar_days(amount.scaled_trunc(7.0)?),
        UnitKind::Months => instant.add_calendar_months(amount.scaled_trunc(1.0)?),
        UnitKind::Years => instant.add_calendar_months(amount.scaled_trunc(12.0)?),
    }
}

#[inline]
fn add_milliseconds(instant: &Instant, milliseconds: i64) -> DateResult<Instant> {
    instant.add_nanoseconds(i128::from(milliseconds) * i128::from(NS_PER_MILLISECOND))
}

/// Returns whether `instant` lies strictly between `from` and `to`.
///
/// Both endpoints are excluded: an `instant` equal to `from` or `to` is not
/// within the range.
///
/// ## Errors
///
/// `InvalidRange` if `from` is after `to`.
pub fn is_within_range(instant: &Instant, from: &Instant, to: &Instant) -> DateResult<bool> {
    if from > to {
        return Err(DateError::invalid_range().with_enum(ErrorMessage::FromAfterTo));
    }
    Ok(instant > from && instant < to)
}

/// Returns whether `instant` is strictly earlier than `compare`.
#[inline]
#[must_use]
pub fn is_before(instant: &Instant, compare: &Instant) -> bool {
    instant < compare
}

/// Returns whether both instants fall on the same year, month, and day.
///
/// The comparison uses the local calendar of `instant`; time of day is ignored.
#[must_use]
pub fn is_same_calendar_day(instant: &Instant, compare: &Instant) -> bool {
    instant.ymd() == compare.with_offset(instant.offset()).ymd()
}

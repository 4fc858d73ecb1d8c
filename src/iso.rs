//! This module implements the ISO field records.
//!
//! The three record types are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` holds a proleptic Gregorian year, month, and day. An `IsoTime`
//! holds a wall-clock time of day down to the nanosecond. An `IsoDateTime` has
//! the fields of both and is what an `Instant` reads in its local calendar.

use date_equations::gregorian;

use crate::{
    error::ErrorMessage, offset::UtcOffset, time::EpochNanoseconds, DateError, DateResult,
    NS_PER_DAY, NS_PER_SECOND,
};

// The `Instant` range, ±100_000_000 days, widened by a day for local offsets.
const MAX_EPOCH_DAYS: i64 = 100_000_001;

const NS_PER_MINUTE: u64 = 60 * NS_PER_SECOND;
const NS_PER_HOUR: u64 = 60 * NS_PER_MINUTE;

/// How out of range fields are resolved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArithmeticOverflow {
    /// Clamp the day to the length of the month.
    #[default]
    Constrain,
    /// Reject the fields with a range error.
    Reject,
}

/// `IsoDateTime` is the record of the `IsoDate` and `IsoTime` fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validation.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Returns the local date and time of `nanos` in the calendar of `offset`.
    pub(crate) fn from_epoch_nanos(nanos: EpochNanoseconds, offset: UtcOffset) -> Self {
        // Offsets are bounded to less than a day, so this only saturates for
        // values far outside of the valid instant range.
        let local = EpochNanoseconds::from(nanos.as_i128().saturating_add(offset.nanoseconds()));
        let (epoch_days, nanos_of_day) = local.to_epoch_days_and_nanos();
        Self::new_unchecked(
            IsoDate::from_epoch_days(epoch_days),
            IsoTime::from_nanos_of_day(nanos_of_day),
        )
    }

    /// Returns the epoch nanoseconds of this local date and time in `offset`.
    ///
    /// The result is not validated.
    pub(crate) fn as_epoch_nanos(&self, offset: UtcOffset) -> EpochNanoseconds {
        let days = i128::from(self.date.to_epoch_days());
        let local = days * i128::from(NS_PER_DAY) + i128::from(self.time.to_nanos_of_day());
        EpochNanoseconds::from(local - offset.nanoseconds())
    }

    /// Adds calendar days, keeping the wall-clock time.
    pub(crate) fn add_days(&self, days: i64) -> DateResult<Self> {
        Ok(Self::new_unchecked(self.date.add_days(days)?, self.time))
    }

    /// Adds calendar months, constraining the day and keeping the wall-clock time.
    pub(crate) fn add_months(&self, months: i64) -> DateResult<Self> {
        Ok(Self::new_unchecked(self.date.add_months(months)?, self.time))
    }
}

// ==== `IsoDate` section ====

/// `IsoDate` serves as a record for the ISO year, month, and day fields.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, resolving out of range fields with `overflow`.
    pub(crate) fn new_with_overflow(
        year: i32,
        month: i32,
        day: i32,
        overflow: ArithmeticOverflow,
    ) -> DateResult<Self> {
        let date = match overflow {
            ArithmeticOverflow::Constrain => {
                let month = month.clamp(1, 12);
                let day = constrain_iso_day(year, month, day);
                // NOTE: Values are clamped in a u8 range.
                Self::new_unchecked(year, month as u8, day)
            }
            ArithmeticOverflow::Reject => {
                if !is_valid_date(year, month, day) {
                    return Err(DateError::range().with_message("not a valid ISO date."));
                }
                // NOTE: Values have been verified to be in a u8 range.
                Self::new_unchecked(year, month as u8, day as u8)
            }
        };
        date.is_valid_day_range()?;
        Ok(date)
    }

    pub(crate) fn from_epoch_days(epoch_days: i64) -> Self {
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_days);
        Self::new_unchecked(year, month, day)
    }

    /// Returns the days since the Unix epoch.
    #[inline]
    pub(crate) fn to_epoch_days(self) -> i64 {
        gregorian::epoch_days_from_ymd(self.year, self.month, self.day)
    }

    pub(crate) fn is_valid_day_range(&self) -> DateResult<()> {
        if self.to_epoch_days().abs() > MAX_EPOCH_DAYS {
            return Err(DateError::range().with_enum(ErrorMessage::DateOutOfRange));
        }
        Ok(())
    }

    /// Returns the `IsoDate` `days` after this one.
    pub(crate) fn add_days(self, days: i64) -> DateResult<Self> {
        let epoch_days = self
            .to_epoch_days()
            .checked_add(days)
            .filter(|d| d.abs() <= MAX_EPOCH_DAYS)
            .ok_or_else(|| DateError::range().with_enum(ErrorMessage::DateOutOfRange))?;
        Ok(Self::from_epoch_days(epoch_days))
    }

    /// Returns the `IsoDate` `months` after this one, clamping the day to the
    /// length of the resulting month.
    pub(crate) fn add_months(self, months: i64) -> DateResult<Self> {
        let (year, month) =
            balance_iso_year_month(i64::from(self.year), i64::from(self.month), months)
                .ok_or_else(|| DateError::range().with_enum(ErrorMessage::DateOutOfRange))?;
        Self::new_with_overflow(
            year,
            month,
            i32::from(self.day),
            ArithmeticOverflow::Constrain,
        )
    }
}

// ==== `IsoTime` section ====

/// An `IsoTime` record holds a wall-clock time of day.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Nanoseconds into the current second.
    pub nanosecond: u32,
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Creates a new regulated `IsoTime`.
    pub(crate) fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> DateResult<Self> {
        if !is_valid_time(hour, minute, second, nanosecond) {
            return Err(DateError::range().with_enum(ErrorMessage::InvalidTime));
        }
        Ok(Self::new_unchecked(hour, minute, second, nanosecond))
    }

    /// Returns an `IsoTime` set to 00:00:00.
    pub(crate) const fn midnight() -> Self {
        Self::new_unchecked(0, 0, 0, 0)
    }

    pub(crate) fn from_nanos_of_day(nanos: u64) -> Self {
        debug_assert!(nanos < NS_PER_DAY);
        let hour = nanos / NS_PER_HOUR;
        let minute = nanos % NS_PER_HOUR / NS_PER_MINUTE;
        let second = nanos % NS_PER_MINUTE / NS_PER_SECOND;
        let nanosecond = nanos % NS_PER_SECOND;
        Self::new_unchecked(hour as u8, minute as u8, second as u8, nanosecond as u32)
    }

    pub(crate) fn to_nanos_of_day(self) -> u64 {
        u64::from(self.hour) * NS_PER_HOUR
            + u64::from(self.minute) * NS_PER_MINUTE
            + u64::from(self.second) * NS_PER_SECOND
            + u64::from(self.nanosecond)
    }
}

// ==== `IsoDate` specific utilities ====

#[inline]
fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    is_valid_iso_day(year, month, day)
}

/// Balances a year and month after adding `months`.
///
/// Returns `None` if the resulting year does not fit in an `i32`.
#[inline]
fn balance_iso_year_month(year: i64, month: i64, months: i64) -> Option<(i32, i32)> {
    let zero_based = month.checked_sub(1)?.checked_add(months)?;
    let y = year.checked_add(zero_based.div_euclid(12))?;
    let m = zero_based.rem_euclid(12) + 1;
    Some((i32::try_from(y).ok()?, m as i32))
}

#[inline]
fn iso_days_in_month(year: i32, month: i32) -> i32 {
    // NOTE: month is within 1..=12 for every caller.
    i32::from(gregorian::days_in_month(year, month as u8))
}

#[inline]
pub(crate) fn constrain_iso_day(year: i32, month: i32, day: i32) -> u8 {
    let days_in_month = iso_days_in_month(year, month);
    day.clamp(1, days_in_month) as u8
}

#[inline]
pub(crate) fn is_valid_iso_day(year: i32, month: i32, day: i32) -> bool {
    let days_in_month = iso_days_in_month(year, month);
    (1..=days_in_month).contains(&day)
}

// ==== `IsoTime` specific utilities ====

#[inline]
fn is_valid_time(hour: u8, minute: u8, second: u8, nanosecond: u32) -> bool {
    hour <= 23 && minute <= 59 && second <= 59 && u64::from(nanosecond) < NS_PER_SECOND
}

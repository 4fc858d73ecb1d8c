//! An implementation of an `Instant` read through a local calendar.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use writeable::Writeable;

use crate::{
    error::ErrorMessage,
    format::FormattableInstant,
    host::HostClock,
    iso::{IsoDate, IsoDateTime, IsoTime},
    offset::UtcOffset,
    time::EpochNanoseconds,
    DateError, DateResult, NS_PER_MILLISECOND,
};

/// An absolute point in time with calendar field accessors.
///
/// The calendar fields (`year`, `month`, `day`, ...) are read in the local
/// calendar given by the instant's [`UtcOffset`]. Equality, ordering, and
/// hashing only consider the absolute time, so the same moment viewed through
/// two different offsets compares equal.
///
/// ```rust
/// use date_helpers::{Instant, UtcOffset};
///
/// let plus_one = UtcOffset::from_hours_minutes(1, 0).unwrap();
/// let local = Instant::try_from_local(2026, 1, 1, 0, 30, 0, plus_one).unwrap();
///
/// assert_eq!(local.day(), 1);
/// assert_eq!(local.with_offset(UtcOffset::UTC).year(), 2025);
/// assert_eq!(local.to_string(), "2026-01-01T00:30:00+01:00");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Instant {
    nanoseconds: EpochNanoseconds,
    offset: UtcOffset,
}

/// Creates an `Instant` without validating the epoch nanoseconds.
///
/// The resulting `Instant` may be corrupt; see [`Instant::is_valid`].
impl From<EpochNanoseconds> for Instant {
    fn from(value: EpochNanoseconds) -> Self {
        Self {
            nanoseconds: value,
            offset: UtcOffset::UTC,
        }
    }
}

// ==== Private API ====

impl Instant {
    pub(crate) fn new_unchecked(nanoseconds: EpochNanoseconds, offset: UtcOffset) -> Self {
        Self {
            nanoseconds,
            offset,
        }
    }

    /// Creates a validated `Instant` from local fields in `offset`.
    pub(crate) fn from_iso(iso: IsoDateTime, offset: UtcOffset) -> DateResult<Self> {
        let nanoseconds = iso.as_epoch_nanos(offset);
        nanoseconds.check_validity()?;
        Ok(Self::new_unchecked(nanoseconds, offset))
    }

    /// Returns the local date and time fields of this `Instant`.
    #[inline]
    pub(crate) fn iso(&self) -> IsoDateTime {
        IsoDateTime::from_epoch_nanos(self.nanoseconds, self.offset)
    }

    /// Adds an exact number of nanoseconds.
    pub(crate) fn add_nanoseconds(&self, nanos: i128) -> DateResult<Self> {
        let result = self
            .nanoseconds
            .checked_add(nanos)
            .ok_or_else(|| DateError::range().with_enum(ErrorMessage::InstantOutOfRange))?;
        result.check_validity()?;
        Ok(Self::new_unchecked(result, self.offset))
    }

    /// Adds calendar days in the local calendar, keeping the wall-clock time.
    pub(crate) fn add_calendar_days(&self, days: i64) -> DateResult<Self> {
        Self::from_iso(self.iso().add_days(days)?, self.offset)
    }

    /// Adds calendar months in the local calendar, keeping the wall-clock time
    /// and clamping the day to the length of the resulting month.
    pub(crate) fn add_calendar_months(&self, months: i64) -> DateResult<Self> {
        Self::from_iso(self.iso().add_months(months)?, self.offset)
    }
}

// ==== Public API ====

impl Instant {
    /// Creates a new `Instant` from epoch nanoseconds in the UTC calendar.
    pub fn try_new(epoch_nanoseconds: i128) -> DateResult<Self> {
        Ok(Self::from(EpochNanoseconds::try_new(epoch_nanoseconds)?))
    }

    /// Creates a new `Instant` from epoch milliseconds in the UTC calendar.
    pub fn from_epoch_milliseconds(epoch_milliseconds: i64) -> DateResult<Self> {
        let nanoseconds = EpochNanoseconds::from_milliseconds(epoch_milliseconds);
        nanoseconds.check_validity()?;
        Ok(Self::from(nanoseconds))
    }

    /// Creates an `Instant` at midnight of a UTC calendar date.
    pub fn from_date(year: i32, month: u8, day: u8) -> DateResult<Self> {
        Self::try_from_local(year, month, day, 0, 0, 0, UtcOffset::UTC)
    }

    /// Creates an `Instant` from wall-clock fields in the local calendar of `offset`.
    ///
    /// Fields are not balanced: February 30th or 24:00 are rejected with a
    /// range error.
    pub fn try_from_local(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        offset: UtcOffset,
    ) -> DateResult<Self> {
        let date = IsoDate::new_with_overflow(
            year,
            month.into(),
            day.into(),
            crate::iso::ArithmeticOverflow::Reject,
        )?;
        let time = IsoTime::new(hour, minute, second, 0)?;
        Self::from_iso(IsoDateTime::new_unchecked(date, time), offset)
    }

    /// Returns the current `Instant` from `clock`, read in the local calendar of `offset`.
    pub fn now_with_clock(clock: &impl HostClock, offset: UtcOffset) -> DateResult<Self> {
        let nanoseconds = clock.get_host_epoch_nanoseconds()?;
        nanoseconds.check_validity()?;
        Ok(Self::new_unchecked(nanoseconds, offset))
    }

    /// Returns the current `Instant` from the system clock in the UTC calendar.
    #[cfg(feature = "sys")]
    pub fn now() -> DateResult<Self> {
        Self::now_with_clock(&crate::sys::SystemClock, UtcOffset::UTC)
    }

    /// Returns the same absolute time read through another local calendar.
    #[must_use]
    pub fn with_offset(&self, offset: UtcOffset) -> Self {
        Self::new_unchecked(self.nanoseconds, offset)
    }

    /// Returns whether this `Instant` lies within the representable range.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.nanoseconds.check_validity().is_ok()
    }

    /// Returns the epoch nanoseconds of this `Instant`.
    #[inline]
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> i128 {
        self.nanoseconds.as_i128()
    }

    /// Returns the epoch milliseconds of this `Instant`, rounded toward negative infinity.
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i64 {
        let millis = self
            .nanoseconds
            .as_i128()
            .div_euclid(i128::from(NS_PER_MILLISECOND));
        // Saturate corrupt values rather than wrap.
        millis.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Returns the local calendar offset.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Returns the calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.iso().date.year
    }

    /// Returns the calendar month, 1-12.
    #[must_use]
    pub fn month(&self) -> u8 {
        self.iso().date.month
    }

    /// Returns the day of the month, 1-31.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.iso().date.day
    }

    #[must_use]
    pub fn hour(&self) -> u8 {
        self.iso().time.hour
    }

    #[must_use]
    pub fn minute(&self) -> u8 {
        self.iso().time.minute
    }

    #[must_use]
    pub fn second(&self) -> u8 {
        self.iso().time.second
    }

    /// Returns the milliseconds into the current second.
    #[must_use]
    pub fn millisecond(&self) -> u16 {
        (self.iso().time.nanosecond / NS_PER_MILLISECOND as u32) as u16
    }

    /// Returns the nanoseconds into the current second.
    #[must_use]
    pub fn nanosecond(&self) -> u32 {
        self.iso().time.nanosecond
    }

    /// Returns the local calendar date as `(year, month, day)`.
    #[must_use]
    pub fn ymd(&self) -> (i32, u8, u8) {
        let date = self.iso().date;
        (date.year, date.month, date.day)
    }
}

// ==== Trait impls ====

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        self.nanoseconds == other.nanoseconds
    }
}

impl Eq for Instant {}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Instant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.nanoseconds.cmp(&other.nanoseconds)
    }
}

impl Hash for Instant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nanoseconds.hash(state);
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FormattableInstant::new(self.iso(), self.offset).write_to(f)
    }
}

// ==== Instant Tests ====

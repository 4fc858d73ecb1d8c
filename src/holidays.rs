//! Holiday lookups.
//!
//! Holidays are served by a [`HolidayProvider`]. The default
//! [`FixedHolidayProvider`] answers with a fixed set of three holidays per
//! year after a simulated lookup latency.

use core::{future::Future, time::Duration};

use crate::{
    iso::{IsoDate, IsoDateTime, IsoTime},
    offset::UtcOffset,
    Instant,
};

/// The default simulated latency of a holiday lookup.
pub const DEFAULT_LOOKUP_LATENCY: Duration = Duration::from_millis(100);

/// A holiday in a [`HolidaySet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Holiday {
    /// January 1st
    NewYearsDay,
    /// December 25th
    Christmas,
    /// December 31st
    NewYearsEve,
}

impl Holiday {
    /// Every holiday, in calendar order.
    pub const ALL: [Self; 3] = [Self::NewYearsDay, Self::Christmas, Self::NewYearsEve];

    /// Returns the English name of the holiday.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::NewYearsDay => "New Year's Day",
            Self::Christmas => "Christmas",
            Self::NewYearsEve => "New Year's Eve",
        }
    }

    /// Returns the `(month, day)` the holiday falls on.
    #[must_use]
    pub fn month_day(self) -> (u8, u8) {
        match self {
            Self::NewYearsDay => (1, 1),
            Self::Christmas => (12, 25),
            Self::NewYearsEve => (12, 31),
        }
    }
}

/// The holidays of a single year, at local midnight in a fixed calendar.
///
/// A `HolidaySet` always holds exactly three entries, ordered as
/// [`Holiday::ALL`]. For the edge years of the `Instant` range some entries
/// fall outside of the representable range and report `is_valid() == false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolidaySet {
    year: i32,
    offset: UtcOffset,
}

impl HolidaySet {
    /// Creates the holidays of `year` in the local calendar of `offset`.
    #[must_use]
    pub fn new(year: i32, offset: UtcOffset) -> Self {
        Self { year, offset }
    }

    /// Returns the year of this set.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the local calendar offset of this set.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Returns the number of holidays, which is always 3.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        Holiday::ALL.len()
    }

    /// Always `false`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the local midnight `Instant` of `holiday`.
    #[must_use]
    pub fn get(&self, holiday: Holiday) -> Instant {
        let (month, day) = holiday.month_day();
        let iso = IsoDateTime::new_unchecked(
            IsoDate::new_unchecked(self.year, month, day),
            IsoTime::midnight(),
        );
        Instant::new_unchecked(iso.as_epoch_nanos(self.offset), self.offset)
    }

    /// Returns the holidays with their `Instant`s, in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Holiday, Instant)> + '_ {
        Holiday::ALL.into_iter().map(|h| (h, self.get(h)))
    }

    /// Returns the holiday `Instant`s, in calendar order.
    #[must_use]
    pub fn instants(&self) -> [Instant; 3] {
        Holiday::ALL.map(|h| self.get(h))
    }

    /// Returns the holiday that falls on the calendar day of `instant`, if any.
    ///
    /// `instant` is read in the local calendar of this set.
    #[must_use]
    pub fn holiday_on(&self, instant: &Instant) -> Option<Holiday> {
        let (year, month, day) = instant.with_offset(self.offset).ymd();
        if year != self.year {
            return None;
        }
        Holiday::ALL
            .into_iter()
            .find(|h| h.month_day() == (month, day))
    }
}

impl IntoIterator for HolidaySet {
    type Item = Instant;
    type IntoIter = core::array::IntoIter<Instant, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.instants().into_iter()
    }
}

/// The `HolidayProvider` trait defines an asynchronous source of holidays.
pub trait HolidayProvider {
    /// Returns the local calendar the provider resolves holidays in.
    fn offset(&self) -> UtcOffset;

    /// Fetches the holidays of `year`.
    fn fetch_holidays(&self, year: i32) -> impl Future<Output = HolidaySet> + Send;
}

/// A provider that serves the fixed [`HolidaySet`] after a simulated latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHolidayProvider {
    latency: Duration,
    offset: UtcOffset,
}

impl Default for FixedHolidayProvider {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LOOKUP_LATENCY,
            offset: UtcOffset::UTC,
        }
    }
}

impl FixedHolidayProvider {
    /// Sets the simulated lookup latency.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the local calendar the holidays are resolved in.
    #[must_use]
    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = offset;
        self
    }

    #[inline]
    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }

}

impl HolidayProvider for FixedHolidayProvider {
    fn offset(&self) -> UtcOffset {
        self.offset
    }

    fn fetch_holidays(&self, year: i32) -> impl Future<Output = HolidaySet> + Send {
        let (latency, offset) = (self.latency, self.offset);
        async move {
            #[cfg(feature = "log")]
            log::debug!("fetching holidays for {year}");
            tokio::time::sleep(latency).await;
            HolidaySet::new(year, offset)
        }
    }
}

/// Fetches the holidays of `year` in the UTC calendar from the default provider.
///
/// Resolves after [`DEFAULT_LOOKUP_LATENCY`].
pub async fn fetch_holidays(year: i32) -> HolidaySet {
    fetch_holidays_with_provider(year, &FixedHolidayProvider::default()).await
}

/// Fetches the holidays of `year` from `provider`.
pub async fn fetch_holidays_with_provider(
    year: i32,
    provider: &impl HolidayProvider,
) -> HolidaySet {
    provider.fetch_holidays(year).await
}

/// Returns whether `instant` falls on a holiday of its own year and local
/// calendar. The time of day is ignored.
pub async fn is_holiday(instant: &Instant) -> bool {
    let provider = FixedHolidayProvider::default().with_offset(instant.offset());
    is_holiday_with_provider(instant, &provider).await
}

/// Returns whether `instant` falls on a holiday served by `provider`.
///
/// The calendar day of `instant` is read in the provider's local calendar.
pub async fn is_holiday_with_provider(instant: &Instant, provider: &impl HolidayProvider) -> bool {
    let local = instant.with_offset(provider.offset());
    let holidays = provider.fetch_holidays(local.year()).await;
    let found = holidays.holiday_on(&local);

    #[cfg(feature = "log")]
    if let Some(holiday) = found {
        log::trace!("{local} is {}", holiday.name());
    }

    found.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant as StdInstant;

    fn quick() -> FixedHolidayProvider {
        FixedHolidayProvider::default().with_latency(Duration::from_millis(1))
    }

    #[test]
    fn set_order_and_dates() {
        let set = HolidaySet::new(2026, UtcOffset::UTC);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        let instants = set.instants();
        assert_eq!(instants[0], Instant::from_date(2026, 1, 1).unwrap());
        assert_eq!(instants[1], Instant::from_date(2026, 12, 25).unwrap());
        assert_eq!(instants[2], Instant::from_date(2026, 12, 31).unwrap());

        let names: std::vec::Vec<_> = set.iter().map(|(h, _)| h.name()).collect();
        assert_eq!(names, ["New Year's Day", "Christmas", "New Year's Eve"]);
    }

    #[test]
    fn set_is_local_midnight() {
        let offset = UtcOffset::from_hours_minutes(5, 30).unwrap();
        let set = HolidaySet::new(2026, offset);
        let christmas = set.get(Holiday::Christmas);
        assert_eq!(christmas.ymd(), (2026, 12, 25));
        assert_eq!((christmas.hour(), christmas.minute()), (0, 0));
        assert_eq!(christmas.with_offset(UtcOffset::UTC).ymd(), (2026, 12, 24));
    }

    #[test]
    fn edge_years_do_not_panic() {
        let set = HolidaySet::new(275_760, UtcOffset::UTC);
        assert!(set.get(Holiday::NewYearsDay).is_valid());
        assert!(!set.get(Holiday::Christmas).is_valid());
        let set = HolidaySet::new(i32::MAX, UtcOffset::UTC);
        assert_eq!(set.instants().len(), 3);
    }

    #[test]
    fn holiday_on() {
        let set = HolidaySet::new(2026, UtcOffset::UTC);
        let eve = Instant::try_from_local(2026, 12, 31, 23, 59, 59, UtcOffset::UTC).unwrap();
        assert_eq!(set.holiday_on(&eve), Some(Holiday::NewYearsEve));
        let june = Instant::from_date(2026, 6, 15).unwrap();
        assert_eq!(set.holiday_on(&june), None);
        let last_year = Instant::from_date(2025, 12, 25).unwrap();
        assert_eq!(set.holiday_on(&last_year), None);
    }

    #[test]
    fn holiday_on_reads_the_set_calendar() {
        let tokyo = UtcOffset::from_hours_minutes(9, 0).unwrap();
        let set = HolidaySet::new(2026, tokyo);
        // 2026-12-24T20:00Z is 2026-12-25T05:00+09:00.
        let utc = Instant::try_from_local(2026, 12, 24, 20, 0, 0, UtcOffset::UTC).unwrap();
        assert_eq!(set.holiday_on(&utc), Some(Holiday::Christmas));
        let noon = Instant::try_from_local(2026, 12, 24, 12, 0, 0, UtcOffset::UTC).unwrap();
        assert_eq!(set.holiday_on(&noon), None);
    }

    #[tokio::test]
    async fn fetch_holidays_resolves_after_latency() {
        let start = StdInstant::now();
        let set = fetch_holidays(2025).await;
        assert!(start.elapsed() >= DEFAULT_LOOKUP_LATENCY);
        assert_eq!(set.year(), 2025);
        assert_eq!(set.get(Holiday::NewYearsDay).ymd(), (2025, 1, 1));
    }

    #[tokio::test]
    async fn is_holiday_ignores_time_of_day() {
        let provider = quick();
        let morning = Instant::try_from_local(2026, 12, 25, 8, 0, 0, UtcOffset::UTC).unwrap();
        let evening = Instant::try_from_local(2026, 12, 25, 20, 0, 0, UtcOffset::UTC).unwrap();
        assert!(is_holiday_with_provider(&morning, &provider).await);
        assert!(is_holiday_with_provider(&evening, &provider).await);

        let regular = Instant::from_date(2026, 6, 15).unwrap();
        assert!(!is_holiday_with_provider(&regular, &provider).await);
    }

    #[tokio::test]
    async fn is_holiday_uses_instant_calendar() {
        // 2026-12-31T20:00-05:00 is already 2027-01-01 in UTC.
        let offset = UtcOffset::from_hours_minutes(-5, 0).unwrap();
        let eve = Instant::try_from_local(2026, 12, 31, 20, 0, 0, offset).unwrap();
        assert!(is_holiday(&eve).await);
        assert!(is_holiday(&eve.with_offset(UtcOffset::UTC)).await);

        let boxing_day = Instant::try_from_local(2026, 12, 26, 1, 0, 0, offset).unwrap();
        assert!(!is_holiday(&boxing_day).await);
        // ...but it is still Christmas in Honolulu.
        let honolulu = UtcOffset::from_hours_minutes(-10, 0).unwrap();
        assert!(is_holiday(&boxing_day.with_offset(honolulu)).await);
    }
}

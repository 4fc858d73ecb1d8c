use crate::{error::ErrorMessage, DateError, NS_MAX_INSTANT, NS_MIN_INSTANT, NS_PER_DAY};

/// Nanoseconds since the Unix epoch.
///
/// The value is not validated on construction. Use
/// [`EpochNanoseconds::check_validity`] or [`EpochNanoseconds::try_new`]
/// when the value comes from an untrusted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct EpochNanoseconds(pub(crate) i128);

impl From<i128> for EpochNanoseconds {
    fn from(value: i128) -> Self {
        Self(value)
    }
}

impl EpochNanoseconds {
    /// Creates validated `EpochNanoseconds`.
    pub fn try_new(value: i128) -> Result<Self, DateError> {
        let result = Self(value);
        result.check_validity()?;
        Ok(result)
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self(i128::from(seconds) * 1_000_000_000)
    }

    pub fn from_milliseconds(milliseconds: i64) -> Self {
        Self(i128::from(milliseconds) * 1_000_000)
    }

    pub fn as_i128(&self) -> i128 {
        self.0
    }

    /// Returns the days since the epoch and the nanoseconds into that day.
    ///
    /// Values more than a day outside of the valid range are clamped.
    pub(crate) fn to_epoch_days_and_nanos(self) -> (i64, u64) {
        let ns_per_day = i128::from(NS_PER_DAY);
        let value = self
            .0
            .clamp(NS_MIN_INSTANT - ns_per_day, NS_MAX_INSTANT + ns_per_day);
        let days = value.div_euclid(ns_per_day);
        let nanos = value.rem_euclid(ns_per_day);
        // NOTE: Both values are bounded by the clamp above.
        (days as i64, nanos as u64)
    }

    pub(crate) fn checked_add(self, nanos: i128) -> Option<Self> {
        self.0.checked_add(nanos).map(Self)
    }

    pub fn check_validity(&self) -> Result<(), DateError> {
        if !is_valid_epoch_nanos(&self.0) {
            return Err(DateError::range().with_enum(ErrorMessage::InstantOutOfRange));
        }
        Ok(())
    }
}

/// Utility for determining if the nanos are within a valid range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    (NS_MIN_INSTANT..=NS_MAX_INSTANT).contains(nanos)
}

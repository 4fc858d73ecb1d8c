//! The fixed UTC offset of a local calendar.

use crate::{error::ErrorMessage, DateError, DateResult, NS_PER_SECOND};

const MAX_OFFSET_SECONDS: i32 = 86_399;

/// A fixed offset from UTC, in seconds.
///
/// Every [`Instant`][crate::Instant] reads its calendar fields in the
/// local calendar described by a `UtcOffset`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(i32);

impl UtcOffset {
    /// The UTC offset, `+00:00`.
    pub const UTC: Self = Self(0);

    /// Creates a new `UtcOffset` from seconds east of UTC.
    pub fn from_seconds(seconds: i32) -> DateResult<Self> {
        if !(-MAX_OFFSET_SECONDS..=MAX_OFFSET_SECONDS).contains(&seconds) {
            return Err(DateError::range().with_enum(ErrorMessage::OffsetOutOfRange));
        }
        Ok(Self(seconds))
    }

    /// Creates a new `UtcOffset` from signed hours and minutes, e.g. `(-5, 30)`
    /// for `-05:30`.
    pub fn from_hours_minutes(hours: i8, minutes: u8) -> DateResult<Self> {
        if minutes > 59 {
            return Err(DateError::range().with_enum(ErrorMessage::OffsetOutOfRange));
        }
        let magnitude = i32::from(hours.unsigned_abs()) * 3600 + i32::from(minutes) * 60;
        Self::from_seconds(if hours < 0 { -magnitude } else { magnitude })
    }

    /// Returns the offset in seconds.
    #[inline]
    #[must_use]
    pub fn seconds(&self) -> i32 {
        self.0
    }

    #[inline]
    pub(crate) fn nanoseconds(&self) -> i128 {
        i128::from(self.0) * i128::from(NS_PER_SECOND)
    }

    #[inline]
    pub(crate) fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the offset as unsigned `(hours, minutes, seconds)`.
    pub(crate) fn to_hms(self) -> (u8, u8, u8) {
        let abs = self.0.unsigned_abs();
        ((abs / 3600) as u8, (abs % 3600 / 60) as u8, (abs % 60) as u8)
    }
}

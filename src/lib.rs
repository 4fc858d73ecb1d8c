//! The `date_helpers` crate provides small date arithmetic, comparison, and
//! holiday lookup helpers over an [`Instant`] that is read through a fixed
//! local calendar.
//!
//! ```rust
//! use date_helpers::{add_offset, is_same_calendar_day, is_within_range, Instant, UnitKind};
//!
//! let start = Instant::from_date(2026, 1, 15).unwrap();
//! let later = add_offset(&start, 2.0, Some(UnitKind::Weeks)).unwrap();
//! assert_eq!(later.ymd(), (2026, 1, 29));
//!
//! let end = add_offset(&start, 1.0, Some(UnitKind::Months)).unwrap();
//! assert!(is_within_range(&later, &start, &end).unwrap());
//! // Range endpoints are excluded.
//! assert!(!is_within_range(&start, &start, &end).unwrap());
//!
//! let evening = add_offset(&start, 1_380.0, Some(UnitKind::Minutes)).unwrap();
//! assert!(is_same_calendar_day(&start, &evening));
//! ```
//!
//! Holiday lookups are asynchronous and resolve after a simulated latency:
//!
//! ```rust
//! use date_helpers::{holidays, Instant};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let christmas = Instant::from_date(2026, 12, 25).unwrap();
//! assert!(holidays::is_holiday(&christmas).await);
//!
//! let set = holidays::fetch_holidays(2026).await;
//! assert_eq!(set.len(), 3);
//! # });
//! ```
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,

    // Field values are range checked before every narrowing cast.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

pub mod error;
pub mod holidays;
pub mod host;
pub mod options;
pub mod primitive;

#[cfg(feature = "sys")]
pub mod sys;

mod epoch_nanoseconds;
mod format;
mod helpers;
mod instant;
mod iso;
mod offset;

#[doc(inline)]
pub use error::DateError;

/// The `date_helpers` result type
pub type DateResult<T> = Result<T, DateError>;

pub mod time {
    pub use crate::epoch_nanoseconds::EpochNanoseconds;
}

pub use crate::{
    helpers::{
        add_offset, current_year_with_clock, is_before, is_same_calendar_day, is_within_range,
    },
    holidays::{fetch_holidays, is_holiday, Holiday, HolidayProvider, HolidaySet},
    instant::Instant,
    offset::UtcOffset,
    options::UnitKind,
};

#[cfg(feature = "sys")]
pub use crate::helpers::current_year;

// Relevant numeric constants
/// Nanoseconds per second constant: 1e+9
pub const NS_PER_SECOND: u64 = 1_000_000_000;
/// Nanoseconds per millisecond constant: 1e+6
pub const NS_PER_MILLISECOND: u64 = 1_000_000;
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: u64 = MS_PER_DAY as u64 * NS_PER_MILLISECOND;
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
/// Max Instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MAX_INSTANT: i128 = NS_PER_DAY as i128 * 100_000_000i128;
/// Min Instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MIN_INSTANT: i128 = -NS_MAX_INSTANT;

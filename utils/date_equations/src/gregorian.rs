/// Gregorian Date Calculations
///
/// The epoch day conversions live in [`neri_schneider`]. Euclidean
/// division is used for the century step so the equations hold for
/// dates before the computational epoch (March 1, year 0) without
/// shifting the Rata Die.
pub mod neri_schneider;

pub use neri_schneider::{
    epoch_days_from_ymd, ymd_from_epoch_days, MAX_EPOCH_DAYS, MIN_EPOCH_DAYS,
};

/// Returns whether `year` is a Gregorian leap year.
#[inline]
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` (1-12) of `year`.
///
/// Months outside of 1-12 return 0.
#[inline]
#[must_use]
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

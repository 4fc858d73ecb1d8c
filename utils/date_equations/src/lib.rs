/// # Date Equations
///
/// Small, allocation free Gregorian calendar equations used by
/// `date_helpers` to move between epoch days and calendar fields.
/// The conversions follow Cassio Neri and Lorenz Schneider's
/// Euclidean affine function approach.
///
/// ``` rust
/// use date_equations::gregorian;
///
/// assert_eq!(gregorian::ymd_from_epoch_days(0), (1970, 1, 1));
/// assert_eq!(gregorian::epoch_days_from_ymd(2026, 1, 1), 20_454);
/// ```
pub mod gregorian;

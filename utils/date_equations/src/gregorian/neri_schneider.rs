// The computational calendar starts on March 1st of year 0 so that the
// leap day is the last day of the computational year.
//
// Unix epoch (1970-01-01) lands on computational Rata Die 719_468.

const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;

const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;
const DAYS_IN_A_4Y_CYCLE: i64 = 1_461;
const TWO_POWER_SIXTEEN: i64 = 65_536;

/// Returns the days since the Unix epoch for a Gregorian date.
///
/// `month` is expected to be 1-12 and `day` 1-31. Out of range days
/// are not rejected and simply overflow into the neighbouring months.
#[must_use]
pub const fn epoch_days_from_ymd(year: i32, month: u8, day: u8) -> i64 {
    rata_die_from_ymd(year, month as i64, day as i64) - EPOCH_COMPUTATIONAL_RATA_DIE
}

/// The epoch days of `-2147483648-01-01`, the first day with an `i32` year.
pub const MIN_EPOCH_DAYS: i64 = epoch_days_from_ymd(i32::MIN, 1, 1);

/// The epoch days of `+2147483647-12-31`, the last day with an `i32` year.
pub const MAX_EPOCH_DAYS: i64 = epoch_days_from_ymd(i32::MAX, 12, 31);

/// Returns the Gregorian year, month, and day for days since the Unix epoch.
///
/// `epoch_days` is clamped to `MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS`, so the
/// result always has an `i32` year.
#[must_use]
pub const fn ymd_from_epoch_days(epoch_days: i64) -> (i32, u8, u8) {
    let epoch_days = if epoch_days < MIN_EPOCH_DAYS {
        MIN_EPOCH_DAYS
    } else if epoch_days > MAX_EPOCH_DAYS {
        MAX_EPOCH_DAYS
    } else {
        epoch_days
    };
    ymd_from_rata_die(epoch_days + EPOCH_COMPUTATIONAL_RATA_DIE)
}

const fn rata_die_from_ymd(year: i32, month: i64, day: i64) -> i64 {
    // January and February belong to the prior computational year.
    let j = (month <= 2) as i64;
    let comp_year = year as i64 - j;
    let comp_month = month + 12 * j;
    let comp_day = day - 1;
    let century = comp_year.div_euclid(100);

    let y_star = (DAYS_IN_A_4Y_CYCLE * comp_year).div_euclid(4) - century + century.div_euclid(4);
    let m_star = (979 * comp_month - 2919) / 32;
    y_star + m_star + comp_day
}

const fn ymd_from_rata_die(rata_die: i64) -> (i32, u8, u8) {
    // Century and day of century
    let n_one = 4 * rata_die + 3;
    let century = n_one.div_euclid(DAYS_IN_A_400Y_CYCLE);
    let day_of_century = n_one.rem_euclid(DAYS_IN_A_400Y_CYCLE) / 4;

    // Year of century and day of year
    let n_two = 4 * day_of_century + 3;
    let year_of_century = n_two / DAYS_IN_A_4Y_CYCLE;
    let day_of_year = (n_two % DAYS_IN_A_4Y_CYCLE) / 4;

    // Computational month and day
    let n_three = 2141 * day_of_year + 197_913;
    let comp_month = n_three / TWO_POWER_SIXTEEN;
    let comp_day = (n_three % TWO_POWER_SIXTEEN) / 2141;

    let j = (day_of_year >= 306) as i64;
    let year = 100 * century + year_of_century + j;
    let month = comp_month - 12 * j;
    let day = comp_day + 1;
    (year as i32, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch() {
        assert_eq!(epoch_days_from_ymd(1970, 1, 1), 0);
        assert_eq!(ymd_from_epoch_days(0), (1970, 1, 1));
        assert_eq!(ymd_from_epoch_days(-1), (1969, 12, 31));
    }

    #[test]
    fn known_dates() {
        assert_eq!(epoch_days_from_ymd(2000, 3, 1), 11_017);
        assert_eq!(epoch_days_from_ymd(2026, 1, 15), 20_468);
        assert_eq!(ymd_from_epoch_days(20_468), (2026, 1, 15));
        assert_eq!(ymd_from_epoch_days(19_417), (2023, 3, 1));
        assert_eq!(ymd_from_epoch_days(18_321), (2020, 2, 29));
        assert_eq!(epoch_days_from_ymd(1900, 1, 1), -25_567);
    }

    #[test]
    fn day_overflow_rolls_into_next_month() {
        assert_eq!(
            epoch_days_from_ymd(2026, 1, 32),
            epoch_days_from_ymd(2026, 2, 1)
        );
    }

    #[test]
    fn extreme_range_is_consistent() {
        // Edges of the `Instant` range.
        for days in [-100_000_001, -100_000_000, 100_000_000, 100_000_001] {
            let (y, m, d) = ymd_from_epoch_days(days);
            assert_eq!(epoch_days_from_ymd(y, m, d), days);
        }
        assert_eq!(ymd_from_epoch_days(-100_000_000), (-271_821, 4, 20));
        assert_eq!(ymd_from_epoch_days(100_000_000), (275_760, 9, 13));
    }

    #[test]
    fn out_of_range_days_clamp_to_i32_years() {
        assert_eq!(MIN_EPOCH_DAYS, -784_353_015_833);
        assert_eq!(MAX_EPOCH_DAYS, 784_351_576_776);
        assert_eq!(ymd_from_epoch_days(MAX_EPOCH_DAYS), (i32::MAX, 12, 31));
        assert_eq!(ymd_from_epoch_days(MIN_EPOCH_DAYS), (i32::MIN, 1, 1));
        assert_eq!(ymd_from_epoch_days(i64::MAX), (i32::MAX, 12, 31));
        assert_eq!(ymd_from_epoch_days(i64::MIN), (i32::MIN, 1, 1));
        assert_eq!(ymd_from_epoch_days(i64::MAX / 4), (i32::MAX, 12, 31));
    }

    #[test]
    fn sequential_days_round_trip() {
        let mut days = epoch_days_from_ymd(1599, 1, 1);
        let end = epoch_days_from_ymd(2401, 1, 1);
        while days < end {
            let (y, m, d) = ymd_from_epoch_days(days);
            assert_eq!(epoch_days_from_ymd(y, m, d), days);
            days += 1;
        }
    }
}

// File: src/dates.rs
// Circular calendar distance used by the upcoming-events query.
use chrono::{Datelike, NaiveDate};

/// Number of days in `year` (365 or 366), read off December 31st's ordinal.
pub fn year_length(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 12, 31)
        .unwrap()
        .ordinal()
}

/// Re-anchors `date`'s month/day into `year`. The shift only fails for
/// Feb 29 in a non-leap target year; that case clamps to Feb 28.
fn anchor_into_year(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 2, 28).unwrap()
    })
}

/// Days to travel forward from `from` to reach the anniversary of `to`'s
/// month/day, wrapping at year end.
///
/// Both dates are compared as 1-based ordinals within `from`'s year; a
/// negative raw gap wraps forward by that year's length, so an anniversary
/// earlier in the calendar year still counts as "coming up next year".
/// Total over any two dates; the result is in `[0, year_length - 1]`.
pub fn forward_distance_days(from: NaiveDate, to: NaiveDate) -> u32 {
    let anchored = anchor_into_year(to, from.year());

    let raw = i64::from(anchored.ordinal()) - i64::from(from.ordinal());
    if raw < 0 {
        (raw + i64::from(year_length(from.year()))) as u32
    } else {
        raw as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_length() {
        assert_eq!(year_length(2023), 365);
        assert_eq!(year_length(2024), 366);
        assert_eq!(year_length(1900), 365); // century, not a leap year
        assert_eq!(year_length(2000), 366);
    }

    #[test]
    fn test_anchor_clamps_leap_day() {
        let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            anchor_into_year(leap_day, 2023),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
        assert_eq!(
            anchor_into_year(leap_day, 2028),
            NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()
        );
    }
}

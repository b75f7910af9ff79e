//! Calendar arithmetic for the numeric (chrono-free) API.
//!
//! Dates follow the historical Gregorian calendar: the Julian leap-year rule
//! applies before 1582-10-15, and the ten days dropped at the reform do not exist.

use crate::{Error, Result};

/// Days skipped by the Gregorian reform (1582-10-05 through 1582-10-14).
const GREGORIAN_REFORM_GAP: u32 = 10;

/// Cumulative day counts before each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Returns the ordinal day number (1-366) of a calendar date.
///
/// # Errors
/// Returns `InvalidDateTime` if the month or day is out of range, or if the date
/// falls inside the 1582 Gregorian reform gap.
///
/// # Example
/// ```
/// # use solar_events::time::day_of_year;
/// assert_eq!(day_of_year(2016, 3, 9).unwrap(), 69);
/// assert_eq!(day_of_year(2015, 12, 31).unwrap(), 365);
/// assert!(day_of_year(2015, 2, 29).is_err());
/// ```
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_datetime("month must be between 1 and 12"));
    }
    if !(1..=31).contains(&day) {
        return Err(Error::invalid_datetime("day must be between 1 and 31"));
    }
    if day > days_in_month(year, month, day)? {
        return Err(Error::invalid_datetime("day is out of range for month"));
    }

    let is_gregorian = is_gregorian_date(year, month, day);
    let leap_day = u32::from(month > 2 && is_leap_year(year, is_gregorian));
    let mut ordinal = DAYS_BEFORE_MONTH[(month - 1) as usize] + day + leap_day;

    if year == 1582 && is_gregorian {
        ordinal -= GREGORIAN_REFORM_GAP;
    }

    Ok(ordinal)
}

const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32, is_gregorian: bool) -> bool {
    if is_gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i32, month: u32, day: u32) -> Result<u32> {
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(Error::invalid_datetime(
            "dates 1582-10-05 through 1582-10-14 do not exist in Gregorian calendar",
        ));
    }

    let is_gregorian = is_gregorian_date(year, month, day);
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year, is_gregorian) {
                29
            } else {
                28
            }
        }
        _ => return Err(Error::invalid_datetime("month must be between 1 and 12")),
    };
    Ok(days)
}

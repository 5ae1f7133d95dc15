//! Scheduling calculations for the booking flow.
//!
//! This module provides the calendar math behind the month grid and
//! day availability, plus the time arithmetic used to display a slot's
//! end time. Everything here is a pure function of its inputs; the only
//! captured state is the "today" a [`Calendar`] is constructed with.

use chrono::{Datelike, Local, NaiveDate};

/// Full weekday names, Monday first.
const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Calendar math for the booking month grid.
///
/// A `Calendar` captures "today" at construction time, with the time of
/// day already zeroed: today itself counts as bookable, and a date only
/// becomes a past date once the calendar day changes. All methods are
/// total; callers supply `month` in [1,12] and `day` in
/// [1, days_in_month], and out-of-range input falls back to a harmless
/// value instead of panicking.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tbook::domain::Calendar;
///
/// let calendar = Calendar::with_today(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
///
/// // A business day on or after today is bookable
/// assert!(calendar.is_available_day(2024, 1, 15));
/// // Weekends are not
/// assert!(!calendar.is_available_day(2024, 1, 20));
/// ```
#[derive(Debug, Clone)]
pub struct Calendar {
    /// Date-only "today" used for the past-date cutoff
    today: NaiveDate,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar {
    /// Creates a calendar anchored to the local date.
    pub fn new() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Creates a calendar anchored to a fixed date.
    ///
    /// This is the injection point that keeps availability deterministic
    /// in tests.
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    /// The date this calendar treats as today.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Whether a date can be booked: a Monday-Friday weekday that is not
    /// before today.
    pub fn is_available_day(&self, year: i32, month: u32, day: u32) -> bool {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => date.weekday().num_days_from_monday() < 5 && date >= self.today,
            None => false,
        }
    }

    /// Number of days in a month, correct for leap Februaries.
    ///
    /// Computed as day 0 of the following month, i.e. the predecessor of
    /// the next month's first day.
    ///
    /// # Examples
    ///
    /// ```
    /// use tbook::domain::Calendar;
    ///
    /// assert_eq!(Calendar::days_in_month(2024, 2), 29);
    /// assert_eq!(Calendar::days_in_month(2023, 2), 28);
    /// ```
    pub fn days_in_month(year: i32, month: u32) -> u32 {
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(30)
    }

    /// Leading empty cells before day 1 in a Monday-first week grid:
    /// 0 when the month starts on Monday, 6 when it starts on Sunday.
    pub fn month_start_offset(year: i32, month: u32) -> u32 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.weekday().num_days_from_monday())
            .unwrap_or(0)
    }

    /// Full weekday name of a date, or "" for an invalid date.
    pub fn day_name(year: i32, month: u32, day: u32) -> &'static str {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|d| DAY_NAMES[d.weekday().num_days_from_monday() as usize])
            .unwrap_or("")
    }
}

/// Adds minutes to a "H:MM" time-of-day string and re-renders it.
///
/// The hour keeps the source formatting: no zero padding, and no
/// wrapping modulo 24 ("23:45" plus 30 renders as "24:15"). The minute
/// is always zero-padded to two digits. An empty or malformed input
/// yields an empty string rather than an error; the UI only ever passes
/// catalog slots, whose sums stay at or below "17:30".
///
/// # Examples
///
/// ```
/// use tbook::domain::add_minutes;
///
/// assert_eq!(add_minutes("8:00", 30), "8:30");
/// assert_eq!(add_minutes("9:45", 30), "10:15");
/// assert_eq!(add_minutes("", 30), "");
/// ```
pub fn add_minutes(time: &str, minutes: u32) -> String {
    let (hours, mins) = match time.split_once(':') {
        Some(parts) => parts,
        None => return String::new(),
    };
    let (hours, mins) = match (hours.parse::<u32>(), mins.parse::<u32>()) {
        (Ok(h), Ok(m)) => (h, m),
        _ => return String::new(),
    };

    let total = hours * 60 + mins + minutes;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_calendar() -> Calendar {
        // Monday, January 15th 2024
        Calendar::with_today(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    #[test]
    fn test_weekends_never_available() {
        let calendar = fixed_calendar();

        // Saturday and Sunday after today
        assert!(!calendar.is_available_day(2024, 1, 20));
        assert!(!calendar.is_available_day(2024, 1, 21));
        // Weekends stay unavailable arbitrarily far in the future
        assert!(!calendar.is_available_day(2024, 6, 1));
        assert!(!calendar.is_available_day(2025, 3, 2));
    }

    #[test]
    fn test_past_business_days_unavailable() {
        let calendar = fixed_calendar();

        // The Monday and Friday of the previous week
        assert!(!calendar.is_available_day(2024, 1, 8));
        assert!(!calendar.is_available_day(2024, 1, 12));
        // Previous year
        assert!(!calendar.is_available_day(2023, 12, 29));
    }

    #[test]
    fn test_today_and_future_weekdays_available() {
        let calendar = fixed_calendar();

        // Today is a Monday and still bookable
        assert!(calendar.is_available_day(2024, 1, 15));
        // The rest of the work week
        assert!(calendar.is_available_day(2024, 1, 16));
        assert!(calendar.is_available_day(2024, 1, 19));
        // A weekday in a later month
        assert!(calendar.is_available_day(2024, 2, 29));
    }

    #[test]
    fn test_weekend_today_not_available() {
        // Saturday, January 20th 2024
        let calendar =
            Calendar::with_today(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        assert!(!calendar.is_available_day(2024, 1, 20));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(Calendar::days_in_month(2024, 2), 29);
        assert_eq!(Calendar::days_in_month(2023, 2), 28);
        assert_eq!(Calendar::days_in_month(2024, 1), 31);
        assert_eq!(Calendar::days_in_month(2024, 4), 30);
        assert_eq!(Calendar::days_in_month(2024, 12), 31);
        assert_eq!(Calendar::days_in_month(2000, 2), 29);
        assert_eq!(Calendar::days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_month_start_offset_known_months() {
        // January 2024 starts on a Monday
        assert_eq!(Calendar::month_start_offset(2024, 1), 0);
        // February 2024 starts on a Thursday
        assert_eq!(Calendar::month_start_offset(2024, 2), 3);
        // September 2024 starts on a Sunday
        assert_eq!(Calendar::month_start_offset(2024, 9), 6);
    }

    #[test]
    fn test_month_start_offset_in_range() {
        for year in [1999, 2023, 2024, 2025, 2100] {
            for month in 1..=12 {
                let offset = Calendar::month_start_offset(year, month);
                assert!(offset <= 6, "offset {} for {}-{}", offset, year, month);
                // Offset 0 exactly when day 1 is a Monday
                assert_eq!(
                    offset == 0,
                    Calendar::day_name(year, month, 1) == "Monday"
                );
            }
        }
    }

    #[test]
    fn test_day_name() {
        assert_eq!(Calendar::day_name(2024, 1, 15), "Monday");
        assert_eq!(Calendar::day_name(2024, 1, 19), "Friday");
        assert_eq!(Calendar::day_name(2024, 1, 20), "Saturday");
        assert_eq!(Calendar::day_name(2024, 1, 21), "Sunday");
        assert_eq!(Calendar::day_name(2024, 2, 29), "Thursday");
    }

    #[test]
    fn test_add_minutes() {
        assert_eq!(add_minutes("8:00", 30), "8:30");
        assert_eq!(add_minutes("9:45", 30), "10:15");
        assert_eq!(add_minutes("17:00", 30), "17:30");
        assert_eq!(add_minutes("12:30", 45), "13:15");
    }

    #[test]
    fn test_add_minutes_does_not_wrap_hours() {
        // Hour arithmetic is deliberately unwrapped
        assert_eq!(add_minutes("23:45", 30), "24:15");
        assert_eq!(add_minutes("24:00", 60), "25:00");
    }

    #[test]
    fn test_add_minutes_empty_and_malformed() {
        assert_eq!(add_minutes("", 30), "");
        assert_eq!(add_minutes("noon", 30), "");
        assert_eq!(add_minutes("9", 30), "");
        assert_eq!(add_minutes("9:xx", 30), "");
        assert_eq!(add_minutes("x:30", 30), "");
    }
}

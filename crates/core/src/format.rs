// SPDX-License-Identifier: MIT

//!
//! Strings shown around the calendar grid
//!

use crate::day::{DAYS_PER_WEEK, DayId};
use crate::weekday::FirstWeekday;

/// Short weekday symbols, Sunday first
const WEEKDAY_SYMBOLS: [&str; DAYS_PER_WEEK as usize] =
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// e.g. "January 2024"
pub fn month_header(date: DayId) -> String {
    date.date().format("%B %Y").to_string()
}

/// The weekday symbols for a header row, starting from `first_weekday`
pub fn weekday_headers(first_weekday: FirstWeekday) -> [&'static str; DAYS_PER_WEEK as usize] {
    let start = usize::from(first_weekday.value()) - 1;
    std::array::from_fn(|column| WEEKDAY_SYMBOLS[(start + column) % WEEKDAY_SYMBOLS.len()])
}

/// The day-of-month shown in a cell, e.g. "5"
pub fn day_label(date: DayId) -> String {
    date.day().to_string()
}

/// e.g. "5 Mar 2024", or "-" when nothing is selected
pub fn selection_label(date: Option<DayId>) -> String {
    match date {
        Some(date) => date.date().format("%-d %b %Y").to_string(),
        None => String::from("-"),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::day::test::day;

    #[test]
    fn test_month_header() {
        assert_eq!(month_header(day(2024, 1, 1)), "January 2024");
        assert_eq!(month_header(day(1999, 12, 31)), "December 1999");
    }

    #[test]
    fn test_weekday_headers() {
        assert_eq!(
            weekday_headers(FirstWeekday::SUNDAY),
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
        assert_eq!(
            weekday_headers(FirstWeekday::MONDAY),
            ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
        assert_eq!(
            weekday_headers(FirstWeekday::try_from(7).unwrap()),
            ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(day_label(day(2024, 3, 5)), "5");
        assert_eq!(day_label(day(2024, 3, 25)), "25");
        assert_eq!(selection_label(Some(day(2024, 3, 5))), "5 Mar 2024");
        assert_eq!(selection_label(None), "-");
    }
}

// SPDX-License-Identifier: MIT

//!
//! The first-weekday type
//!

use crate::day::DAYS_PER_WEEK;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`FirstWeekday`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeekdayError {
    /// The weekday number is not allowed (must be 1 <= weekday <= 7)
    #[error("Weekday `{0}` is not allowed (must be 1 <= weekday <= 7)")]
    OutOfRange(i64),
}

/// Which weekday starts a week row.  1 is Sunday, 2 is Monday, ... 7 is
/// Saturday.
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct FirstWeekday(u8);

impl FirstWeekday {
    pub const SUNDAY: Self = Self(1);
    pub const MONDAY: Self = Self(2);

    pub fn value(&self) -> u8 {
        self.0
    }

    /// How many days of the previous month precede the first of a month that
    /// starts on `weekday` (1 is Sunday) when weeks start on this weekday
    pub fn leading_days(&self, weekday: u32) -> u32 {
        let offset = i64::from(weekday) - i64::from(self.0);
        offset.rem_euclid(i64::from(DAYS_PER_WEEK)) as u32
    }
}

impl Default for FirstWeekday {
    fn default() -> Self {
        Self::SUNDAY
    }
}

impl TryFrom<i64> for FirstWeekday {
    type Error = WeekdayError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=7).contains(&value) {
            Ok(FirstWeekday(value as u8))
        } else {
            Err(WeekdayError::OutOfRange(value))
        }
    }
}

impl From<chrono::Weekday> for FirstWeekday {
    fn from(value: chrono::Weekday) -> Self {
        FirstWeekday(value.number_from_sunday() as u8)
    }
}

impl<'de> Deserialize<'de> for FirstWeekday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        FirstWeekday::try_from(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn try_from() {
        assert_eq!(FirstWeekday::try_from(0), Err(WeekdayError::OutOfRange(0)));
        assert_eq!(FirstWeekday::try_from(8), Err(WeekdayError::OutOfRange(8)));
        assert_eq!(FirstWeekday::try_from(1), Ok(FirstWeekday::SUNDAY));
        assert_eq!(FirstWeekday::try_from(2), Ok(FirstWeekday::MONDAY));
        assert_eq!(FirstWeekday::try_from(7).unwrap().value(), 7);
    }

    #[test]
    fn from_chrono() {
        assert_eq!(FirstWeekday::from(chrono::Weekday::Sun), FirstWeekday::SUNDAY);
        assert_eq!(FirstWeekday::from(chrono::Weekday::Mon), FirstWeekday::MONDAY);
        assert_eq!(FirstWeekday::from(chrono::Weekday::Sat).value(), 7);
    }

    #[test]
    fn leading_days() {
        // Month starting on a Monday
        assert_eq!(FirstWeekday::MONDAY.leading_days(2), 0);
        assert_eq!(FirstWeekday::SUNDAY.leading_days(2), 1);

        // Month starting on a Sunday
        assert_eq!(FirstWeekday::MONDAY.leading_days(1), 6);
        assert_eq!(FirstWeekday::SUNDAY.leading_days(1), 0);

        // Saturday-start weeks with a month starting on a Friday
        let saturday = FirstWeekday::try_from(7).unwrap();
        assert_eq!(saturday.leading_days(6), 6);
    }

    #[test]
    fn deserialization() {
        let weekday: FirstWeekday = serde_json::from_str("2").unwrap();
        assert_eq!(weekday, FirstWeekday::MONDAY);
        assert!(serde_json::from_str::<FirstWeekday>("0").is_err());
        assert!(serde_json::from_str::<FirstWeekday>("\"Monday\"").is_err());
        assert_eq!(serde_json::to_string(&weekday).unwrap(), "2");
    }
}

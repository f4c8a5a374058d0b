// SPDX-License-Identifier: MIT

//!
//! The day identifier type
//!

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeZone};
use std::str::FromStr;

/// The number of days in a calendar week
pub const DAYS_PER_WEEK: u32 = 7;

/// A calendar day with the time of day stripped.  All equality and ordering
/// in the picker happens at this granularity.
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DayId(NaiveDate);

impl DayId {
    /// Create a [`DayId`] if the year/month/day combination exists
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Get the underlying [`NaiveDate`]
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number (1 <= month <= 12)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month (1 <= day <= 31)
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Weekday number where 1 is Sunday and 7 is Saturday
    pub fn weekday(&self) -> u32 {
        self.0.weekday().number_from_sunday()
    }

    /// The first day of this day's month
    pub fn first_of_month(&self) -> Self {
        Self(self.0 - Days::new(u64::from(self.0.day0())))
    }

    /// Number of days in this day's month
    pub fn days_in_month(&self) -> u32 {
        // Only December of the last representable year has no next month
        self.first_of_month()
            .0
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .map_or(31, |last| last.day())
    }

    /// Whether both days fall in the same month of the same year
    pub fn is_same_month(&self, other: &Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Number of calendar months from this day's month to `other`'s month.
    /// Negative if `other` is in an earlier month.
    pub fn months_until(&self, other: &Self) -> i64 {
        let years = i64::from(other.year()) - i64::from(self.year());
        years * 12 + i64::from(other.month()) - i64::from(self.month())
    }

    /// Shift by whole months (may be negative).  The day is clamped to the
    /// end of the target month.  `None` if the result is out of range.
    pub fn checked_add_months(&self, months: i32) -> Option<Self> {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted.map(Self)
    }

    /// Shift by whole days (may be negative).  `None` if the result is out of
    /// range.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Self)
    }
}

impl From<NaiveDate> for DayId {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl From<NaiveDateTime> for DayId {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DayId {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.date_naive())
    }
}

impl FromStr for DayId {
    type Err = chrono::ParseError;

    /// Parse a `YYYY-MM-DD` string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::from_str(s.trim()).map(Self)
    }
}

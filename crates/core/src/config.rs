// SPDX-License-Identifier: MIT

//!
//! Picker configuration
//!

use crate::day::DayId;
use crate::weekday::{FirstWeekday, WeekdayError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors that can arise when building a [`CalendarConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Weekday(#[from] WeekdayError),
}

/// Which side of today a generated config covers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionWindow {
    /// The year up to and including today
    #[default]
    Past,

    /// Today and the year after it
    Future,
}

/// The calendar configuration for one picker.
///
/// A config is never edited in place by the picker: when the constraints
/// change a new config is built and swapped in.  `minimum_date` is expected to
/// be on or before `maximum_date`, but a config that breaks this is accepted
/// and simply has no months (see [`CalendarConfig::is_degenerate`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// The weekday that starts each week row
    #[serde(default)]
    first_weekday: FirstWeekday,

    /// The earliest selectable day (inclusive)
    minimum_date: DayId,

    /// The latest selectable day (inclusive)
    maximum_date: DayId,

    /// Days that can't be selected
    #[serde(default)]
    disabled_dates: BTreeSet<DayId>,

    /// If set, every day after this one can't be selected
    #[serde(default)]
    disabled_after_date: Option<DayId>,
}

impl CalendarConfig {
    /// Create a config covering `minimum_date..=maximum_date` with Sunday-start
    /// weeks and nothing disabled
    pub fn new(minimum_date: DayId, maximum_date: DayId) -> Self {
        Self {
            first_weekday: FirstWeekday::default(),
            minimum_date,
            maximum_date,
            disabled_dates: BTreeSet::new(),
            disabled_after_date: None,
        }
    }

    /// Create a config covering a year either side of `today`
    pub fn for_window(window: SelectionWindow, today: DayId) -> Self {
        let shift = |months: i32| today.checked_add_months(months).unwrap_or(today);
        match window {
            SelectionWindow::Past => Self::new(shift(-12), today),
            SelectionWindow::Future => Self::new(today, shift(12)),
        }
    }

    /// Parse a config from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_first_weekday(mut self, first_weekday: FirstWeekday) -> Self {
        self.first_weekday = first_weekday;
        self
    }

    /// As [`CalendarConfig::with_first_weekday`] but from a raw weekday number
    pub fn try_with_first_weekday(self, first_weekday: i64) -> Result<Self, ConfigError> {
        Ok(self.with_first_weekday(FirstWeekday::try_from(first_weekday)?))
    }

    pub fn with_disabled_dates<I: IntoIterator<Item = DayId>>(mut self, dates: I) -> Self {
        self.disabled_dates = dates.into_iter().collect();
        self
    }

    pub fn with_disabled_date(mut self, date: DayId) -> Self {
        self.disabled_dates.insert(date);
        self
    }

    pub fn with_disabled_after_date(mut self, date: Option<DayId>) -> Self {
        self.disabled_after_date = date;
        self
    }

    /// Rebuild this config's bounds for a window around `today`, keeping
    /// everything else
    pub fn with_window(self, window: SelectionWindow, today: DayId) -> Self {
        let bounds = Self::for_window(window, today);
        Self {
            minimum_date: bounds.minimum_date,
            maximum_date: bounds.maximum_date,
            ..self
        }
    }

    pub fn first_weekday(&self) -> FirstWeekday {
        self.first_weekday
    }

    pub fn minimum_date(&self) -> DayId {
        self.minimum_date
    }

    pub fn maximum_date(&self) -> DayId {
        self.maximum_date
    }

    pub fn disabled_dates(&self) -> &BTreeSet<DayId> {
        &self.disabled_dates
    }

    pub fn disabled_after_date(&self) -> Option<DayId> {
        self.disabled_after_date
    }

    /// True when the bounds are inverted, in which case there are no months
    /// to show
    pub fn is_degenerate(&self) -> bool {
        self.minimum_date > self.maximum_date
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::day::test::day;

    #[test]
    fn from_json() {
        let json = r#"{
            "first_weekday": 2,
            "minimum_date": "2024-01-01",
            "maximum_date": "2024-12-31",
            "disabled_dates": ["2024-03-08", "2024-05-01"],
            "disabled_after_date": "2024-06-01"
        }"#;
        let config = CalendarConfig::from_json(json).unwrap();
        assert_eq!(config.first_weekday(), FirstWeekday::MONDAY);
        assert_eq!(config.minimum_date(), day(2024, 1, 1));
        assert_eq!(config.maximum_date(), day(2024, 12, 31));
        assert_eq!(config.disabled_dates().len(), 2);
        assert!(config.disabled_dates().contains(&day(2024, 3, 8)));
        assert_eq!(config.disabled_after_date(), Some(day(2024, 6, 1)));
    }

    #[test]
    fn from_json_defaults() {
        let json = r#"{"minimum_date": "2024-01-01", "maximum_date": "2024-12-31"}"#;
        let config = CalendarConfig::from_json(json).unwrap();
        assert_eq!(config, CalendarConfig::new(day(2024, 1, 1), day(2024, 12, 31)));
    }

    #[test]
    fn from_json_rejects_bad_input() {
        // Unknown option
        let json = r#"{"minimum_date": "2024-01-01", "maximum_date": "2024-12-31", "colour": 1}"#;
        assert!(matches!(CalendarConfig::from_json(json), Err(ConfigError::Json(_))));

        // Weekday out of range
        let json = r#"{"first_weekday": 9, "minimum_date": "2024-01-01", "maximum_date": "2024-12-31"}"#;
        assert!(CalendarConfig::from_json(json).is_err());

        // Not a date
        let json = r#"{"minimum_date": "2024-02-30", "maximum_date": "2024-12-31"}"#;
        assert!(CalendarConfig::from_json(json).is_err());
    }

    #[test]
    fn serialization_round_trip() {
        let config = CalendarConfig::new(day(2024, 1, 1), day(2024, 12, 31))
            .with_first_weekday(FirstWeekday::MONDAY)
            .with_disabled_date(day(2024, 2, 14))
            .with_disabled_after_date(Some(day(2024, 11, 30)));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CalendarConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn try_with_first_weekday() {
        let config = CalendarConfig::new(day(2024, 1, 1), day(2024, 12, 31));
        assert!(matches!(
            config.clone().try_with_first_weekday(0),
            Err(ConfigError::Weekday(WeekdayError::OutOfRange(0)))
        ));
        let config = config.try_with_first_weekday(2).unwrap();
        assert_eq!(config.first_weekday(), FirstWeekday::MONDAY);
    }

    #[test]
    fn windows() {
        let past = CalendarConfig::for_window(SelectionWindow::Past, day(2024, 6, 15));
        assert_eq!(past.minimum_date(), day(2023, 6, 15));
        assert_eq!(past.maximum_date(), day(2024, 6, 15));

        let future = CalendarConfig::for_window(SelectionWindow::Future, day(2024, 6, 15));
        assert_eq!(future.minimum_date(), day(2024, 6, 15));
        assert_eq!(future.maximum_date(), day(2025, 6, 15));

        // Leap day clamps to the end of February
        let future = CalendarConfig::for_window(SelectionWindow::Future, day(2024, 2, 29));
        assert_eq!(future.maximum_date(), day(2025, 2, 28));
    }

    #[test]
    fn with_window_keeps_other_options() {
        let config = CalendarConfig::new(day(2020, 1, 1), day(2020, 12, 31))
            .with_first_weekday(FirstWeekday::MONDAY)
            .with_disabled_date(day(2024, 7, 4));
        let config = config.with_window(SelectionWindow::Future, day(2024, 6, 15));
        assert_eq!(config.minimum_date(), day(2024, 6, 15));
        assert_eq!(config.first_weekday(), FirstWeekday::MONDAY);
        assert!(config.disabled_dates().contains(&day(2024, 7, 4)));
    }

    #[test]
    fn degenerate() {
        assert!(!CalendarConfig::new(day(2024, 1, 1), day(2024, 1, 1)).is_degenerate());
        assert!(CalendarConfig::new(day(2024, 1, 2), day(2024, 1, 1)).is_degenerate());
    }
}

// SPDX-License-Identifier: MIT

//!
//! The picker controller.  Owns a config and a selection; front ends call
//! [`Picker::tap`] and then ask for fresh [`MonthView`]s.
//!

use crate::cell::DayCellState;
use crate::config::{CalendarConfig, SelectionWindow};
use crate::day::DayId;
use crate::engine::{self, CalendarError};
use crate::selection::{RangeSelection, TapOutcome};
use log::debug;
use serde::Serialize;

/// One month, ready to draw
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthView {
    /// Month offset from the minimum date's month
    pub offset: i32,

    /// e.g. "January 2024"
    pub header: String,

    /// Week rows.  `None` marks a day from the previous month, which is shown
    /// as a blank cell.
    pub rows: Vec<Vec<Option<DayCellState>>>,
}

/// A date-range picker session
#[derive(Clone, Debug)]
pub struct Picker {
    config: CalendarConfig,
    selection: RangeSelection,
}

impl Picker {
    pub fn new(config: CalendarConfig) -> Self {
        Self {
            config,
            selection: RangeSelection::new(),
        }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn selection(&self) -> &RangeSelection {
        &self.selection
    }

    /// Swap in a new config.  The selection is kept as it is.
    pub fn replace_config(&mut self, config: CalendarConfig) {
        debug!(
            "Replacing config, now {} to {}",
            config.minimum_date(),
            config.maximum_date()
        );
        self.config = config;
    }

    /// Move the bounds to a year either side of `today`
    pub fn set_window(&mut self, window: SelectionWindow, today: DayId) {
        let config = self.config.clone().with_window(window, today);
        self.replace_config(config);
    }

    pub fn tap(&mut self, date: DayId) -> TapOutcome {
        self.selection.tap(&self.config, date)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn classify(&self, date: DayId, now: DayId) -> DayCellState {
        self.selection.classify(&self.config, date, now)
    }

    /// How many months the picker shows
    pub fn number_of_months(&self) -> u32 {
        engine::number_of_months(&self.config)
    }

    /// The month to scroll to when the picker opens: the one holding `now`
    pub fn initial_month_offset(&self, now: DayId) -> Option<i32> {
        engine::month_offset_for(&self.config, now)
    }

    /// Build the view of the month at `month_offset`
    pub fn month(&self, month_offset: i32, now: DayId) -> Result<MonthView, CalendarError> {
        let header = engine::month_header(&self.config, month_offset)?;
        let first = engine::first_of_month(&self.config, month_offset)?;
        let rows = engine::month_grid(&self.config, month_offset)?
            .into_iter()
            .map(|week| {
                week.into_iter()
                    .map(|date| first.is_same_month(&date).then(|| self.classify(date, now)))
                    .collect()
            })
            .collect();
        Ok(MonthView {
            offset: month_offset,
            header,
            rows,
        })
    }

    /// Build the views of every month the picker shows
    pub fn months(&self, now: DayId) -> Result<Vec<MonthView>, CalendarError> {
        let count = i32::try_from(self.number_of_months()).unwrap_or(i32::MAX);
        (0..count).map(|offset| self.month(offset, now)).collect()
    }
}

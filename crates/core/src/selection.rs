// SPDX-License-Identifier: MIT

//!
//! The two-tap range selection.
//!
//! The first tap picks the start (and clears any end), the second picks the
//! end.  An end before the start clears the whole selection.  After the second
//! tap the next one starts a new range, so the cycle never ends.  Taps on days
//! that aren't enabled are ignored.
//!

use crate::cell::DayCellState;
use crate::config::CalendarConfig;
use crate::day::DayId;
use crate::engine;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise when restoring a [`RangeSelection`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The start is after the end
    #[error("Start `{start}` is after end `{end}`")]
    InvertedRange { start: DayId, end: DayId },

    /// The dates set don't fit the phase (e.g. waiting for an end with no
    /// start)
    #[error("Selection dates don't match the `{0:?}` phase")]
    InconsistentPhase(SelectionPhase),
}

/// What the next tap will set
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionPhase {
    #[default]
    AwaitingStart,
    AwaitingEnd,
}

/// What a tap did
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TapOutcome {
    /// The day isn't enabled, nothing changed
    Ignored,

    /// A new range was started
    StartSet,

    /// The end was set on or after the start
    RangeCompleted,

    /// The end was before the start so the selection was cleared
    Reset,
}

/// The start/end selection for one picker session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RangeSelection {
    start_date: Option<DayId>,
    end_date: Option<DayId>,
    phase: SelectionPhase,
}

impl RangeSelection {
    /// An empty selection waiting for its start
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(&self) -> Option<DayId> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<DayId> {
        self.end_date
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// The selected range, once both ends are set
    pub fn range(&self) -> Option<(DayId, DayId)> {
        self.start_date.zip(self.end_date)
    }

    /// Forget the selection
    pub fn clear(&mut self) {
        debug!("Clearing selection");
        *self = Self::default();
    }

    /// Advance the selection with a tap on `date`
    pub fn tap(&mut self, config: &CalendarConfig, date: DayId) -> TapOutcome {
        if !engine::is_enabled(config, date) {
            debug!("Ignoring tap on disabled day {date}");
            return TapOutcome::Ignored;
        }

        match self.phase {
            SelectionPhase::AwaitingStart => {
                self.start_date = Some(date);
                self.end_date = None;
                self.phase = SelectionPhase::AwaitingEnd;
                debug!("Range started at {date}");
                TapOutcome::StartSet
            }
            SelectionPhase::AwaitingEnd => {
                self.end_date = Some(date);
                self.phase = SelectionPhase::AwaitingStart;
                match self.start_date {
                    Some(start) if date < start => {
                        self.start_date = None;
                        self.end_date = None;
                        debug!("End {date} is before start {start}, selection cleared");
                        TapOutcome::Reset
                    }
                    _ => {
                        debug!("Range completed at {date}");
                        TapOutcome::RangeCompleted
                    }
                }
            }
        }
    }

    /// Rebuild a selection from its parts if it is one `tap` could reach
    fn from_parts(
        start_date: Option<DayId>,
        end_date: Option<DayId>,
        phase: SelectionPhase,
    ) -> Result<Self, SelectionError> {
        match (start_date, end_date, phase) {
            (Some(start), Some(end), _) if start > end => {
                Err(SelectionError::InvertedRange { start, end })
            }
            (None, None, SelectionPhase::AwaitingStart)
            | (Some(_), Some(_), SelectionPhase::AwaitingStart)
            | (Some(_), None, SelectionPhase::AwaitingEnd) => Ok(Self {
                start_date,
                end_date,
                phase,
            }),
            _ => Err(SelectionError::InconsistentPhase(phase)),
        }
    }

    /// The state of the cell for `date`
    pub fn classify(&self, config: &CalendarConfig, date: DayId, now: DayId) -> DayCellState {
        let is_between = match self.range() {
            Some((start, end)) => start < date && date < end,
            None => false,
        };
        DayCellState {
            date,
            is_disabled: !engine::is_enabled(config, date),
            is_today: engine::is_today(date, now),
            is_range_endpoint: self.start_date == Some(date) || self.end_date == Some(date),
            is_between,
        }
    }
}

/// The serialized fields, checked before becoming a [`RangeSelection`]
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SelectionParts {
    start_date: Option<DayId>,
    end_date: Option<DayId>,
    phase: SelectionPhase,
}

impl<'de> Deserialize<'de> for RangeSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parts = SelectionParts::deserialize(deserializer)?;
        RangeSelection::from_parts(parts.start_date, parts.end_date, parts.phase)
            .map_err(serde::de::Error::custom)
    }
}

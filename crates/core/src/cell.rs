// SPDX-License-Identifier: MIT

//!
//! Derived per-day state
//!

use crate::day::DayId;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to style one day cell.  Recomputed on every
/// query and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayCellState {
    pub date: DayId,

    /// The day can't be tapped
    pub is_disabled: bool,

    pub is_today: bool,

    /// The day is the start or the end of the selection
    pub is_range_endpoint: bool,

    /// The day is strictly inside a completed selection (endpoints excluded)
    pub is_between: bool,
}

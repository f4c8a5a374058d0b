// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Range Picker project*
//!
//! This crate provides the mechanics behind a scrollable month-by-month
//! date-range picker:
//!
//! - Laying out the week rows of any month (see [`month_grid`])
//! - Deciding which days can be picked (see [`is_enabled`])
//! - The two-tap start/end selection (see [`RangeSelection`])
//! - The per-day state a front end styles its cells with (see
//! [`DayCellState`])
//!
//! It does not draw anything.  A front end owns a [`Picker`], forwards taps
//! to it, and re-reads the month views after each tap.
//!

mod cell;
mod config;
mod day;
mod engine;
mod format;
mod picker;
mod selection;
mod weekday;

pub use cell::*;
pub use config::*;
pub use day::*;
pub use engine::*;
pub use format::{day_label, selection_label, weekday_headers};
pub use picker::*;
pub use selection::*;
pub use weekday::*;

// SPDX-License-Identifier: MIT

//!
//! Calendar arithmetic: month grids, headers and per-day checks.  Nothing
//! here holds state.
//!

use crate::config::CalendarConfig;
use crate::day::{DAYS_PER_WEEK, DayId};
use crate::format;
use log::{trace, warn};
use thiserror::Error;

/// Errors that can arise when laying out a month
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The month (or a day in its grid) can't be represented
    #[error("Month offset `{month_offset}` from `{minimum_date}` is outside the supported date range")]
    InvalidConfiguration {
        minimum_date: DayId,
        month_offset: i32,
    },
}

/// The first day of the month `month_offset` months after the month holding
/// the config's minimum date
pub fn first_of_month(config: &CalendarConfig, month_offset: i32) -> Result<DayId, CalendarError> {
    config
        .minimum_date()
        .first_of_month()
        .checked_add_months(month_offset)
        .ok_or_else(|| invalid_configuration(config, month_offset))
}

/// The week rows for the month at `month_offset`.
///
/// The first row starts on the config's first weekday, so it can begin with
/// days from the previous month.  Only complete weeks are returned: a final
/// week that would run past the end of the month is dropped, not padded.
/// A degenerate config (minimum after maximum) has no rows.
pub fn month_grid(
    config: &CalendarConfig,
    month_offset: i32,
) -> Result<Vec<Vec<DayId>>, CalendarError> {
    if config.is_degenerate() {
        warn!(
            "Minimum date {} is after maximum date {}, no rows to show",
            config.minimum_date(),
            config.maximum_date()
        );
        return Ok(Vec::new());
    }

    let first = first_of_month(config, month_offset)?;
    let leading = config.first_weekday().leading_days(first.weekday());
    let row_count = (leading + first.days_in_month()) / DAYS_PER_WEEK;
    let grid_start = first
        .checked_add_days(-i64::from(leading))
        .ok_or_else(|| invalid_configuration(config, month_offset))?;

    let mut rows = Vec::with_capacity(row_count as usize);
    for row in 0..row_count {
        let week = (0..DAYS_PER_WEEK)
            .map(|column| {
                grid_start
                    .checked_add_days(i64::from(row * DAYS_PER_WEEK + column))
                    .ok_or_else(|| invalid_configuration(config, month_offset))
            })
            .collect::<Result<Vec<DayId>, CalendarError>>()?;
        rows.push(week);
    }

    trace!(
        "Month {first}: {leading} leading day(s), {} row(s)",
        rows.len()
    );
    Ok(rows)
}

/// The header for the month at `month_offset`, e.g. "January 2024"
pub fn month_header(config: &CalendarConfig, month_offset: i32) -> Result<String, CalendarError> {
    Ok(format::month_header(first_of_month(config, month_offset)?))
}

/// Whether `date` can be selected under `config`
pub fn is_enabled(config: &CalendarConfig, date: DayId) -> bool {
    if date < config.minimum_date() || date > config.maximum_date() {
        return false;
    }
    if let Some(cutoff) = config.disabled_after_date() {
        if date > cutoff {
            return false;
        }
    }
    !config.disabled_dates().contains(&date)
}

/// Whether `date` is the same day as `now`
pub fn is_today(date: DayId, now: DayId) -> bool {
    date == now
}

/// How many months there are to show, counting both the minimum's and the
/// maximum's month.  Zero for a degenerate config.
pub fn number_of_months(config: &CalendarConfig) -> u32 {
    if config.is_degenerate() {
        return 0;
    }
    let months = config.minimum_date().months_until(&config.maximum_date()) + 1;
    u32::try_from(months).unwrap_or(u32::MAX)
}

/// The month offset of the month holding `date`, if that month is shown
pub fn month_offset_for(config: &CalendarConfig, date: DayId) -> Option<i32> {
    let offset = config.minimum_date().months_until(&date);
    if (0..i64::from(number_of_months(config))).contains(&offset) {
        i32::try_from(offset).ok()
    } else {
        None
    }
}

/// Whether `date` belongs to the month at `month_offset` (as opposed to being
/// a leading day from the previous month)
pub fn is_in_month(
    config: &CalendarConfig,
    month_offset: i32,
    date: DayId,
) -> Result<bool, CalendarError> {
    Ok(first_of_month(config, month_offset)?.is_same_month(&date))
}

fn invalid_configuration(config: &CalendarConfig, month_offset: i32) -> CalendarError {
    CalendarError::InvalidConfiguration {
        minimum_date: config.minimum_date(),
        month_offset,
    }
}

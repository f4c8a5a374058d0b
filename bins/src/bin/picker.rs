// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Range Picker project*
//!
//! Command line front end for the range picker.  Prints month grids and
//! selections so a config can be checked without a GUI.
//!

use clap::{Parser, ValueEnum, builder::PossibleValue};
use range_picker_core::{
    CalendarConfig, DayCellState, DayId, MonthView, Picker, SelectionWindow, TapOutcome,
    selection_label, weekday_headers,
};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::fs;
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Range picker entry point
///
/// One of:
/// - Print a month grid
/// - List the months
/// - Print the selection made by a sequence of taps
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging (stderr only, stdout is for output)
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("range_picker")
        .add_filter_allow_str("picker")
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;

    if let Err(error) = run(&args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
    Ok(())
}

/// Build the picker, replay the taps and print what was asked for
fn run(args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let today = args
        .today
        .unwrap_or_else(|| DayId::from(chrono::Local::now()));
    let config = load_config(args, today)?;
    info!(
        "Calendar runs from {} to {}",
        config.minimum_date(),
        config.maximum_date()
    );

    let mut picker = Picker::new(config);
    for date in &args.tap {
        if picker.tap(*date) == TapOutcome::Ignored {
            warn!("{date} can't be selected, tap ignored");
        }
    }

    match args.cli_command {
        Command::Grid => {
            let offset = match args.offset {
                Some(offset) => offset,
                None => picker.initial_month_offset(today).unwrap_or(0),
            };
            let month = picker.month(offset, today)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&month)?);
            } else {
                print_month(&picker, &month);
            }
        }
        Command::Months => {
            let months = picker.months(today)?;
            if args.json {
                let headers: Vec<_> = months
                    .iter()
                    .map(|month| serde_json::json!({ "offset": month.offset, "header": month.header }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&headers)?);
            } else {
                for month in months {
                    println!("{:>3}  {}", month.offset, month.header);
                }
            }
        }
        Command::Select => {
            let selection = picker.selection();
            if args.json {
                println!("{}", serde_json::to_string_pretty(selection)?);
            } else {
                println!("Start: {}", selection_label(selection.start_date()));
                println!("End:   {}", selection_label(selection.end_date()));
            }
        }
    }

    Ok(())
}

/// Read the config file if one was given, otherwise cover a year around today
fn load_config(args: &Cli, today: DayId) -> Result<CalendarConfig, Box<dyn std::error::Error>> {
    let window = if args.future {
        SelectionWindow::Future
    } else {
        SelectionWindow::Past
    };
    match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            let json = fs::read_to_string(path)?;
            let config = CalendarConfig::from_json(&json)?;
            debug!("Config loaded = {config:?}");
            Ok(config)
        }
        None => {
            info!("No config given, using the {window:?} window around {today}");
            Ok(CalendarConfig::for_window(window, today))
        }
    }
}

fn print_month(picker: &Picker, month: &MonthView) {
    println!("{}", month.header);
    let headers: Vec<String> = weekday_headers(picker.config().first_weekday())
        .iter()
        .map(|symbol| format!("{symbol:>4}"))
        .collect();
    println!("{}", headers.concat());
    for row in &month.rows {
        let cells: Vec<String> = row.iter().map(|cell| cell_text(cell.as_ref())).collect();
        println!("{}", cells.concat().trim_end());
    }
}

/// Four characters per cell.  Disabled beats endpoint beats today beats
/// between.
fn cell_text(cell: Option<&DayCellState>) -> String {
    let Some(cell) = cell else {
        return String::from("    ");
    };
    let day = cell.date.day();
    if cell.is_disabled {
        format!(" {day:>2}x")
    } else if cell.is_range_endpoint {
        format!("[{day:>2}]")
    } else if cell.is_today {
        format!(" {day:>2}*")
    } else if cell.is_between {
        format!("({day:>2})")
    } else {
        format!(" {day:>2} ")
    }
}

/// Range picker CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Inspect range picker month grids and selections",
    after_help = "Dates are given as YYYY-MM-DD"
)]
pub struct Cli {
    // What to print
    #[arg(value_enum)]
    pub cli_command: Command,

    /// Path to a JSON calendar config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Without a config, cover the year after today instead of the year before
    #[arg(long)]
    pub future: bool,

    /// Month offset from the minimum date's month (defaults to today's month)
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<i32>,

    /// Use this date as today
    #[arg(long)]
    pub today: Option<DayId>,

    /// Tap these dates in order
    #[arg(long)]
    pub tap: Vec<DayId>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Log state changes
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub enum Command {
    Grid,
    Months,
    Select,
}

impl ValueEnum for Command {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Grid, Self::Months, Self::Select]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Command::Grid => Some(PossibleValue::new("grid").help("Print one month's grid")),
            Command::Months => Some(PossibleValue::new("months").help("List the months shown")),
            Command::Select => {
                Some(PossibleValue::new("select").help("Print the selection after the taps"))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    fn cell(is_disabled: bool, is_today: bool, is_range_endpoint: bool, is_between: bool) -> DayCellState {
        DayCellState {
            date: DayId::from_ymd(2024, 3, 5).unwrap(),
            is_disabled,
            is_today,
            is_range_endpoint,
            is_between,
        }
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_args() {
        let args = Cli::parse_from([
            "picker", "grid", "--offset", "-1", "--today", "2024-03-07", "--tap", "2024-03-05",
            "--tap", "2024-03-10",
        ]);
        assert!(matches!(args.cli_command, Command::Grid));
        assert_eq!(args.offset, Some(-1));
        assert_eq!(args.today, DayId::from_ymd(2024, 3, 7));
        assert_eq!(args.tap.len(), 2);
        assert!(Cli::try_parse_from(["picker", "grid", "--today", "soon"]).is_err());
    }

    #[test]
    fn cell_markers() {
        assert_eq!(cell_text(None), "    ");
        assert_eq!(cell_text(Some(&cell(false, false, false, false))), "  5 ");
        assert_eq!(cell_text(Some(&cell(true, true, true, false))), "  5x");
        assert_eq!(cell_text(Some(&cell(false, true, true, false))), "[ 5]");
        assert_eq!(cell_text(Some(&cell(false, true, false, true))), "  5*");
        assert_eq!(cell_text(Some(&cell(false, false, false, true))), "( 5)");
    }
}

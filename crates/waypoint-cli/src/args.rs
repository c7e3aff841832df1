use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::Date;
use waypoint_core::operations::parse_day;

/// Conversational assistant for milestone-based project plans
///
/// Waypoint walks you through creating a project plan, analyzing an
/// existing plan file against today's date, or modifying a plan file in
/// place. Plan files are CSV spreadsheets in a fixed layout.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the configuration file. Defaults to
    /// $XDG_CONFIG_HOME/waypoint/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Evaluate schedules as of this day (YYYY-MM-DD) instead of today
    #[arg(long, global = true, value_parser = parse_day)]
    pub today: Option<Date>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
///
/// Without a command the guided conversation starts.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the guided planning conversation
    #[command(alias = "c")]
    Chat,
    /// Analyze a plan file and print the schedule report
    #[command(alias = "a")]
    Analyze {
        /// Plan file to analyze
        file: PathBuf,
    },
    /// Print the contents of a plan file
    #[command(alias = "s")]
    Show {
        /// Plan file to show
        file: PathBuf,
    },
}

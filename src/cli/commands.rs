use crate::date::parse_date;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(
    author,
    version,
    about = "A command-line strength-training log that appends workouts to a CSV file"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to run (defaults to `log`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file (searches upward for .fitlog.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the workout log (overrides config)
    #[arg(long, global = true, env = "FITLOG_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a workout interactively and append it to the log
    #[command(visible_alias = "l")]
    Log {
        /// Session date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Reject non-positive sets/reps and negative weight
        #[arg(long)]
        strict: bool,
    },

    /// Write a .fitlog.toml in the current directory and create the data directory
    Init,

    /// Print the resolved path of the workout log
    Path,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Log {
            date: None,
            strict: false,
        }
    }
}

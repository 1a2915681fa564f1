//! CLI Argument Parsing
//!
//! CLIの引数解析

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// 勤務時間を計算・集計するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "shiftcalc")]
#[command(about = "Compute worked hours from attendance check-in/check-out times", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, global = true, default_value = "./shiftcalc.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute the duration of a single shift
    Duration {
        /// Check-in time (HH:MM or HH:MM:SS)
        check_in: String,

        /// Check-out time; omit for a shift still in progress
        check_out: Option<String>,
    },

    /// Summarize attendance exports around a reference date
    Report(ReportArgs),
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Export file or directory (overrides input_dir from the config)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Only include records of this employee
    #[arg(short, long)]
    pub employee: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

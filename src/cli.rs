use std::path::PathBuf;

use clap::Parser;

/// One-line usage shown for `--help` and for bad invocations.
pub const USAGE: &str = "usage: event-recorder filename";

#[derive(Parser)]
#[command(
    name = "event-recorder",
    about = "Terminal stopwatch that logs start/stop intervals",
    override_usage = "event-recorder filename",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Log file that completed intervals are appended to
    #[arg(allow_hyphen_values = true)]
    pub filename: PathBuf,
}

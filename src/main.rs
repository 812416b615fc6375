mod cli;

use std::ffi::OsString;
use std::io::Write as _;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use cli::{Cli, USAGE};
use event_recorder::log_file::open_log;
use event_recorder::recorder::EventRecorder;
use event_recorder::tui;

/// Exactly one argument is accepted. A lone `--help` prints the usage;
/// anything else in that slot is the log file name, even if it starts with `-`.
fn parse_args() -> Cli {
    let args: Vec<OsString> = std::env::args_os().collect();
    if args.len() != 2 {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }
    if args[1] == "--help" {
        println!("{USAGE}");
        std::process::exit(0);
    }
    match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(_) => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
}

/// Logs go to stderr at `warn` unless `RUST_LOG` says otherwise. Lines end in
/// `\r\n` because they may be written while the terminal is in raw mode.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            write!(
                buf,
                "[{} {} {}] {}\r\n",
                buf.timestamp_seconds(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn main() {
    let cli = parse_args();
    init_logging();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let log = open_log(&cli.filename)?;
    info!("appending intervals to {}", cli.filename.display());

    let mut recorder = EventRecorder::new(log);
    let completed = tui::run(&mut recorder)?;
    recorder
        .finish()
        .with_context(|| format!("failed to flush {}", cli.filename.display()))?;

    info!("recorded {completed} interval(s)");
    Ok(())
}

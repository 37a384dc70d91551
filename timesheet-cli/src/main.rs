//! Timesheet CLI
//!
//! Command-line front end for browsing exported timesheet data.

mod commands;
mod error;
mod paths;
mod render;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use simplelog::{Config, LevelFilter, WriteLogger};
use timesheet_lib::retry::CancellationToken;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "timesheet")]
#[command(about = "Browse timesheet exports from the command line", long_about = None)]
struct Cli {
    /// Log file (defaults to the platform cache directory)
    #[arg(long, global = true, env = "TIMESHEET_LOG")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a page of rows from a JSON export
    View(commands::ViewArgs),
    /// Show timesheet weeks
    Week(commands::WeekArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_file, cli.verbose);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Interrupted, cancelling");
            on_interrupt.cancel();
        }
    });

    match run(cli.command, &cancel).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, cancel: &CancellationToken) -> Result<(), CliError> {
    match command {
        Commands::View(args) => commands::view(args, cancel).await,
        Commands::Week(args) => {
            commands::week(args);
            Ok(())
        }
    }
}

fn init_logging(log_file: Option<PathBuf>, verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let Some(path) = log_file.or_else(paths::log_file) else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    match File::create(&path) {
        Ok(file) => {
            if WriteLogger::init(level, Config::default(), file).is_err() {
                eprintln!("Warning: logger already initialized");
            }
        }
        Err(e) => eprintln!("Warning: cannot open log file {}: {}", path.display(), e),
    }
}

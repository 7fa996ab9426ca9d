#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use tile_engine_edit::{ControlFlow, EditSession};

mod input;
mod settings;
mod terminal;

pub use input::TerminalInput;
pub use settings::Settings;
pub use terminal::TerminalDisplay;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Map file to edit, defaults to the map file from the settings
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "info,tile_engine=trace"
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn get_log_dir() -> Option<PathBuf> {
    if let Some(dir) = Settings::config_dir() {
        if !dir.exists() {
            std::fs::create_dir_all(&dir).ok()?;
        }
        return Some(dir);
    }
    None
}

/// The terminal belongs to the editor, so log output only goes to the file.
fn start_logger(level: &str) -> anyhow::Result<Option<LoggerHandle>> {
    let Some(log_dir) = get_log_dir() else {
        eprintln!("Failed to create log file");
        return Ok(None);
    };
    let handle = Logger::try_with_env_or_str(level)
        .context("Invalid log level")?
        .log_to_file(FileSpec::default().directory(&log_dir).basename("tile_draw").suffix("log").suppress_timestamp())
        .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
        .start()
        .context("Failed to start logger")?;
    Ok(Some(handle))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = start_logger(args.log_level.as_deref().unwrap_or("info"))?;
    log::info!("Starting tile_draw {}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load();
    let map_path = args.path.unwrap_or_else(|| PathBuf::from(&settings.map_file));
    let mut session = EditSession::new(map_path, settings.keys);
    // a missing or broken map file leaves the blank map in place
    let _ = session.load();

    let mut display = TerminalDisplay::new().context("Failed to set up the terminal")?;
    let mut input = TerminalInput::new(Duration::from_millis(settings.frame_interval_ms));
    while session.run_frame(&mut input, &mut display)? == ControlFlow::Continue {}

    log::info!("Exiting");
    Ok(())
}

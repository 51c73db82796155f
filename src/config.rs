//! Command-line configuration and log setup.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "TOUCHTEST_LOG";

/// Errors that can occur while preparing the runtime configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while creating the log file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The log subscriber could not be installed.
    #[error("could not initialise logging: {0}")]
    Logging(String),
}

/// How the drag-and-drop widget behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DragMode {
    /// A single element dragged freely inside its container.
    #[default]
    Free,
    /// Four items in a 2×2 grid that swap places when dropped on each other.
    Swap,
}

/// Terminal touchscreen and input-device diagnostic form.
#[derive(Parser, Debug)]
#[command(name = "touchtest", version, about)]
pub struct Cli {
    /// Drag-and-drop widget behaviour
    #[arg(long, value_enum, default_value_t = DragMode::Free)]
    pub drag_mode: DragMode,

    /// Show the virtual keyboard at start-up
    #[arg(long)]
    pub keyboard: bool,

    /// Directory exported reports are written to (default: home directory)
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Log file (default: <data dir>/touchtest/touchtest.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Runtime configuration handed to the [`App`](crate::tui::App).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub drag_mode: DragMode,
    pub show_keyboard: bool,
    pub report_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drag_mode: DragMode::default(),
            show_keyboard: false,
            report_dir: None,
            log_file: None,
            log_level: log_level(0),
        }
    }
}

impl Config {
    /// Builds the configuration from parsed arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            drag_mode: cli.drag_mode,
            show_keyboard: cli.keyboard,
            report_dir: cli.report_dir,
            log_file: cli.log_file,
            log_level: log_level(cli.verbose),
        }
    }

    /// Returns the log file path, defaulting to the XDG data directory.
    pub fn log_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => {
                let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
                Ok(data_dir.join("touchtest").join("touchtest.log"))
            }
        }
    }
}

/// Default log level for a `-v` count.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs a `tracing` subscriber appending to the configured log file.
///
/// The terminal belongs to the UI, so logs never go to stdout or stderr.
/// `TOUCHTEST_LOG` overrides the level derived from `-v`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init_logging(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config.log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.log_level));

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))?;
    Ok(path)
}

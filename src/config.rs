//! Command-line options and their validated form

use crate::list::ListSpec;
use crate::sort::{Algorithm, SortOrder};
use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_FPS: u32 = 60;
pub const MAX_FPS: u32 = 240;

/// Command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "sortviz", version, about = "Animated bubble and insertion sort in the terminal")]
pub struct Args {
    /// Number of bars
    #[arg(short = 'n', long, default_value_t = 50)]
    pub length: usize,

    /// Smallest generated value
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min: i64,

    /// Largest generated value
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub max: i64,

    /// Animation ticks per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Seed for reproducible lists
    #[arg(long)]
    pub seed: Option<u64>,

    /// Algorithm selected at startup
    #[arg(long, value_enum, default_value_t = Algorithm::Bubble)]
    pub algorithm: Algorithm,

    /// Start in descending order
    #[arg(long)]
    pub descending: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `sortviz=trace`
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Errors in the startup configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `min` is larger than `max`
    InvalidRange { min: i64, max: i64 },

    /// Frame rate outside `1..=MAX_FPS`
    InvalidFps { fps: u32 },

    /// The log filter directive could not be parsed
    InvalidLogFilter { directive: String, reason: String },

    /// The log file could not be opened or the logger installed
    LogFile { path: PathBuf, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRange { min, max } => {
                write!(f, "invalid value range: min ({}) is larger than max ({})", min, max)
            }
            ConfigError::InvalidFps { fps } => {
                write!(f, "invalid frame rate {}: expected 1..={}", fps, MAX_FPS)
            }
            ConfigError::InvalidLogFilter { directive, reason } => {
                write!(f, "invalid log filter '{}': {}", directive, reason)
            }
            ConfigError::LogFile { path, reason } => {
                write!(f, "cannot log to '{}': {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validated startup configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub list: ListSpec,
    pub fps: u32,
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
    pub order: SortOrder,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let list = ListSpec::new(args.length, args.min, args.max)?;

        if args.fps == 0 || args.fps > MAX_FPS {
            return Err(ConfigError::InvalidFps { fps: args.fps });
        }

        let order = if args.descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };

        Ok(Config {
            list,
            fps: args.fps,
            seed: args.seed,
            algorithm: args.algorithm,
            order,
            log_file: args.log_file,
            log_level: args.log_level,
        })
    }

    /// Duration of one animation tick
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            list: ListSpec::default(),
            fps: DEFAULT_FPS,
            seed: None,
            algorithm: Algorithm::default(),
            order: SortOrder::default(),
            log_file: None,
            log_level: String::from("info"),
        }
    }
}

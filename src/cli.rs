//! Command-line interface argument parsing.
//!
//! This module defines the CLI structure and parsing logic using clap.
//! There is no configuration file; the few tunable defaults (initial
//! delay, initial sample count, scroll speed, output directory) live here.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Show all messages including trace
    Trace,
    /// Show debug messages and above
    Debug,
    /// Show info messages and above (default)
    Info,
    /// Show warnings and errors only
    Warn,
    /// Show errors only
    Error,
}

impl LogLevel {
    /// Convert LogLevel to env_logger filter string
    pub fn to_filter_string(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// SenseLogger: menu-driven sensor data logger for an LED-matrix board
#[derive(Parser, Debug)]
#[command(name = "sense-logger")]
#[command(version)]
#[command(about = "Logs board sensor readings to timestamped CSV files", long_about = None)]
pub struct Cli {
    /// Log level (diagnostics only; user feedback stays on the LED matrix)
    #[arg(short, long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Initial delay between samples in seconds
    #[arg(short, long, default_value_t = 0.3)]
    pub delay: f64,

    /// Initial number of samples per run (0 = run until center press)
    #[arg(short = 'n', long, default_value_t = 20)]
    pub count: u32,

    /// Scroll speed for display messages, seconds per column
    #[arg(short, long, default_value_t = 0.03)]
    pub scroll_speed: f32,

    /// Directory where run files are written
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Info.to_filter_string(), "info");
        assert_eq!(LogLevel::Debug.to_filter_string(), "debug");
        assert_eq!(LogLevel::Error.to_filter_string(), "error");
    }

    #[test]
    fn test_default_values() {
        let cli = Cli::parse_from(["sense-logger"]);
        assert_eq!(cli.log_level, LogLevel::Info);
        assert_eq!(cli.delay, 0.3);
        assert_eq!(cli.count, 20);
        assert_eq!(cli.scroll_speed, 0.03);
        assert_eq!(cli.output_dir, PathBuf::from("."));
    }
}

use clap::Parser;
use std::path::PathBuf;

use crate::counter::DEFAULT_STEP;

/// Command-line options for the counter.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Initial step text shown in the input
    #[arg(short, long, default_value = DEFAULT_STEP, allow_hyphen_values = true)]
    pub step: String,

    /// Directory for the log file; logging is off when unset
    #[arg(long, env = "COUNTER_TUI_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Filter directive for the log file (RUST_LOG wins when set)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP.to_string(),
            log_dir: None,
            log_level: String::from("info"),
        }
    }
}

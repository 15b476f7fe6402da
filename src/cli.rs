// CLI module for argument parsing and configuration

use crate::domain::{DEFAULT_CAPACITY, DEFAULT_DECK_SIZE};
use crate::logging;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// cardswipe - sort a deck of cards by swiping
///
/// Drag a card left to keep it, right to trash it. Only a limited number of
/// cards can be kept, so choose carefully.
#[derive(Parser, Debug, Clone)]
#[command(name = "cardswipe")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of cards in the deck
    #[arg(short = 'c', long = "cards", default_value_t = DEFAULT_DECK_SIZE)]
    pub cards: usize,

    /// Maximum number of cards that can be kept
    #[arg(short = 'k', long = "capacity", default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Show the welcome screen even if it has been seen before
    #[arg(long = "welcome", action = ArgAction::SetTrue)]
    pub show_welcome: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level")]
    pub log_level: Option<String>,

    /// Directory for log files
    #[arg(long = "log-dir")]
    pub log_dir: Option<PathBuf>,

    /// Disable file logging
    #[arg(long = "no-log", action = ArgAction::SetTrue)]
    pub no_log: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the arguments and return any errors
    pub fn validate(&self) -> Result<(), String> {
        if self.cards == 0 {
            return Err("The deck needs at least one card (--cards)".to_string());
        }

        if self.capacity == 0 {
            return Err("Capacity must be at least 1 (--capacity)".to_string());
        }

        if let Some(ref level) = self.log_level {
            logging::normalize_level(level).map_err(|e| e.to_string())?;
        }

        Ok(())
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub cards: usize,
    pub capacity: usize,
    pub show_welcome: bool,
    pub log_level: String,
    /// `None` disables file logging
    pub log_dir: Option<PathBuf>,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        let log_dir = if args.no_log {
            None
        } else {
            args.log_dir.or_else(logging::default_log_dir)
        };

        AppConfig {
            cards: args.cards,
            capacity: args.capacity,
            show_welcome: args.show_welcome,
            log_level: args
                .log_level
                .unwrap_or_else(|| logging::default_log_level().to_string()),
            log_dir,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            cards: DEFAULT_DECK_SIZE,
            capacity: DEFAULT_CAPACITY,
            show_welcome: false,
            log_level: logging::default_log_level().to_string(),
            log_dir: logging::default_log_dir(),
        }
    }
}

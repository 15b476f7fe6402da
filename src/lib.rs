//! Cardswipe - a swipeable card-sorting library
//!
//! This crate provides the sorting core (a deck store with a bounded saved
//! list and a swipe gesture interpreter) plus the terminal front end that
//! drives it.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod tui;

// Re-export primary types for convenience
pub use app::{App, Flow, Tab, ViewState};
pub use config::UserConfig;
pub use domain::{
    generate_items, visual_params, DeckStore, DecisionStatistics, Item, KeepOutcome,
    SwipeInterpreter, SwipeOutcome, VisualParams,
};
pub use error::{CardSwipeError, Result};

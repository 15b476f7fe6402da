pub mod deck_store;
pub mod swipe;

pub use deck_store::{DeckStore, IgnoreReason, KeepOutcome, DEFAULT_CAPACITY};
pub use swipe::{
    classify_release, interpolate, stack_transform, visual_params, DragState, Release,
    SpringValue, StackTransform, SwipeInterpreter, SwipeOutcome, VisualParams, FULL_SWIPE,
    KEEP_THRESHOLD, MAX_ROTATION_DEG, TRASH_THRESHOLD,
};

/// Number of cards generated for a fresh session
pub const DEFAULT_DECK_SIZE: usize = 50;

const DEFAULT_DESCRIPTION: &str =
    "Swipe left to keep, right to trash. Try to keep only the most important cards.";

/// A card under review. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub description: String,
}

impl Item {
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Statistics about decisions made during the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionStatistics {
    pub total: usize,
    pub kept: usize,
    pub trashed: usize,
    pub remaining: usize,
}

/// Generates the starting deck: ids `1..=count`, titled `Card {id}`.
pub fn generate_items(count: usize) -> Vec<Item> {
    (1..=count as u32)
        .map(|id| Item::new(id, format!("Card {}", id), DEFAULT_DESCRIPTION))
        .collect()
}

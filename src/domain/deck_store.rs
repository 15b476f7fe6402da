use super::{DecisionStatistics, Item};
use log::debug;
use std::collections::{HashSet, VecDeque};

/// Saved-list size used when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 10;

/// Why a `keep` or `discard` was dropped without touching state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The deck has no front item
    EmptyDeck,
    /// The id does not match the current front item
    StaleItem,
    /// The saved list is already at capacity
    SavedListFull,
}

/// Result of a `keep` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeepOutcome {
    /// Item moved to the saved list, which still has room
    Kept(Item),
    /// Item moved to the saved list, which is now exactly at capacity.
    /// Reported once per store, on the transition.
    CapacityReached(Item),
    Ignored(IgnoreReason),
}

/// Owns the review queue and the bounded saved list.
///
/// `keep` and `discard` are the only mutations. Both remove the front item;
/// nothing ever grows or reorders the deck.
#[derive(Debug)]
pub struct DeckStore {
    deck: VecDeque<Item>,
    saved: Vec<Item>,
    capacity: usize,
    total: usize,
    trashed: usize,
}

impl DeckStore {
    /// Creates a store over `items` in review order.
    ///
    /// Later items whose id was already seen are dropped.
    pub fn new(items: Vec<Item>, capacity: usize) -> Self {
        let mut seen = HashSet::new();
        let deck: VecDeque<Item> = items
            .into_iter()
            .filter(|item| seen.insert(item.id))
            .collect();

        Self {
            total: deck.len(),
            deck,
            saved: Vec::new(),
            capacity,
            trashed: 0,
        }
    }

    pub fn with_default_capacity(items: Vec<Item>) -> Self {
        Self::new(items, DEFAULT_CAPACITY)
    }

    /// Moves the front item to the end of the saved list.
    pub fn keep(&mut self, item_id: u32) -> KeepOutcome {
        if let Err(reason) = self.check_front(item_id) {
            debug!("event=keep_ignored item_id={} reason={:?}", item_id, reason);
            return KeepOutcome::Ignored(reason);
        }
        if self.is_full() {
            debug!(
                "event=keep_ignored item_id={} reason={:?}",
                item_id,
                IgnoreReason::SavedListFull
            );
            return KeepOutcome::Ignored(IgnoreReason::SavedListFull);
        }

        let Some(item) = self.deck.pop_front() else {
            return KeepOutcome::Ignored(IgnoreReason::EmptyDeck);
        };
        self.saved.push(item.clone());
        debug!(
            "event=keep item_id={} saved={} capacity={}",
            item.id,
            self.saved.len(),
            self.capacity
        );

        if self.saved.len() == self.capacity {
            KeepOutcome::CapacityReached(item)
        } else {
            KeepOutcome::Kept(item)
        }
    }

    /// Removes the front item without saving it.
    pub fn discard(&mut self, item_id: u32) -> Option<Item> {
        if let Err(reason) = self.check_front(item_id) {
            debug!("event=discard_ignored item_id={} reason={:?}", item_id, reason);
            return None;
        }

        let item = self.deck.pop_front()?;
        self.trashed += 1;
        debug!(
            "event=discard item_id={} remaining={}",
            item.id,
            self.deck.len()
        );
        Some(item)
    }

    /// The item at deck position 0, or `None` once the deck is exhausted
    pub fn front_item(&self) -> Option<&Item> {
        self.deck.front()
    }

    /// The first `n` items of the deck in review order
    pub fn preview_items(&self, n: usize) -> Vec<&Item> {
        self.deck.iter().take(n).collect()
    }

    pub fn saved_list(&self) -> &[Item] {
        &self.saved
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.saved.len())
    }

    pub fn is_full(&self) -> bool {
        self.saved.len() >= self.capacity
    }

    /// Number of items still waiting for review
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn statistics(&self) -> DecisionStatistics {
        DecisionStatistics {
            total: self.total,
            kept: self.saved.len(),
            trashed: self.trashed,
            remaining: self.deck.len(),
        }
    }

    fn check_front(&self, item_id: u32) -> Result<(), IgnoreReason> {
        match self.deck.front() {
            None => Err(IgnoreReason::EmptyDeck),
            Some(front) if front.id != item_id => Err(IgnoreReason::StaleItem),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generate_items;

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    fn deck_ids(store: &DeckStore) -> Vec<u32> {
        store
            .preview_items(store.remaining())
            .iter()
            .map(|item| item.id)
            .collect()
    }

    #[test]
    fn test_new_store() {
        let store = DeckStore::new(generate_items(5), 3);

        assert_eq!(store.remaining(), 5);
        assert_eq!(store.capacity(), 3);
        assert!(store.saved_list().is_empty());
        assert_eq!(store.front_item().unwrap().id, 1);
    }

    #[test]
    fn test_new_store_drops_duplicate_ids() {
        let items = vec![
            Item::new(1, "A", ""),
            Item::new(2, "B", ""),
            Item::new(1, "A again", ""),
        ];
        let store = DeckStore::with_default_capacity(items);

        assert_eq!(deck_ids(&store), vec![1, 2]);
        assert_eq!(store.front_item().unwrap().title, "A");
    }

    #[test]
    fn test_keep_moves_front_to_saved() {
        let mut store = DeckStore::with_default_capacity(generate_items(3));

        let outcome = store.keep(1);

        assert!(matches!(outcome, KeepOutcome::Kept(ref item) if item.id == 1));
        assert_eq!(deck_ids(&store), vec![2, 3]);
        assert_eq!(ids(store.saved_list()), vec![1]);
    }

    #[test]
    fn test_keep_appends_in_order() {
        let mut store = DeckStore::with_default_capacity(generate_items(4));

        store.keep(1);
        assert!(store.discard(2).is_some());
        store.keep(3);

        assert_eq!(ids(store.saved_list()), vec![1, 3]);
        assert_eq!(deck_ids(&store), vec![4]);
    }

    #[test]
    fn test_keep_stale_id_is_noop() {
        let mut store = DeckStore::with_default_capacity(generate_items(3));

        let outcome = store.keep(2);

        assert_eq!(outcome, KeepOutcome::Ignored(IgnoreReason::StaleItem));
        assert_eq!(store.remaining(), 3);
        assert!(store.saved_list().is_empty());
    }

    #[test]
    fn test_keep_reports_capacity_reached_once() {
        let mut store = DeckStore::new(generate_items(5), 2);

        assert!(matches!(store.keep(1), KeepOutcome::Kept(_)));
        assert!(matches!(store.keep(2), KeepOutcome::CapacityReached(_)));
        assert_eq!(
            store.keep(3),
            KeepOutcome::Ignored(IgnoreReason::SavedListFull)
        );
        assert_eq!(
            store.keep(3),
            KeepOutcome::Ignored(IgnoreReason::SavedListFull)
        );

        assert_eq!(store.saved_list().len(), 2);
        assert_eq!(store.front_item().unwrap().id, 3);
    }

    #[test]
    fn test_keep_capacity_of_ten() {
        let mut store = DeckStore::with_default_capacity(generate_items(20));

        for id in 1..=9 {
            assert!(matches!(store.keep(id), KeepOutcome::Kept(_)));
        }
        assert!(matches!(store.keep(10), KeepOutcome::CapacityReached(_)));
        assert!(store.is_full());
        assert_eq!(store.remaining_capacity(), 0);

        assert_eq!(
            store.keep(11),
            KeepOutcome::Ignored(IgnoreReason::SavedListFull)
        );
        assert_eq!(store.saved_list().len(), DEFAULT_CAPACITY);
        assert_eq!(store.remaining(), 10);
    }

    #[test]
    fn test_discard_allowed_when_saved_list_full() {
        let mut store = DeckStore::new(generate_items(3), 1);
        store.keep(1);

        let removed = store.discard(2);

        assert_eq!(removed.unwrap().id, 2);
        assert_eq!(deck_ids(&store), vec![3]);
        assert_eq!(ids(store.saved_list()), vec![1]);
    }

    #[test]
    fn test_discard_stale_id_is_noop() {
        let mut store = DeckStore::with_default_capacity(generate_items(3));

        assert!(store.discard(3).is_none());
        assert_eq!(store.remaining(), 3);
        assert_eq!(store.statistics().trashed, 0);
    }

    #[test]
    fn test_operations_on_empty_deck() {
        let mut store = DeckStore::with_default_capacity(vec![]);

        assert!(store.front_item().is_none());
        assert!(store.preview_items(3).is_empty());
        assert_eq!(store.keep(1), KeepOutcome::Ignored(IgnoreReason::EmptyDeck));
        assert!(store.discard(1).is_none());
        assert!(store.is_exhausted());
    }

    #[test]
    fn test_preview_items() {
        let store = DeckStore::with_default_capacity(generate_items(5));

        let preview: Vec<u32> = store.preview_items(3).iter().map(|i| i.id).collect();
        assert_eq!(preview, vec![1, 2, 3]);

        assert_eq!(store.preview_items(10).len(), 5);
        assert!(store.preview_items(0).is_empty());
    }

    #[test]
    fn test_deck_exhausts() {
        let mut store = DeckStore::with_default_capacity(generate_items(2));

        store.discard(1);
        store.keep(2);

        assert!(store.is_exhausted());
        assert!(store.front_item().is_none());
    }

    #[test]
    fn test_statistics() {
        let mut store = DeckStore::with_default_capacity(generate_items(5));

        store.keep(1);
        store.discard(2);
        store.discard(3);
        store.discard(99);

        let stats = store.statistics();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.kept, 1);
        assert_eq!(stats.trashed, 2);
        assert_eq!(stats.remaining, 2);
    }

    #[test]
    fn test_saved_list_never_exceeds_capacity() {
        let mut store = DeckStore::new(generate_items(30), 4);

        for step in 0..40u32 {
            let Some(front) = store.front_item().map(|item| item.id) else {
                break;
            };
            if step % 3 == 2 {
                store.discard(front);
            } else {
                store.keep(front);
                store.keep(front + 7);
            }
            assert!(store.saved_list().len() <= store.capacity());
        }
    }
}

//! Application state for the terminal front end.
//!
//! Routes keyboard, mouse and timer input into the swipe interpreter and
//! tracks which tab and overlay are visible. The deck store is only ever
//! mutated through [`SwipeInterpreter::end`].

use crate::domain::{DeckStore, SwipeInterpreter, SwipeOutcome, FULL_SWIPE};
use crate::tui::input::{handle_key_event, GestureEvent, GestureTracker, KeyAction};
use crossterm::event::{KeyEvent, MouseEvent};
use log::info;
use ratatui::layout::Rect;
use std::time::Duration;

/// Delay between filling the saved list and switching to the saved tab
pub const NAVIGATION_DELAY: Duration = Duration::from_millis(500);

/// Offset used for keyboard flings; far enough to saturate the tilt
pub const FLING_DISTANCE: f64 = FULL_SWIPE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Sort,
    Saved,
}

/// UI view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Main view, no overlay
    Browsing,
    /// Help overlay visible
    Help,
    /// Summary screen once the deck is exhausted or on quit
    Summary,
    /// Welcome screen shown on first launch
    Welcome,
}

/// What the event loop should do after handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The welcome overlay was closed; persist that it has been seen
    WelcomeDismissed,
    Quit,
}

pub struct App {
    pub store: DeckStore,
    pub interpreter: SwipeInterpreter,
    pub tab: Tab,
    pub view: ViewState,
    /// Resting area of the front card, updated each draw for hit-testing
    pub card_area: Option<Rect>,
    pub last_outcome: Option<SwipeOutcome>,
    tracker: GestureTracker,
    pending_navigation: Option<Duration>,
}

impl App {
    pub fn new(store: DeckStore, show_welcome: bool) -> Self {
        Self {
            store,
            interpreter: SwipeInterpreter::new(),
            tab: Tab::Sort,
            view: if show_welcome {
                ViewState::Welcome
            } else {
                ViewState::Browsing
            },
            card_area: None,
            last_outcome: None,
            tracker: GestureTracker::new(),
            pending_navigation: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let action = handle_key_event(key);

        match self.view {
            ViewState::Welcome => {
                self.view = ViewState::Browsing;
                return Flow::WelcomeDismissed;
            }
            ViewState::Help => {
                if matches!(action, KeyAction::Help | KeyAction::Quit | KeyAction::None) {
                    self.view = ViewState::Browsing;
                }
                return Flow::Continue;
            }
            ViewState::Summary => {
                return match action {
                    KeyAction::ShowSaved | KeyAction::SwitchTab => {
                        self.view = ViewState::Browsing;
                        self.tab = Tab::Saved;
                        Flow::Continue
                    }
                    _ => Flow::Quit,
                };
            }
            ViewState::Browsing => {}
        }

        match action {
            KeyAction::Quit => {
                let stats = self.store.statistics();
                if stats.kept > 0 || stats.trashed > 0 {
                    self.cancel_gesture();
                    self.view = ViewState::Summary;
                } else {
                    return Flow::Quit;
                }
            }
            KeyAction::Keep => {
                self.fling(-FLING_DISTANCE);
            }
            KeyAction::Trash => {
                self.fling(FLING_DISTANCE);
            }
            KeyAction::SwitchTab => {
                let next = match self.tab {
                    Tab::Sort => Tab::Saved,
                    Tab::Saved => Tab::Sort,
                };
                self.show_tab(next);
            }
            KeyAction::ShowSort => self.show_tab(Tab::Sort),
            KeyAction::ShowSaved => self.show_tab(Tab::Saved),
            KeyAction::Help => {
                self.cancel_gesture();
                self.view = ViewState::Help;
            }
            KeyAction::None => {}
        }

        Flow::Continue
    }

    /// Feeds a mouse event through the gesture tracker.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<SwipeOutcome> {
        if self.view != ViewState::Browsing || self.tab != Tab::Sort {
            return None;
        }

        let area = self.card_area.unwrap_or_default();
        let event = self.tracker.handle_mouse(mouse, area)?;
        self.apply_gesture(event)
    }

    /// Terminal focus loss interrupts any gesture in progress
    pub fn handle_focus_lost(&mut self) {
        self.cancel_gesture();
    }

    /// Applies one gesture lifecycle event to the interpreter.
    ///
    /// Returns the outcome when the event completed a gesture.
    pub fn apply_gesture(&mut self, event: GestureEvent) -> Option<SwipeOutcome> {
        match event {
            GestureEvent::Start => {
                self.interpreter.begin(&self.store);
                None
            }
            GestureEvent::Sample { dx, dy } => {
                self.interpreter.sample(dx, dy);
                None
            }
            GestureEvent::End { dx, dy } => {
                let outcome = self.interpreter.end(dx, dy, &mut self.store);
                self.after_outcome(&outcome);
                Some(outcome)
            }
            GestureEvent::Cancel => {
                self.interpreter.cancel();
                None
            }
        }
    }

    /// Runs a complete gesture to `dx`, as if the card were thrown.
    pub fn fling(&mut self, dx: f64) -> Option<SwipeOutcome> {
        if self.tab != Tab::Sort || self.interpreter.is_active() {
            return None;
        }

        self.apply_gesture(GestureEvent::Start);
        self.apply_gesture(GestureEvent::Sample { dx, dy: 0.0 });
        self.apply_gesture(GestureEvent::End { dx, dy: 0.0 })
    }

    /// Advances animations and the delayed tab switch.
    pub fn tick(&mut self, elapsed: Duration) {
        self.interpreter.tick(elapsed);

        if let Some(remaining) = self.pending_navigation {
            match remaining.checked_sub(elapsed) {
                Some(left) if !left.is_zero() => self.pending_navigation = Some(left),
                _ => {
                    self.pending_navigation = None;
                    self.show_tab(Tab::Saved);
                    info!("event=navigate tab=saved reason=capacity_reached");
                }
            }
        }
    }

    /// Whether the loop should redraw at frame rate
    pub fn is_animating(&self) -> bool {
        self.tracker.is_tracking()
            || !self.interpreter.is_settled()
            || self.pending_navigation.is_some()
    }

    pub fn navigation_pending(&self) -> bool {
        self.pending_navigation.is_some()
    }

    fn show_tab(&mut self, tab: Tab) {
        if tab != Tab::Sort {
            self.cancel_gesture();
        }
        self.tab = tab;
    }

    fn cancel_gesture(&mut self) {
        self.tracker.reset();
        self.interpreter.cancel();
    }

    fn after_outcome(&mut self, outcome: &SwipeOutcome) {
        match outcome {
            SwipeOutcome::Kept {
                item,
                capacity_reached,
            } => {
                info!(
                    "event=keep item_id={} saved={}/{}",
                    item.id,
                    self.store.saved_list().len(),
                    self.store.capacity()
                );
                if *capacity_reached {
                    self.pending_navigation = Some(NAVIGATION_DELAY);
                }
            }
            SwipeOutcome::Trashed(item) => {
                info!(
                    "event=trash item_id={} remaining={}",
                    item.id,
                    self.store.remaining()
                );
            }
            SwipeOutcome::Cancelled | SwipeOutcome::Ignored => {}
        }

        if matches!(
            outcome,
            SwipeOutcome::Kept { .. } | SwipeOutcome::Trashed(_)
        ) {
            self.last_outcome = Some(outcome.clone());
            if self.store.is_exhausted() {
                self.view = ViewState::Summary;
            }
        }
    }
}

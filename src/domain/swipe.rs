//! Swipe gesture interpretation.
//!
//! Turns a live drag offset for the front card into visual parameters
//! (tilt, indicator opacity, translation) and, on release, into a single
//! keep/trash/cancel decision applied to the [`DeckStore`].
//!
//! All offsets are in pixels relative to where the gesture started.
//! Negative `dx` is a swipe to the left (keep), positive `dx` to the right
//! (trash).

use super::deck_store::{DeckStore, KeepOutcome};
use super::Item;
use log::debug;
use std::time::Duration;

/// Release with `dx` below this keeps the card
pub const KEEP_THRESHOLD: f64 = -100.0;
/// Release with `dx` above this trashes the card
pub const TRASH_THRESHOLD: f64 = 100.0;
/// Horizontal offset at which tilt and indicators saturate
pub const FULL_SWIPE: f64 = 200.0;
/// Maximum card tilt in degrees
pub const MAX_ROTATION_DEG: f64 = 30.0;

const SPRING_STIFFNESS: f64 = 100.0;
const SPRING_MASS: f64 = 1.0;
const REST_DISPLACEMENT: f64 = 0.01;
const REST_VELOCITY: f64 = 0.01;

/// Piecewise-linear interpolation of `value` from `input` to `output`,
/// clamped to the first and last output outside the input range.
///
/// `input` must be ascending.
pub fn interpolate<const N: usize>(value: f64, input: [f64; N], output: [f64; N]) -> f64 {
    if N == 0 {
        return 0.0;
    }
    let last = N - 1;
    if value <= input[0] {
        return output[0];
    }
    if value >= input[last] {
        return output[last];
    }

    for i in 0..last {
        let (lo, hi) = (input[i], input[i + 1]);
        if value <= hi {
            let span = hi - lo;
            if span == 0.0 {
                return output[i + 1];
            }
            let t = (value - lo) / span;
            return output[i] + t * (output[i + 1] - output[i]);
        }
    }

    output[last]
}

/// Per-gesture drag offset, reset to zero when the gesture ends
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub dx: f64,
    pub dy: f64,
}

/// Visual parameters for the front card and its indicators
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VisualParams {
    pub rotation_deg: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub keep_opacity: f64,
    pub keep_scale: f64,
    pub trash_opacity: f64,
    pub trash_scale: f64,
}

/// Derives the target visual parameters for a drag offset.
pub fn visual_params(dx: f64, dy: f64) -> VisualParams {
    let keep = interpolate(dx, [-FULL_SWIPE, KEEP_THRESHOLD], [1.0, 0.0]);
    let trash = interpolate(dx, [TRASH_THRESHOLD, FULL_SWIPE], [0.0, 1.0]);

    VisualParams {
        rotation_deg: interpolate(
            dx,
            [-FULL_SWIPE, 0.0, FULL_SWIPE],
            [-MAX_ROTATION_DEG, 0.0, MAX_ROTATION_DEG],
        ),
        translate_x: dx,
        translate_y: dy,
        keep_opacity: keep,
        keep_scale: keep,
        trash_opacity: trash,
        trash_scale: trash,
    }
}

/// Fixed transform for cards stacked behind the front card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackTransform {
    pub scale: f64,
    pub translate_y: f64,
}

/// Transform for the card at `index` in the stack (0 is the front card).
pub fn stack_transform(index: usize) -> StackTransform {
    let index = index as f64;
    StackTransform {
        scale: interpolate(index, [0.0, 3.0], [1.0, 0.9]),
        translate_y: index * 4.0,
    }
}

/// Decision taken when a gesture is released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Keep,
    Trash,
    Cancel,
}

/// Classifies a release by its final horizontal offset.
///
/// A keep swipe without saved-list capacity left is a cancel.
pub fn classify_release(dx: f64, has_capacity: bool) -> Release {
    if dx < KEEP_THRESHOLD {
        if has_capacity {
            Release::Keep
        } else {
            Release::Cancel
        }
    } else if dx > TRASH_THRESHOLD {
        Release::Trash
    } else {
        Release::Cancel
    }
}

/// Critically damped spring chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringValue {
    value: f64,
    velocity: f64,
    target: f64,
}

impl SpringValue {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jumps straight to `value` and comes to rest there
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advances the spring by `dt` seconds using the closed-form solution,
    /// so large steps stay stable.
    pub fn step(&mut self, dt: f64) {
        if dt <= 0.0 || self.is_settled() {
            return;
        }

        let omega = (SPRING_STIFFNESS / SPRING_MASS).sqrt();
        let x0 = self.value - self.target;
        let b = self.velocity + omega * x0;
        let decay = (-omega * dt).exp();

        let x = (x0 + b * dt) * decay;
        let v = (self.velocity - omega * b * dt) * decay;

        if x.abs() < REST_DISPLACEMENT && v.abs() < REST_VELOCITY {
            self.snap_to(self.target);
        } else {
            self.value = self.target + x;
            self.velocity = v;
        }
    }
}

impl Default for SpringValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// What a completed gesture did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Front card moved to the saved list. `capacity_reached` is set on the
    /// keep that filled the list.
    Kept { item: Item, capacity_reached: bool },
    Trashed(Item),
    /// Released inside the thresholds, or a keep with no capacity left
    Cancelled,
    /// No gesture was active, or the store rejected the decision
    Ignored,
}

/// Gesture state machine for the front card.
///
/// Lifecycle: [`begin`](Self::begin), any number of
/// [`sample`](Self::sample)s, then exactly one of [`end`](Self::end) or
/// [`cancel`](Self::cancel). Only `end` touches the store.
#[derive(Debug, Default)]
pub struct SwipeInterpreter {
    active_item: Option<u32>,
    drag: DragState,
    translate_x: SpringValue,
    translate_y: SpringValue,
    keep_indicator: SpringValue,
    trash_indicator: SpringValue,
}

impl SwipeInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a gesture on the current front card.
    ///
    /// Returns `false` (and stays idle) when the deck is empty.
    pub fn begin(&mut self, store: &DeckStore) -> bool {
        let Some(front) = store.front_item() else {
            debug!("event=gesture_ignored reason=empty_deck");
            return false;
        };

        self.active_item = Some(front.id);
        self.drag = DragState::default();
        debug!("event=gesture_start item_id={}", front.id);
        true
    }

    /// Applies a drag sample and returns the target visual parameters.
    ///
    /// Samples outside an active gesture are dropped.
    pub fn sample(&mut self, dx: f64, dy: f64) -> Option<VisualParams> {
        self.active_item?;

        self.drag = DragState { dx, dy };
        let params = visual_params(dx, dy);
        self.translate_x.set_target(params.translate_x);
        self.translate_y.set_target(params.translate_y);
        self.keep_indicator.set_target(params.keep_opacity);
        self.trash_indicator.set_target(params.trash_opacity);
        Some(params)
    }

    /// Releases the gesture at `(dx, dy)` and commits the decision.
    pub fn end(&mut self, dx: f64, dy: f64, store: &mut DeckStore) -> SwipeOutcome {
        let Some(item_id) = self.active_item else {
            self.reset_drag();
            return SwipeOutcome::Ignored;
        };
        self.sample(dx, dy);
        self.active_item = None;

        let outcome = match classify_release(dx, !store.is_full()) {
            Release::Keep => match store.keep(item_id) {
                KeepOutcome::Kept(item) => SwipeOutcome::Kept {
                    item,
                    capacity_reached: false,
                },
                KeepOutcome::CapacityReached(item) => SwipeOutcome::Kept {
                    item,
                    capacity_reached: true,
                },
                KeepOutcome::Ignored(_) => SwipeOutcome::Ignored,
            },
            Release::Trash => store
                .discard(item_id)
                .map(SwipeOutcome::Trashed)
                .unwrap_or(SwipeOutcome::Ignored),
            Release::Cancel => SwipeOutcome::Cancelled,
        };

        debug!(
            "event=gesture_end item_id={} dx={:.1} outcome={:?}",
            item_id, dx, outcome
        );

        match outcome {
            // The decided card is gone; its successor starts at rest.
            SwipeOutcome::Kept { .. } | SwipeOutcome::Trashed(_) => self.snap_to_rest(),
            SwipeOutcome::Cancelled | SwipeOutcome::Ignored => self.reset_drag(),
        }
        outcome
    }

    /// Abandons the gesture without a decision.
    pub fn cancel(&mut self) {
        if let Some(item_id) = self.active_item.take() {
            debug!("event=gesture_cancel item_id={}", item_id);
        }
        self.reset_drag();
    }

    /// Advances the springs by `elapsed` wall-clock time.
    pub fn tick(&mut self, elapsed: Duration) {
        let dt = elapsed.as_secs_f64();
        self.translate_x.step(dt);
        self.translate_y.step(dt);
        self.keep_indicator.step(dt);
        self.trash_indicator.step(dt);
    }

    /// Visual parameters to draw this frame.
    ///
    /// Tilt follows the live drag; translation and indicators follow their
    /// springs.
    pub fn frame(&self) -> VisualParams {
        let keep = self.keep_indicator.value().clamp(0.0, 1.0);
        let trash = self.trash_indicator.value().clamp(0.0, 1.0);
        VisualParams {
            rotation_deg: visual_params(self.drag.dx, self.drag.dy).rotation_deg,
            translate_x: self.translate_x.value(),
            translate_y: self.translate_y.value(),
            keep_opacity: keep,
            keep_scale: keep,
            trash_opacity: trash,
            trash_scale: trash,
        }
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_active(&self) -> bool {
        self.active_item.is_some()
    }

    /// True once every spring has come to rest
    pub fn is_settled(&self) -> bool {
        self.translate_x.is_settled()
            && self.translate_y.is_settled()
            && self.keep_indicator.is_settled()
            && self.trash_indicator.is_settled()
    }

    fn reset_drag(&mut self) {
        self.drag = DragState::default();
        self.translate_x.set_target(0.0);
        self.translate_y.set_target(0.0);
        self.keep_indicator.set_target(0.0);
        self.trash_indicator.set_target(0.0);
    }

    fn snap_to_rest(&mut self) {
        self.drag = DragState::default();
        self.translate_x.snap_to(0.0);
        self.translate_y.snap_to(0.0);
        self.keep_indicator.snap_to(0.0);
        self.trash_indicator.snap_to(0.0);
    }
}

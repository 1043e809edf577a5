//! Frame scheduling
//!
//! Widgets never reschedule themselves. A tick handler returns a
//! [`FrameRequest`] and the host feeds it to a scheduler; the provided
//! [`FrameScheduler`] keeps a single pending deadline per widget, so
//! applying a new request replaces whatever was pending. That is what
//! cancels a superseded animation loop: after a retarget the stale
//! callback simply no longer exists.
//!
//! The model is single-threaded and cooperative. Time is supplied by the
//! caller as a millisecond counter; nothing here blocks or spawns.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};
use tracing::debug;

new_key_type! {
    /// Identifies one widget's callback slot in a [`FrameScheduler`].
    pub struct WidgetKey;
}

/// Animation state of a widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing in motion; no ticks wanted.
    #[default]
    Idle,
    /// Entries are converging; the widget keeps requesting frames.
    Animating,
}

/// What a widget wants from the scheduler after an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum FrameRequest {
    /// Tick as soon as possible (a retarget just happened).
    Now,
    /// Tick again after the widget's frame delay.
    After(Duration),
    /// All entries are at rest; drop any pending callback.
    Rest,
}

/// Cooperative single-slot frame callbacks, keyed per widget.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: SlotMap<WidgetKey, Option<u64>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            pending: SlotMap::with_key(),
        }
    }

    /// Add a widget slot with no pending callback.
    pub fn register(&mut self) -> WidgetKey {
        self.pending.insert(None)
    }

    pub fn unregister(&mut self, key: WidgetKey) {
        self.pending.remove(key);
    }

    /// Apply a widget's request at the current time, replacing any pending
    /// deadline for that widget.
    pub fn apply(&mut self, key: WidgetKey, request: FrameRequest, now_ms: u64) {
        let Some(slot) = self.pending.get_mut(key) else {
            return;
        };
        let next = match request {
            FrameRequest::Now => Some(now_ms),
            FrameRequest::After(delay) => Some(now_ms + delay.as_millis() as u64),
            FrameRequest::Rest => None,
        };
        if slot.is_some() && next != *slot {
            debug!(?key, "replacing pending frame");
        }
        *slot = next;
    }

    /// Drop a widget's pending callback, if any.
    pub fn cancel(&mut self, key: WidgetKey) {
        if let Some(slot) = self.pending.get_mut(key) {
            *slot = None;
        }
    }

    pub fn deadline_ms(&self, key: WidgetKey) -> Option<u64> {
        self.pending.get(key).copied().flatten()
    }

    /// Earliest pending deadline across all widgets.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.pending.values().filter_map(|slot| *slot).min()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.values().any(Option::is_some)
    }

    /// Pop every widget whose deadline has arrived. Each fires at most
    /// once per schedule; the widget re-requests if it wants another tick.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<WidgetKey> {
        let mut due = Vec::new();
        for (key, slot) in self.pending.iter_mut() {
            if matches!(slot, Some(deadline) if *deadline <= now_ms) {
                *slot = None;
                due.push(key);
            }
        }
        due
    }
}

//! Animated angle spans
//!
//! A pie slice's start and end angles are two independent animated
//! quantities, not a (start, sweep) pair. Both endpoints are retargeted
//! from cumulative data and stepped separately, so a slice's sweep can
//! transiently shrink or grow asymmetrically while the endpoints converge.

use crate::value::{Animated, AnimatedValue};

const FULL_TURN_DEG: f32 = 360.0;

/// An animated (start, end) angle pair in degrees.
///
/// Invariant: the end target is never below the start target; constructors
/// add full turns to the end angle until that holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpan {
    start: AnimatedValue,
    end: AnimatedValue,
}

impl ArcSpan {
    /// A span at rest on the given angles, normalized.
    pub fn from_degrees(start_deg: f32, end_deg: f32, velocity: f32) -> Self {
        let start = AnimatedValue::resting(start_deg, velocity);
        // Sanitize the raw end angle before normalizing so the loop is
        // guaranteed to terminate.
        let end_raw = AnimatedValue::resting(end_deg, velocity).target();
        let end = AnimatedValue::resting(normalize_end(start.target(), end_raw), velocity);
        Self { start, end }
    }

    /// A span whose current angles start at the given seed position and
    /// whose targets (and velocity) come from `target`. Used when a
    /// retarget appends a new entry: it animates in from the seed instead
    /// of popping in fully formed.
    pub fn seeded(start_deg: f32, end_deg: f32, target: &ArcSpan) -> Self {
        Self {
            start: AnimatedValue::new(start_deg, target.start.target(), target.start.velocity()),
            end: AnimatedValue::new(end_deg, target.end.target(), target.end.velocity()),
        }
    }

    /// Adopt another span's targets, preserving current angles so motion
    /// stays continuous across data updates.
    pub fn set_target(&mut self, target: &ArcSpan) {
        self.start.set_target(target.start.target());
        self.end.set_target(target.end.target());
    }

    pub fn start_deg(&self) -> f32 {
        self.start.current()
    }

    pub fn end_deg(&self) -> f32 {
        self.end.current()
    }

    /// Angular extent of the current (on-screen) state.
    pub fn sweep_deg(&self) -> f32 {
        self.end.current() - self.start.current()
    }

    pub fn target_start_deg(&self) -> f32 {
        self.start.target()
    }

    pub fn target_end_deg(&self) -> f32 {
        self.end.target()
    }
}

impl Animated for ArcSpan {
    fn step(&mut self) -> bool {
        // Endpoints step independently; avoid short-circuiting.
        let start_moving = self.start.step();
        let end_moving = self.end.step();
        start_moving || end_moving
    }

    fn is_at_rest(&self) -> bool {
        self.start.is_at_rest() && self.end.is_at_rest()
    }
}

fn normalize_end(start_deg: f32, end_deg: f32) -> f32 {
    let mut end = end_deg;
    while end < start_deg {
        end += FULL_TURN_DEG;
    }
    end
}

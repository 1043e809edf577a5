//! Fixed-step convergence values

use tracing::warn;

/// Anything the tick loop can advance one step at a time.
pub trait Animated {
    /// Advance one step. Returns whether the value is still in motion
    /// after stepping; the call that lands on the target reports `false`.
    fn step(&mut self) -> bool;

    /// True iff the value sits exactly on its target.
    fn is_at_rest(&self) -> bool;
}

/// A scalar that converges onto a target by a fixed step per tick.
///
/// Each [`step`](Animated::step) moves `current` by `velocity` toward
/// `target`, then snaps onto the target once the remaining distance is
/// smaller than one step. The snap makes rest an exact-equality state:
/// a value reaches its target in `ceil(|target - current| / velocity)`
/// ticks and then never moves again until retargeted. Rest is compared
/// with `==` on purpose; an epsilon here would change how many ticks a
/// series takes to settle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedValue {
    current: f32,
    target: f32,
    velocity: f32,
}

impl AnimatedValue {
    /// Non-finite positions are sanitized to 0.0; a velocity that is not
    /// a positive finite number is sanitized to 1.0 so stepping always
    /// terminates.
    pub fn new(current: f32, target: f32, velocity: f32) -> Self {
        Self {
            current: sanitize_position(current),
            target: sanitize_position(target),
            velocity: sanitize_velocity(velocity),
        }
    }

    /// A value already at rest on `value`.
    pub fn resting(value: f32, velocity: f32) -> Self {
        Self::new(value, value, velocity)
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Update the target without touching `current`, so in-flight motion
    /// adjusts direction smoothly instead of jumping.
    pub fn set_target(&mut self, target: f32) {
        self.target = sanitize_position(target);
    }
}

impl Animated for AnimatedValue {
    fn step(&mut self) -> bool {
        if self.current < self.target {
            self.current += self.velocity;
        } else if self.current > self.target {
            self.current -= self.velocity;
        }
        if (self.target - self.current).abs() < self.velocity {
            self.current = self.target;
        }
        self.current != self.target
    }

    fn is_at_rest(&self) -> bool {
        self.current == self.target
    }
}

fn sanitize_position(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        warn!(value, "non-finite animation position, using 0.0");
        0.0
    }
}

fn sanitize_velocity(velocity: f32) -> f32 {
    if velocity.is_finite() && velocity > 0.0 {
        velocity
    } else {
        warn!(velocity, "invalid animation velocity, using 1.0");
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks_to_rest(value: &mut AnimatedValue) -> u32 {
        let mut ticks = 0;
        while !value.is_at_rest() {
            value.step();
            ticks += 1;
            assert!(ticks < 10_000, "animation failed to converge");
        }
        ticks
    }

    #[test]
    fn converges_within_distance_over_velocity_ticks() {
        let mut v = AnimatedValue::new(0.0, 100.0, 5.0);
        assert_eq!(ticks_to_rest(&mut v), 20);
        assert_eq!(v.current(), 100.0);

        // The snap rule may land a tick early, never late.
        let mut v = AnimatedValue::new(0.0, 12.5, 5.0);
        assert!(ticks_to_rest(&mut v) <= (12.5f32 / 5.0).ceil() as u32);
        assert_eq!(v.current(), 12.5);
    }

    #[test]
    fn never_lands_beyond_the_target() {
        let mut v = AnimatedValue::new(10.0, 3.2, 5.0);
        while !v.is_at_rest() {
            v.step();
            assert!(v.current() >= 3.2);
        }
        assert_eq!(v.current(), 3.2);
    }

    #[test]
    fn descending_motion_converges_too() {
        let mut v = AnimatedValue::new(1.0, 0.0, 0.02);
        let ticks = ticks_to_rest(&mut v);
        // 1.0 / 0.02 = 50 ticks, give or take one for f32 accumulation.
        assert!((49..=51).contains(&ticks));
        assert_eq!(v.current(), 0.0);
    }

    #[test]
    fn step_at_rest_is_a_noop_and_reports_no_motion() {
        let mut v = AnimatedValue::resting(42.0, 5.0);
        assert!(!v.step());
        assert_eq!(v.current(), 42.0);
        assert_eq!(v.target(), 42.0);
    }

    #[test]
    fn landing_step_reports_no_further_motion() {
        let mut v = AnimatedValue::new(0.0, 4.0, 5.0);
        assert!(!v.step());
        assert!(v.is_at_rest());
    }

    #[test]
    fn set_target_preserves_current_mid_flight() {
        let mut v = AnimatedValue::new(0.0, 100.0, 5.0);
        v.step();
        v.step();
        let current = v.current();
        v.set_target(-50.0);
        assert_eq!(v.current(), current);
        assert!(v.step());
        assert_eq!(v.current(), current - 5.0);
    }

    #[test]
    fn sanitizes_degenerate_inputs() {
        let v = AnimatedValue::new(f32::NAN, f32::INFINITY, 0.0);
        assert_eq!(v.current(), 0.0);
        assert_eq!(v.target(), 0.0);
        assert_eq!(v.velocity(), 1.0);
    }
}

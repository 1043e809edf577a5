//! Series tick driver
//!
//! Owns an ordered, index-aligned collection of animated entries and
//! advances them in lockstep once per tick. Data updates are applied as a
//! three-way diff (update existing / seed appended / truncate trailing)
//! so in-flight motion survives retargets.

use smallvec::SmallVec;
use tracing::debug;

use crate::value::Animated;

/// Drives a collection of animated entries once per tick.
#[derive(Clone, Debug, Default)]
pub struct SeriesAnimator<T> {
    entries: SmallVec<[T; 8]>,
}

impl<T: Animated> SeriesAnimator<T> {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_at_rest(&self) -> bool {
        self.entries.iter().all(Animated::is_at_rest)
    }

    /// Apply a new target sequence.
    ///
    /// Index-aligned entries are retargeted in place via `update`, which
    /// must preserve the entry's current state. Indices past the old
    /// length are created by `seed`. Trailing entries past the new length
    /// are removed regardless of their motion state. An empty sequence
    /// clears the series.
    pub fn retarget<S>(
        &mut self,
        specs: impl IntoIterator<Item = S>,
        mut update: impl FnMut(&mut T, &S),
        mut seed: impl FnMut(S) -> T,
    ) {
        let before = self.entries.len();
        let mut kept = 0;
        for spec in specs {
            if kept < self.entries.len() {
                update(&mut self.entries[kept], &spec);
            } else {
                self.entries.push(seed(spec));
            }
            kept += 1;
        }
        self.entries.truncate(kept);
        if self.entries.len() != before {
            debug!(before, now = self.entries.len(), "series resized");
        }
    }

    /// Step every entry once. Returns true while at least one entry is
    /// still in motion afterwards, i.e. while another tick is needed.
    pub fn tick(&mut self) -> bool {
        let mut moving = false;
        for entry in &mut self.entries {
            if entry.step() {
                moving = true;
            }
        }
        moving
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AnimatedValue;

    fn series_of(targets: &[f32]) -> SeriesAnimator<AnimatedValue> {
        let mut series = SeriesAnimator::new();
        series.retarget(
            targets.iter().copied(),
            |value: &mut AnimatedValue, t: &f32| value.set_target(*t),
            |t| AnimatedValue::new(0.0, t, 5.0),
        );
        series
    }

    #[test]
    fn retarget_seeds_appended_entries() {
        let mut series = series_of(&[10.0, 20.0]);
        series.retarget(
            [10.0, 20.0, 30.0, 40.0, 50.0],
            |value, t| value.set_target(*t),
            |t| AnimatedValue::new(0.0, t, 5.0),
        );
        assert_eq!(series.len(), 5);
        assert_eq!(series.entries()[4].current(), 0.0);
        assert_eq!(series.entries()[4].target(), 50.0);
    }

    #[test]
    fn retarget_truncates_trailing_regardless_of_motion() {
        let mut series = series_of(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        series.tick(); // everything is mid-flight
        series.retarget(
            [10.0, 20.0],
            |value, t| value.set_target(*t),
            |t| AnimatedValue::new(0.0, t, 5.0),
        );
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn retarget_preserves_current_of_existing_entries() {
        let mut series = series_of(&[100.0]);
        series.tick();
        series.tick();
        let current = series.entries()[0].current();
        series.retarget(
            [7.0],
            |value, t| value.set_target(*t),
            |t| AnimatedValue::new(0.0, t, 5.0),
        );
        assert_eq!(series.entries()[0].current(), current);
        assert_eq!(series.entries()[0].target(), 7.0);
    }

    #[test]
    fn empty_retarget_clears_the_series() {
        let mut series = series_of(&[10.0, 20.0]);
        series.retarget(
            std::iter::empty::<f32>(),
            |value, t| value.set_target(*t),
            |t| AnimatedValue::new(0.0, t, 5.0),
        );
        assert!(series.is_empty());
        assert!(series.is_at_rest());
        assert!(!series.tick());
    }

    #[test]
    fn tick_reports_false_exactly_when_all_entries_rest() {
        let mut series = series_of(&[5.0, 15.0]);
        let mut ticks = 0;
        while series.tick() {
            ticks += 1;
            assert!(ticks < 100);
        }
        assert!(series.is_at_rest());
        assert_eq!(series.entries()[0].current(), 5.0);
        assert_eq!(series.entries()[1].current(), 15.0);
        assert!(!series.tick());
    }

    #[test]
    fn lockstep_rest_takes_the_longest_entry() {
        // max distance 50 at velocity 5 -> at most 10 ticks for everyone.
        let mut series = series_of(&[5.0, 50.0]);
        let mut ticks = 0;
        while series.tick() {
            ticks += 1;
        }
        // The landing tick reports no further motion, so the loop sees
        // one tick fewer than the distance implies.
        assert!((9..=10).contains(&ticks));
        assert!(series.is_at_rest());
    }
}

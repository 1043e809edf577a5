//! Pie slice model

use minichart_animation::{Animated, ArcSpan};
use minichart_core::Color;

/// One slice of an incoming pie dataset: a share of the whole plus
/// display metadata. Percentages are sanitized on construction
/// (non-finite becomes 0, then clamped to 0..=100).
#[derive(Clone, Debug, PartialEq)]
pub struct SliceSpec {
    percent: f32,
    label: Option<String>,
    color: Option<Color>,
}

impl SliceSpec {
    /// `percent` is the slice's share of the whole, 0 to 100.
    pub fn new(percent: f32) -> Self {
        let percent = if percent.is_finite() { percent } else { 0.0 };
        Self {
            percent: percent.clamp(0.0, 100.0),
            label: None,
            color: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Target angular extent of this slice.
    pub fn sweep_deg(&self) -> f32 {
        self.percent * 360.0 / 100.0
    }
}

/// A live, animated pie slice: an [`ArcSpan`] plus the metadata of the
/// datum it currently represents.
#[derive(Clone, Debug)]
pub struct PieSlice {
    span: ArcSpan,
    label: Option<String>,
    color: Option<Color>,
}

impl PieSlice {
    /// A slice whose angles start at the seed position and animate toward
    /// `target`'s targets.
    pub fn seeded(start_deg: f32, end_deg: f32, target: &ArcSpan, spec: SliceSpec) -> Self {
        Self {
            span: ArcSpan::seeded(start_deg, end_deg, target),
            label: spec.label,
            color: spec.color,
        }
    }

    /// Adopt new targets and metadata in place; current angles are
    /// untouched so the slice keeps moving smoothly.
    pub fn retarget(&mut self, target: &ArcSpan, spec: &SliceSpec) {
        self.span.set_target(target);
        self.label = spec.label.clone();
        self.color = spec.color;
    }

    pub fn start_deg(&self) -> f32 {
        self.span.start_deg()
    }

    pub fn end_deg(&self) -> f32 {
        self.span.end_deg()
    }

    pub fn sweep_deg(&self) -> f32 {
        self.span.sweep_deg()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// The slice's current share as an integer percent string. Truncates
    /// like the percentage readouts on the original widgets: 359.9 degrees
    /// is "99%", not "100%".
    pub fn percent_label(&self) -> String {
        let percent = self.sweep_deg() / 360.0 * 100.0;
        format!("{}%", percent as i32)
    }
}

impl Animated for PieSlice {
    fn step(&mut self) -> bool {
        self.span.step()
    }

    fn is_at_rest(&self) -> bool {
        self.span.is_at_rest()
    }
}

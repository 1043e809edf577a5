//! Generic pie chart
//!
//! Converts a list of [`SliceSpec`] percentages into cumulative angle
//! targets and animates every slice's endpoints toward them. Slices are
//! painted in order, so later slices overlay earlier ones where arcs
//! coincide.

use std::time::Duration;

use tracing::debug;

use minichart_animation::{ArcSpan, FrameRequest, Phase, SeriesAnimator};
use minichart_core::{
    Color, Density, DrawContext, MeasureSpec, Point, Size, TextAlign, TextStyle,
};

use crate::common::slice_color;
use crate::slice::{PieSlice, SliceSpec};

const DEFAULT_VELOCITY: f32 = 5.0;
const FRAME_DELAY: Duration = Duration::from_millis(10);

#[derive(Clone, Debug)]
pub struct PieChartStyle {
    pub text: Color,
    pub text_size: f32,

    /// Dial angle the first slice grows from.
    pub base_deg: f32,
    /// Margin between the pie and the widget edge.
    pub margin: f32,
    /// Slices narrower than this skip their percent readout.
    pub min_label_sweep_deg: f32,
    pub preferred_size: f32,
}

impl PieChartStyle {
    pub fn scaled(density: Density) -> Self {
        Self {
            text: Color::WHITE,
            text_size: density.sip(15.0),
            base_deg: 270.0,
            margin: density.dip(10.0),
            min_label_sweep_deg: 15.0,
            preferred_size: density.dip(200.0),
        }
    }
}

impl Default for PieChartStyle {
    fn default() -> Self {
        Self::scaled(Density::default())
    }
}

pub struct PieChartModel {
    pub style: PieChartStyle,

    series: SeriesAnimator<PieSlice>,
    phase: Phase,
}

impl PieChartModel {
    pub fn new(density: Density) -> Self {
        Self {
            style: PieChartStyle::scaled(density),
            series: SeriesAnimator::new(),
            phase: Phase::Idle,
        }
    }

    /// Retarget the slices from cumulative percentages. Index-aligned
    /// slices keep their current angles and adopt the new metadata;
    /// appended slices sweep open from the base angle. An empty list
    /// clears the chart. Returns the frame request the host must apply.
    pub fn set_data(&mut self, specs: Vec<SliceSpec>) -> FrameRequest {
        debug!(slices = specs.len(), "pie chart retargeted");
        let mut acc = self.style.base_deg;
        let targets: Vec<(ArcSpan, SliceSpec)> = specs
            .into_iter()
            .map(|spec| {
                let start = acc;
                acc += spec.sweep_deg();
                (ArcSpan::from_degrees(start, acc, DEFAULT_VELOCITY), spec)
            })
            .collect();

        self.series.retarget(
            targets,
            |slice, (span, spec)| slice.retarget(span, spec),
            |(span, spec)| PieSlice::seeded(0.0, 0.0, &span, spec),
        );
        self.phase = Phase::Animating;
        FrameRequest::Now
    }

    /// Advance one frame. The host repaints after every tick and applies
    /// the returned request.
    pub fn on_tick(&mut self) -> FrameRequest {
        if self.phase == Phase::Idle {
            return FrameRequest::Rest;
        }
        if self.series.tick() {
            FrameRequest::After(FRAME_DELAY)
        } else {
            self.phase = Phase::Idle;
            FrameRequest::Rest
        }
    }

    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Animating
    }

    /// Current animated slices, in display order.
    pub fn slices(&self) -> &[PieSlice] {
        self.series.entries()
    }

    pub fn measure(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        Size::new(
            width_spec.resolve(self.style.preferred_size),
            height_spec.resolve(self.style.preferred_size),
        )
    }

    pub fn render(&self, ctx: &mut dyn DrawContext, w: f32, h: f32) {
        let radius = w.min(h) / 2.0 - self.style.margin;
        if radius <= 0.0 || self.series.is_empty() {
            return;
        }
        let center = Point::new(w / 2.0, h / 2.0);

        for (i, slice) in self.series.entries().iter().enumerate() {
            let color = slice.color().unwrap_or_else(|| slice_color(i));
            ctx.fill_arc(
                center,
                radius,
                slice.start_deg(),
                slice.sweep_deg(),
                color.into(),
            );
        }

        let text = TextStyle::new(self.style.text_size)
            .with_color(self.style.text)
            .with_align(TextAlign::Center);
        for slice in self.series.entries() {
            if slice.sweep_deg() < self.style.min_label_sweep_deg {
                continue;
            }
            let mid = (slice.start_deg() + slice.sweep_deg() / 2.0).to_radians();
            let origin = Point::new(
                center.x + radius * 0.66 * mid.cos(),
                center.y + radius * 0.66 * mid.sin(),
            );
            ctx.draw_text(&slice.percent_label(), origin, &text);
        }
    }
}

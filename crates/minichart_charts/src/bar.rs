//! Animated bar chart
//!
//! Bars grow downward-inverted: each entry animates over the unit
//! interval where 0.0 is a full bar and 1.0 an empty one, because the
//! fill is drawn from a fixed top edge toward a computed fill position.

use std::time::Duration;

use tracing::debug;

use minichart_animation::{AnimatedValue, FrameRequest, Phase, SeriesAnimator};
use minichart_core::{
    Color, Density, DrawContext, MeasureSpec, Point, Rect, Size, TextAlign, TextStyle,
};

/// Step per tick over the inverted unit interval.
const BAR_STEP: f32 = 0.02;
const FRAME_DELAY: Duration = Duration::from_millis(20);
/// Newly appended bars animate in from empty.
const EMPTY_SEED: f32 = 1.0;

#[derive(Clone, Debug)]
pub struct BarChartStyle {
    /// Full-height track behind each bar.
    pub track: Color,
    /// Animated fill in front of the track.
    pub fill: Color,
    pub text: Color,

    pub text_size: f32,
    /// Bars never get narrower than this; wide labels widen them.
    pub min_bar_width: f32,
    pub bar_gap: f32,
    pub top_margin: f32,
    /// Gap between the bars and the label row.
    pub text_gap: f32,
    pub preferred_height: f32,
}

impl BarChartStyle {
    pub fn scaled(density: Density) -> Self {
        Self {
            track: Color::from_hex(0xF6F6F6),
            fill: Color::from_hex(0xFC496D),
            text: Color::from_hex(0x9B9A9B),
            text_size: density.sip(15.0),
            min_bar_width: density.dip(22.0),
            bar_gap: density.dip(22.0),
            top_margin: density.dip(5.0),
            text_gap: density.dip(5.0),
            preferred_height: 222.0,
        }
    }
}

impl Default for BarChartStyle {
    fn default() -> Self {
        Self::scaled(Density::default())
    }
}

pub struct BarChartModel {
    pub style: BarChartStyle,

    series: SeriesAnimator<AnimatedValue>,
    labels: Vec<String>,
    bar_width: f32,
    label_height: f32,
    label_descent: f32,
    phase: Phase,
}

impl BarChartModel {
    pub fn new(density: Density) -> Self {
        let style = BarChartStyle::scaled(density);
        let bar_width = style.min_bar_width;
        Self {
            style,
            series: SeriesAnimator::new(),
            labels: Vec::new(),
            bar_width,
            label_height: 0.0,
            label_descent: 0.0,
            phase: Phase::Idle,
        }
    }

    /// Replace the per-bar labels and refit bar width to the widest one.
    /// The host should repaint afterwards; no animation is involved.
    pub fn set_labels(&mut self, labels: Vec<String>, ctx: &dyn DrawContext) {
        let text = TextStyle::new(self.style.text_size);
        self.bar_width = self.style.min_bar_width;
        self.label_height = 0.0;
        self.label_descent = 0.0;
        for label in &labels {
            let metrics = ctx.measure_text(label, &text);
            self.bar_width = self.bar_width.max(metrics.width);
            self.label_height = self.label_height.max(metrics.height);
            self.label_descent = self.label_descent.max(metrics.descent);
        }
        self.labels = labels;
    }

    /// Retarget the bars at `1 - value / max`. A zero maximum is treated
    /// as one; non-finite values as zero. Targets are clamped to [0, 1].
    /// Returns the frame request the host must apply (it supersedes any
    /// pending tick for this widget).
    pub fn set_data(&mut self, values: &[f32], max: f32) -> FrameRequest {
        let max = if max == 0.0 || !max.is_finite() { 1.0 } else { max };
        debug!(bars = values.len(), max, "bar chart retargeted");
        self.series.retarget(
            values.iter().map(|value| {
                let value = if value.is_finite() { *value } else { 0.0 };
                (1.0 - value / max).clamp(0.0, 1.0)
            }),
            |bar, target| bar.set_target(*target),
            |target| AnimatedValue::new(EMPTY_SEED, target, BAR_STEP),
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

    /// Current animated entries, in bar order.
    pub fn bars(&self) -> &[AnimatedValue] {
        self.series.entries()
    }

    pub fn measure(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let preferred_width = self.labels.len() as f32 * (self.bar_width + self.style.bar_gap);
        Size::new(
            width_spec.resolve(preferred_width),
            height_spec.resolve(self.style.preferred_height),
        )
    }

    /// Paint the current state. Bars first, then the label row.
    pub fn render(&self, ctx: &mut dyn DrawContext, _w: f32, h: f32) {
        self.render_bars(ctx, h);
        self.render_labels(ctx, h);
    }

    fn render_bars(&self, ctx: &mut dyn DrawContext, h: f32) {
        if self.series.is_empty() {
            return;
        }

        let top = self.style.top_margin;
        let bottom = h - self.label_height - self.style.text_gap;
        let track_height = (bottom - top).max(0.0);

        for (i, bar) in self.series.entries().iter().enumerate() {
            let left = self.bar_left(i);

            ctx.fill_rect(
                Rect::new(left, top, self.bar_width, track_height),
                self.style.track.into(),
            );

            let fill_top = top + track_height * bar.current();
            ctx.fill_rect(
                Rect::new(left, fill_top, self.bar_width, (bottom - fill_top).max(0.0)),
                self.style.fill.into(),
            );
        }
    }

    fn render_labels(&self, ctx: &mut dyn DrawContext, h: f32) {
        if self.labels.is_empty() {
            return;
        }

        let text = TextStyle::new(self.style.text_size)
            .with_color(self.style.text)
            .with_align(TextAlign::Center);
        for (i, label) in self.labels.iter().enumerate() {
            let x = self.bar_left(i) + self.bar_width / 2.0;
            ctx.draw_text(label, Point::new(x, h - self.label_descent), &text);
        }
    }

    fn bar_left(&self, i: usize) -> f32 {
        self.style.bar_gap * (i + 1) as f32 + self.bar_width * i as f32
    }
}

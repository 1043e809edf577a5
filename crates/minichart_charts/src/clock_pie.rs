//! 24-hour clock pie
//!
//! Draws a clock face (dial ticks, rings, hour labels) and overlays one
//! translucent wedge per time interval. The dial covers a full day:
//! 15 degrees per hour, with 0h fixed at 12 o'clock.

use std::time::Duration;

use tracing::debug;

use minichart_animation::{ArcSpan, FrameRequest, Phase, SeriesAnimator};
use minichart_core::{
    Color, Density, DrawContext, MeasureSpec, Point, Size, Stroke, TextAlign, TextStyle,
};

const DEFAULT_VELOCITY: f32 = 5.0;
const FRAME_DELAY: Duration = Duration::from_millis(10);
/// Arc coordinates put 0 degrees at 3 o'clock; the dial's 0h sits at 12.
const CLOCK_TOP_DEG: f32 = 270.0;
const DEG_PER_HOUR: f32 = 15.0;

/// A wall-clock time interval, resolved to dial angles at construction.
/// The end angle gains full turns until it is not before the start, so an
/// interval may wrap past midnight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockInterval {
    start_deg: f32,
    end_deg: f32,
}

impl ClockInterval {
    pub fn from_hours(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Self {
        Self::with_seconds(start_hour, start_min, 0, end_hour, end_min, 0)
    }

    pub fn with_seconds(
        start_hour: u32,
        start_min: u32,
        start_sec: u32,
        end_hour: u32,
        end_min: u32,
        end_sec: u32,
    ) -> Self {
        Self {
            start_deg: dial_angle(start_hour, start_min, start_sec),
            end_deg: dial_angle(end_hour, end_min, end_sec),
        }
    }

    /// Raw dial angle of the interval start.
    pub fn start_deg(&self) -> f32 {
        self.start_deg
    }

    /// Raw dial angle of the interval end, before normalization.
    pub fn end_deg(&self) -> f32 {
        self.end_deg
    }

    pub(crate) fn to_span(self) -> ArcSpan {
        ArcSpan::from_degrees(self.start_deg, self.end_deg, DEFAULT_VELOCITY)
    }
}

fn dial_angle(hour: u32, minute: u32, second: u32) -> f32 {
    CLOCK_TOP_DEG
        + hour as f32 * DEG_PER_HOUR
        + minute as f32 * DEG_PER_HOUR / 60.0
        + second as f32 * DEG_PER_HOUR / 3600.0
}

#[derive(Clone, Debug)]
pub struct ClockPieStyle {
    pub text: Color,
    pub dial: Color,
    /// Wedge fill; translucent so overlapping intervals stay readable.
    pub fill: Color,
    pub ring: Color,

    pub text_size: f32,
    pub line_width: f32,
    pub tick_len: f32,
}

impl ClockPieStyle {
    pub fn scaled(density: Density) -> Self {
        Self {
            text: Color::from_hex(0x9B9A9B),
            dial: Color::from_hex(0xD4D3D4),
            fill: Color::argb8(50, 255, 0, 51),
            ring: Color::WHITE,
            text_size: density.sip(15.0),
            line_width: density.dip(1.0),
            tick_len: density.dip(10.0),
        }
    }
}

impl Default for ClockPieStyle {
    fn default() -> Self {
        Self::scaled(Density::default())
    }
}

pub struct ClockPieModel {
    pub style: ClockPieStyle,

    series: SeriesAnimator<ArcSpan>,
    phase: Phase,
}

impl ClockPieModel {
    pub fn new(density: Density) -> Self {
        Self {
            style: ClockPieStyle::scaled(density),
            series: SeriesAnimator::new(),
            phase: Phase::Idle,
        }
    }

    /// Retarget the wedges. Existing spans keep their current angles;
    /// appended spans sweep in from the dial top. An empty list clears
    /// the chart. Returns the frame request the host must apply.
    pub fn set_data(&mut self, intervals: &[ClockInterval]) -> FrameRequest {
        debug!(intervals = intervals.len(), "clock pie retargeted");
        self.series.retarget(
            intervals.iter().map(|interval| interval.to_span()),
            |span, target| span.set_target(target),
            |target| ArcSpan::seeded(0.0, 0.0, &target),
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

    /// Current animated spans, in interval order.
    pub fn spans(&self) -> &[ArcSpan] {
        self.series.entries()
    }

    /// The clock prefers a square; the degenerate 3 px default only
    /// matters under fully unspecified constraints.
    pub fn measure(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let width = width_spec.resolve(3.0);
        let height = height_spec.resolve(width);
        Size::new(width, height)
    }

    pub fn render(&self, ctx: &mut dyn DrawContext, w: f32, h: f32) {
        let text = TextStyle::new(self.style.text_size)
            .with_color(self.style.text)
            .with_align(TextAlign::Center);
        let hour_metrics = ctx.measure_text("18", &text);
        let left_text_w = hour_metrics.width;
        let right_text_w = ctx.measure_text("6", &text).width;

        let radius = w / 2.0 - self.style.tick_len * 2.0 - left_text_w / 2.0;
        if radius <= 0.0 {
            return;
        }
        let center = Point::new(
            w / 2.0 - right_text_w / 2.0 + left_text_w / 2.0,
            h / 2.0 + self.style.text_size / 2.0 - left_text_w / 2.0,
        );

        self.render_dial(ctx, center, radius);
        self.render_rings(ctx, center, radius);
        self.render_hour_labels(ctx, center, w, h, hour_metrics.height, &text);
        self.render_wedges(ctx, center, radius);
    }

    /// Twelve lines through the center, one spoke per dial hour.
    fn render_dial(&self, ctx: &mut dyn DrawContext, center: Point, radius: f32) {
        let stroke = Stroke::new(self.style.line_width);
        let reach = radius + self.style.tick_len;
        for i in 0..12 {
            let angle = std::f32::consts::PI / 12.0 * i as f32;
            let dx = angle.sin() * reach;
            let dy = angle.cos() * reach;
            ctx.draw_line(
                Point::new(center.x - dx, center.y - dy),
                Point::new(center.x + dx, center.y + dy),
                &stroke,
                self.style.dial.into(),
            );
        }
    }

    /// Cover the spoke interiors so only short ticks remain visible, then
    /// edge the face with a thin dial-colored ring.
    fn render_rings(&self, ctx: &mut dyn DrawContext, center: Point, radius: f32) {
        ctx.fill_circle(
            center,
            radius + self.style.tick_len / 2.0,
            self.style.ring.into(),
        );
        ctx.fill_circle(
            center,
            radius + self.style.line_width,
            self.style.dial.into(),
        );
        ctx.fill_circle(center, radius, self.style.ring.into());
    }

    fn render_hour_labels(
        &self,
        ctx: &mut dyn DrawContext,
        center: Point,
        w: f32,
        h: f32,
        text_height: f32,
        text: &TextStyle,
    ) {
        let left_w = ctx.measure_text("18", text).width;
        let right_w = ctx.measure_text("6", text).width;
        ctx.draw_text("0", Point::new(center.x, text_height), text);
        ctx.draw_text("12", Point::new(center.x, h), text);
        ctx.draw_text(
            "18",
            Point::new(left_w / 2.0, center.y + text_height / 2.0),
            text,
        );
        ctx.draw_text(
            "6",
            Point::new(w - right_w / 2.0, center.y + text_height / 2.0),
            text,
        );
    }

    fn render_wedges(&self, ctx: &mut dyn DrawContext, center: Point, radius: f32) {
        for span in self.series.entries() {
            ctx.fill_arc(
                center,
                radius,
                span.start_deg(),
                span.sweep_deg(),
                self.style.fill.into(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minichart_core::{DrawCommand, RecordingContext};

    #[test]
    fn dial_angles_are_fifteen_degrees_per_hour() {
        let interval = ClockInterval::from_hours(6, 0, 18, 0);
        assert_eq!(interval.start_deg(), 360.0);
        assert_eq!(interval.end_deg(), 270.0 + 18.0 * 15.0);

        let fine = ClockInterval::with_seconds(0, 30, 0, 1, 30, 36);
        assert_eq!(fine.start_deg(), 277.5);
        assert_eq!(fine.end_deg(), 270.0 + 15.0 + 7.5 + 0.15);
    }

    #[test]
    fn wrapping_interval_normalizes_by_one_full_turn() {
        // 6:00 -> 3:00 crosses midnight: raw end 315 < raw start 360.
        let mut chart = ClockPieModel::new(Density::default());
        let _ = chart.set_data(&[ClockInterval::from_hours(6, 0, 3, 0)]);
        let span = &chart.spans()[0];
        assert_eq!(span.target_start_deg(), 360.0);
        assert_eq!(span.target_end_deg(), 315.0 + 360.0);
    }

    #[test]
    fn appended_spans_seed_at_the_dial_top() {
        let mut chart = ClockPieModel::new(Density::default());
        let _ = chart.set_data(&[ClockInterval::from_hours(1, 0, 2, 0)]);
        let span = &chart.spans()[0];
        assert_eq!(span.start_deg(), 0.0);
        assert_eq!(span.end_deg(), 0.0);
        assert!(chart.is_animating());
    }

    #[test]
    fn ticks_run_at_ten_millis_until_rest() {
        let mut chart = ClockPieModel::new(Density::default());
        let _ = chart.set_data(&[ClockInterval::from_hours(0, 0, 1, 0)]);
        let mut ticks = 0;
        loop {
            match chart.on_tick() {
                FrameRequest::After(delay) => {
                    assert_eq!(delay, Duration::from_millis(10));
                    ticks += 1;
                    assert!(ticks < 200);
                }
                FrameRequest::Rest => break,
                FrameRequest::Now => unreachable!("ticks never request immediate frames"),
            }
        }
        let span = &chart.spans()[0];
        assert_eq!(span.start_deg(), 270.0);
        assert_eq!(span.end_deg(), 285.0);
        assert!(!chart.is_animating());
    }

    #[test]
    fn render_paints_dial_rings_labels_then_wedges() {
        let mut chart = ClockPieModel::new(Density::default());
        let _ = chart.set_data(&[
            ClockInterval::from_hours(0, 0, 6, 0),
            ClockInterval::from_hours(8, 0, 9, 30),
        ]);
        let mut ctx = RecordingContext::new(Size::new(300.0, 300.0));
        chart.render(&mut ctx, 300.0, 300.0);

        let lines = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        let circles = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count();
        let texts: Vec<&str> = ctx
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        let arcs = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillArc { .. }))
            .count();

        assert_eq!(lines, 12);
        assert_eq!(circles, 3);
        assert_eq!(texts, vec!["0", "12", "18", "6"]);
        assert_eq!(arcs, 2);
    }

    #[test]
    fn degenerate_size_skips_painting() {
        let chart = ClockPieModel::new(Density::default());
        let size = chart.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(size, Size::new(3.0, 3.0));

        let mut ctx = RecordingContext::new(Size::new(3.0, 3.0));
        chart.render(&mut ctx, 3.0, 3.0);
        assert!(ctx.commands().is_empty());
    }
}

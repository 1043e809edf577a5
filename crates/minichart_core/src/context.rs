//! Drawing surface abstraction
//!
//! Widgets raster onto a [`DrawContext`]: a canvas-like collaborator with
//! rectangle, arc, line, circle, and text primitives. Renderers implement the
//! trait against a real backend; [`RecordingContext`] implements it by
//! capturing commands, which is what headless rendering and the widget tests
//! assert on.

use crate::geometry::{Point, Rect, Size};
use crate::paint::{Brush, Stroke, TextMetrics, TextStyle};

/// Canvas-like drawing surface.
///
/// Angles are in degrees, with 0 at 3 o'clock and positive sweep clockwise
/// (screen coordinates, y down). Arc fills are pie wedges including the
/// center point.
pub trait DrawContext {
    fn fill_rect(&mut self, rect: Rect, brush: Brush);

    /// Fill a pie wedge: the area bounded by the two radii and the arc.
    fn fill_arc(&mut self, center: Point, radius: f32, start_deg: f32, sweep_deg: f32, brush: Brush);

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke, brush: Brush);

    fn fill_circle(&mut self, center: Point, radius: f32, brush: Brush);

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke, brush: Brush);

    /// Draw text with its baseline at `origin.y`, anchored per `style.align`.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    fn measure_text(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// A recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        brush: Brush,
    },
    FillArc {
        center: Point,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        brush: Brush,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
        brush: Brush,
    },
    FillCircle {
        center: Point,
        radius: f32,
        brush: Brush,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        stroke: Stroke,
        brush: Brush,
    },
    DrawText {
        text: String,
        origin: Point,
        style: TextStyle,
    },
}

/// A [`DrawContext`] that records commands instead of rastering.
///
/// Text metrics use a nominal glyph box (width 0.55 em per char, one em
/// tall, 0.2 em descent) so layout stays deterministic without a font stack.
pub struct RecordingContext {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawContext for RecordingContext {
    fn fill_rect(&mut self, rect: Rect, brush: Brush) {
        self.commands.push(DrawCommand::FillRect { rect, brush });
    }

    fn fill_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        brush: Brush,
    ) {
        self.commands.push(DrawCommand::FillArc {
            center,
            radius,
            start_deg,
            sweep_deg,
            brush,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke, brush: Brush) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: *stroke,
            brush,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, brush: Brush) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            brush,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke, brush: Brush) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            stroke: *stroke,
            brush,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_owned(),
            origin,
            style: *style,
        });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * style.size * 0.55,
            height: style.size,
            descent: style.size * 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn records_commands_in_order() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE.into());
        ctx.draw_text("hi", Point::ZERO, &TextStyle::new(12.0));

        assert_eq!(ctx.commands().len(), 2);
        assert!(matches!(ctx.commands()[0], DrawCommand::FillRect { .. }));
        assert!(matches!(ctx.commands()[1], DrawCommand::DrawText { .. }));

        let taken = ctx.take_commands();
        assert_eq!(taken.len(), 2);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn nominal_metrics_scale_with_size_and_length() {
        let ctx = RecordingContext::new(Size::ZERO);
        let m = ctx.measure_text("18", &TextStyle::new(15.0));
        assert!((m.width - 2.0 * 15.0 * 0.55).abs() < 1e-5);
        assert_eq!(m.height, 15.0);
    }
}

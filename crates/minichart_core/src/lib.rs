//! Minichart Core
//!
//! Foundational primitives for the minichart widget crates:
//!
//! - **Geometry**: points, sizes, rectangles
//! - **Paint**: colors, brushes, strokes, text styles
//! - **DrawContext**: the canvas-like surface widgets raster onto
//! - **RecordingContext**: a headless surface that captures draw commands
//! - **Display metrics**: density scaling and measure-spec resolution

pub mod context;
pub mod density;
pub mod geometry;
pub mod measure;
pub mod paint;

pub use context::{DrawCommand, DrawContext, RecordingContext};
pub use density::Density;
pub use geometry::{Point, Rect, Size};
pub use measure::MeasureSpec;
pub use paint::{Brush, Color, Stroke, TextAlign, TextMetrics, TextStyle};

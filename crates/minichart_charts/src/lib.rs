//! minichart_charts
//!
//! A small set of custom-drawn, frame-animated chart widgets: a bar chart,
//! a 24-hour clock pie, and a generic pie chart.
//!
//! Widgets share one control flow: `set_data` converts a dataset into
//! targets for an animated series and returns a frame request; each tick
//! advances every value by a fixed step and reports whether another frame
//! is needed; `render` paints the current (not target) state onto a
//! [`minichart_core::DrawContext`]. Scheduling is owned by the host via
//! [`minichart_animation::FrameScheduler`].

mod common;

pub mod bar;
pub mod clock_pie;
pub mod pie;
pub mod slice;

pub use slice::{PieSlice, SliceSpec};

/// Common imports for chart users.
pub mod prelude {
    pub use crate::bar::{BarChartModel, BarChartStyle};
    pub use crate::clock_pie::{ClockInterval, ClockPieModel, ClockPieStyle};
    pub use crate::pie::{PieChartModel, PieChartStyle};
    pub use crate::slice::{PieSlice, SliceSpec};
    pub use minichart_animation::{FrameRequest, FrameScheduler, Phase};
}

//! Minichart Animation System
//!
//! Frame-by-frame convergence animation for chart widgets.
//!
//! # Features
//!
//! - **AnimatedValue**: fixed-step scalar that converges exactly onto a target
//! - **ArcSpan**: independently animated start/end angle pair for pie slices
//! - **SeriesAnimator**: retargetable, index-aligned collection tick driver
//! - **FrameScheduler**: cooperative single-slot frame callbacks per widget

pub mod scheduler;
pub mod series;
pub mod span;
pub mod value;

pub use scheduler::{FrameRequest, FrameScheduler, Phase, WidgetKey};
pub use series::SeriesAnimator;
pub use span::ArcSpan;
pub use value::{Animated, AnimatedValue};

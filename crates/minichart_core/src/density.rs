//! Display density conversion
//!
//! Pure unit conversion between density-independent pixels (dip),
//! scale-independent pixels (sip, for text), and physical pixels.

use tracing::warn;

/// Display scale factors for a target surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    scale: f32,
    font_scale: f32,
}

impl Density {
    /// `scale` applies to layout units, `font_scale` to text units.
    /// Non-positive or non-finite factors are sanitized to 1.0.
    pub fn new(scale: f32, font_scale: f32) -> Self {
        let scale = sanitize(scale, "scale");
        let font_scale = sanitize(font_scale, "font_scale");
        Self { scale, font_scale }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }

    /// Density-independent pixels to physical pixels, rounded half-up.
    pub fn dip(&self, dip: f32) -> f32 {
        (dip * self.scale + 0.5).floor()
    }

    /// Scale-independent pixels to physical pixels, rounded half-up.
    pub fn sip(&self, sip: f32) -> f32 {
        (sip * self.font_scale + 0.5).floor()
    }
}

impl Default for Density {
    fn default() -> Self {
        Self {
            scale: 1.0,
            font_scale: 1.0,
        }
    }
}

fn sanitize(factor: f32, which: &str) -> f32 {
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        warn!(factor, which, "invalid density factor, using 1.0");
        1.0
    }
}

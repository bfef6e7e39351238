use serde::{Deserialize, Serialize};

use crate::core::treemap::Rect;

/// Numeric visual attributes animated by transitions.
///
/// `display_value` is the number shown on the element (bar label, value
/// display); it participates in interpolation like any other attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    pub display_value: f64,
}

impl Geometry {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            opacity: 1.0,
            display_value: 0.0,
        }
    }

    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_display_value(mut self, display_value: f64) -> Self {
        self.display_value = display_value;
        self
    }

    /// Componentwise interpolation toward `target` at normalized time `t`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self {
            x: interpolate_number(self.x, target.x, t),
            y: interpolate_number(self.y, target.y, t),
            width: interpolate_number(self.width, target.width, t),
            height: interpolate_number(self.height, target.height, t),
            opacity: interpolate_number(self.opacity, target.opacity, t),
            display_value: interpolate_number(self.display_value, target.display_value, t),
        }
    }
}

/// Linear interpolation with the non-finite-start guard: an uninitialized
/// last value must not leak non-finite intermediate frames, so it is treated
/// as 0.
#[must_use]
pub fn interpolate_number(start: f64, end: f64, t: f64) -> f64 {
    let start = if start.is_finite() { start } else { 0.0 };
    start + (end - start) * t
}

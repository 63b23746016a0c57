use super::Animatable;
use crate::widgets::Rect;

/// Scale transform applied to the countdown indicator at paint time.
///
/// Only the horizontal axis is ever animated by the countdown; the vertical
/// scale stays at 1.0 so the bar keeps its height while it collapses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Scale in x and y (1.0 = no scale)
    pub scale: (f32, f32),
    /// Transform origin as fraction of size (0.5, 0.5 = center)
    pub origin: (f32, f32),
}

impl Transform {
    /// Identity transform (no transformation)
    pub const IDENTITY: Self = Self {
        scale: (1.0, 1.0),
        origin: (0.5, 0.5),
    };

    /// Fully collapsed along the horizontal axis
    pub const HORIZONTAL_ZERO: Self = Self {
        scale: (0.0, 1.0),
        origin: (0.5, 0.5),
    };

    /// Create a scale transform
    pub fn scale(x: f32, y: f32) -> Self {
        Self {
            scale: (x, y),
            ..Self::IDENTITY
        }
    }

    /// Scale the horizontal axis by `fraction`, clamped to [0, 1]
    pub fn horizontal(fraction: f32) -> Self {
        Self::scale(fraction.clamp(0.0, 1.0), 1.0)
    }

    /// Horizontal scale fraction
    pub fn scale_x(&self) -> f32 {
        self.scale.0
    }

    pub fn is_identity(&self) -> bool {
        self.scale == (1.0, 1.0)
    }

    /// Set the transform origin (default is center: 0.5, 0.5)
    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = (x, y);
        self
    }

    /// Map `rect` through this transform, scaling around the origin point
    pub fn apply_to_rect(&self, rect: Rect) -> Rect {
        let origin_x = rect.x + rect.width * self.origin.0;
        let origin_y = rect.y + rect.height * self.origin.1;
        let width = rect.width * self.scale.0;
        let height = rect.height * self.scale.1;
        Rect::new(
            origin_x - (origin_x - rect.x) * self.scale.0,
            origin_y - (origin_y - rect.y) * self.scale.1,
            width,
            height,
        )
    }
}

impl Animatable for Transform {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            scale: (
                from.scale.0 + (to.scale.0 - from.scale.0) * t,
                from.scale.1 + (to.scale.1 - from.scale.1) * t,
            ),
            origin: to.origin, // Origin doesn't animate
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

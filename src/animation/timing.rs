//! Timing functions (easing curves) for animation phases.
//!
//! A timing function maps the linear progress of a phase onto the progress of
//! the animated value, so that a shrinking bar can accelerate into its
//! collapse instead of moving at constant speed.
//!
//! ## Built-in Easing Functions
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::EaseIn`] - Starts slow, ends fast (acceleration)
//! - [`TimingFunction::CubicBezier`] - CSS-style cubic bezier curve
//!
//! Phases that don't name a curve get [`TimingFunction::DEFAULT`], the same
//! gentle ease that platform compositors apply to implicit animations.

/// Timing function that controls the animation curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl TimingFunction {
    /// Curve used when a transaction doesn't set one
    pub const DEFAULT: Self = TimingFunction::CubicBezier(0.25, 0.1, 0.25, 1.0);

    /// Evaluate the timing function at time t (0.0 to 1.0)
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => ease_in(t),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
        }
    }
}

impl Default for TimingFunction {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// Easing functions

fn ease_in(t: f32) -> f32 {
    t * t
}

/// Cubic bezier curve evaluation.
/// Assumes x1 and x2 are in [0, 1] so the curve is a function of x.
fn cubic_bezier(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Newton-Raphson for the curve parameter whose x matches the input
    let mut t = x;
    for _ in 0..8 {
        let current_x = bezier_component(t, x1, x2);
        let slope = bezier_slope(t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= (current_x - x) / slope;
    }
    bezier_component(t.clamp(0.0, 1.0), y1, y2)
}

fn bezier_component(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

fn bezier_slope(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(TimingFunction::Linear.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
        assert_eq!(TimingFunction::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_in() {
        let result = TimingFunction::EaseIn.evaluate(0.5);
        assert!(result < 0.5); // Slower at start
    }

    #[test]
    fn test_default_curve_eases_out() {
        let result = TimingFunction::DEFAULT.evaluate(0.5);
        assert!(result > 0.5);
        assert_eq!(TimingFunction::default(), TimingFunction::DEFAULT);
    }

    #[test]
    fn test_endpoints_are_fixed() {
        for timing in [
            TimingFunction::Linear,
            TimingFunction::EaseIn,
            TimingFunction::DEFAULT,
        ] {
            assert!(timing.evaluate(0.0).abs() < 1e-4, "{:?} at 0", timing);
            assert!((timing.evaluate(1.0) - 1.0).abs() < 1e-4, "{:?} at 1", timing);
        }
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(TimingFunction::Linear.evaluate(-1.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(3.0), 1.0);
    }
}

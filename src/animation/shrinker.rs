use std::iter::FusedIterator;

use super::Transform;

/// Produces transforms that progressively shrink the horizontal axis, from
/// `1.0 - 1.0 / steps` down to `0.0`.
///
/// The sequence is consumed one value per countdown tick and can't be
/// rewound; once exhausted it keeps returning `None`.
#[derive(Debug, Clone)]
pub struct HorizontalShrinker {
    steps: u32,
    index: u32,
}

impl HorizontalShrinker {
    pub fn new(steps: u32) -> Self {
        Self { steps, index: 0 }
    }

    /// Number of values already handed out
    pub fn consumed(&self) -> u32 {
        self.index
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.steps
    }
}

impl Iterator for HorizontalShrinker {
    type Item = Transform;

    fn next(&mut self) -> Option<Transform> {
        if self.is_exhausted() {
            return None;
        }
        self.index += 1;
        // Divide rather than accumulate a per-step fraction so the last value is exactly 0
        let fraction = 1.0 - self.index as f32 / self.steps as f32;
        Some(Transform::horizontal(fraction))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HorizontalShrinker {}

impl FusedIterator for HorizontalShrinker {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_each_fraction_in_order() {
        for steps in 1..=12u32 {
            let fractions: Vec<f32> = HorizontalShrinker::new(steps)
                .map(|t| t.scale_x())
                .collect();
            assert_eq!(fractions.len(), steps as usize);
            for (i, fraction) in fractions.iter().enumerate() {
                let k = (i + 1) as f32;
                let expected = 1.0 - k / steps as f32;
                assert!((fraction - expected).abs() < 1e-6, "steps={steps} k={k}");
            }
            assert_eq!(*fractions.last().unwrap(), 0.0);
        }
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let mut shrinker = HorizontalShrinker::new(2);
        assert!(shrinker.next().is_some());
        assert!(shrinker.next().is_some());
        assert!(shrinker.next().is_none());
        assert!(shrinker.next().is_none());
        assert_eq!(shrinker.consumed(), 2);
    }

    #[test]
    fn test_zero_steps_is_empty() {
        let mut shrinker = HorizontalShrinker::new(0);
        assert!(shrinker.is_exhausted());
        assert_eq!(shrinker.len(), 0);
        assert!(shrinker.next().is_none());
    }

    #[test]
    fn test_only_scales_horizontally() {
        for t in HorizontalShrinker::new(3) {
            assert_eq!(t.scale.1, 1.0);
        }
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let mut shrinker = HorizontalShrinker::new(3);
        shrinker.next();
        assert_eq!(shrinker.len(), 2);
    }
}

use std::time::Duration;

use thiserror::Error;

use crate::widgets::Color;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("shrink fraction must be within 0.0..=1.0, got {0}")]
    ShrinkFraction(f32),
}

/// Settings for a [`CountdownButton`](super::CountdownButton).
///
/// A countdown copies these when it begins, so changing them mid-countdown
/// only affects the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownConfig {
    /// Label shown while idle
    pub text: Option<String>,
    /// Label shown while counting down, falls back to `text`
    pub countdown_text: Option<String>,
    /// Color of the shrinking indicator
    pub countdown_color: Color,
    /// Color behind the indicator
    pub background_color: Color,
    /// Number of countdown steps; 0 completes immediately
    pub duration: u32,
    /// Time budget for one step
    pub step_interval: Duration,
    /// Share of each step spent collapsing the bar; the rest re-expands it
    shrink_fraction: f32,
    /// Whether taps reach the countdown at all
    pub enabled: bool,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            text: None,
            countdown_text: None,
            countdown_color: Color::RED,
            background_color: Color::DARK_GRAY,
            duration: 5,
            step_interval: Duration::from_secs(1),
            shrink_fraction: 0.95,
            enabled: true,
        }
    }
}

impl CountdownConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn countdown_text(mut self, text: impl Into<String>) -> Self {
        self.countdown_text = Some(text.into());
        self
    }

    pub fn countdown_color(mut self, color: Color) -> Self {
        self.countdown_color = color;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn duration(mut self, steps: u32) -> Self {
        self.duration = steps;
        self
    }

    pub fn step_interval(mut self, interval: Duration) -> Self {
        self.step_interval = interval;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the share of each step spent collapsing the bar
    pub fn with_shrink_fraction(mut self, fraction: f32) -> Result<Self, ConfigError> {
        self.set_shrink_fraction(fraction)?;
        Ok(self)
    }

    pub fn set_shrink_fraction(&mut self, fraction: f32) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ConfigError::ShrinkFraction(fraction));
        }
        self.shrink_fraction = fraction;
        Ok(())
    }

    pub fn shrink_fraction(&self) -> f32 {
        self.shrink_fraction
    }

    /// Label to show while counting down
    pub fn active_text(&self) -> Option<&str> {
        self.countdown_text.as_deref().or(self.text.as_deref())
    }

    /// Duration of the collapse phase of one step
    pub fn shrink_duration(&self) -> Duration {
        let nanos = self.step_interval.as_nanos() as f64 * f64::from(self.shrink_fraction);
        Duration::from_nanos(nanos.round() as u64)
    }

    /// Duration of the re-expand phase of one step
    pub fn expand_duration(&self) -> Duration {
        self.step_interval.saturating_sub(self.shrink_duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CountdownConfig::default();
        assert_eq!(config.duration, 5);
        assert_eq!(config.countdown_color, Color::RED);
        assert!(config.enabled);
        assert_eq!(config.shrink_fraction(), 0.95);
        assert_eq!(config.active_text(), None);
    }

    #[test]
    fn test_phase_durations_split_step() {
        let config = CountdownConfig::default();
        let close = |a: Duration, b: Duration| (a.as_secs_f64() - b.as_secs_f64()).abs() < 1e-6;
        assert!(close(config.shrink_duration(), Duration::from_millis(950)));
        assert!(close(config.expand_duration(), Duration::from_millis(50)));
        assert_eq!(
            config.shrink_duration() + config.expand_duration(),
            config.step_interval
        );
    }

    #[test]
    fn test_countdown_text_falls_back_to_text() {
        let config = CountdownConfig::new().text("Done");
        assert_eq!(config.active_text(), Some("Done"));
        let config = config.countdown_text("Oops, I wasn't done!");
        assert_eq!(config.active_text(), Some("Oops, I wasn't done!"));
    }

    #[test]
    fn test_rejects_out_of_range_shrink_fraction() {
        let mut config = CountdownConfig::default();
        assert_eq!(
            config.set_shrink_fraction(1.5),
            Err(ConfigError::ShrinkFraction(1.5))
        );
        assert!(config.set_shrink_fraction(f32::NAN).is_err());
        assert_eq!(config.shrink_fraction(), 0.95);

        let config = CountdownConfig::new().with_shrink_fraction(0.5).unwrap();
        assert_eq!(config.shrink_duration(), Duration::from_millis(500));
    }
}

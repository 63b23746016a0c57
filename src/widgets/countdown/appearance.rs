use std::time::Instant;

use bitflags::bitflags;

use super::CountdownConfig;
use crate::animation::{AnimatedValue, Transaction, Transform};
use crate::widgets::Color;

bitflags! {
    /// Which visible properties changed since the host last looked
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct AppearanceChanges: u8 {
        const TRANSFORM = 0b0001;
        const OPACITY   = 0b0010;
        const COLOR     = 0b0100;
        const LABEL     = 0b1000;
    }
}

/// Snapshot of everything the control shows, in model values
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub label: Option<String>,
    pub background_color: Color,
    pub indicator_color: Color,
    pub indicator_opacity: f32,
    pub indicator_transform: Transform,
}

/// Visible state of a countdown button.
pub(crate) struct Visuals {
    label: Option<String>,
    background_color: Color,
    indicator_color: Color,
    indicator_opacity: f32,
    indicator_transform: AnimatedValue<Transform>,
    changes: AppearanceChanges,
}

impl Visuals {
    pub fn idle(config: &CountdownConfig) -> Self {
        Self {
            label: config.text.clone(),
            background_color: config.background_color,
            indicator_color: config.countdown_color,
            indicator_opacity: 0.0,
            indicator_transform: AnimatedValue::new(Transform::IDENTITY),
            changes: AppearanceChanges::all(),
        }
    }

    /// Snap back to the idle look, cancelling any transform animation
    pub fn show_idle(&mut self, config: &CountdownConfig) {
        self.set_label(config.text.clone());
        self.set_background_color(config.background_color);
        self.set_indicator_color(config.countdown_color);
        self.set_opacity(0.0);
        self.set_transform_immediate(Transform::IDENTITY);
    }

    pub fn show_countdown(&mut self, config: &CountdownConfig) {
        self.set_label(config.active_text().map(str::to_owned));
        self.set_indicator_color(config.countdown_color);
        self.set_opacity(1.0);
    }

    /// Move the indicator to `target` using the transaction's duration and curve
    pub fn animate_transform(&mut self, target: Transform, transaction: &Transaction) {
        self.indicator_transform.animate_to(
            target,
            transaction.transition(),
            transaction.begin_time(),
        );
        self.changes |= AppearanceChanges::TRANSFORM;
    }

    pub fn presented_transform(&self, now: Instant) -> Transform {
        self.indicator_transform.sample(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.indicator_transform.is_animating(now)
    }

    pub fn snapshot(&self) -> Appearance {
        Appearance {
            label: self.label.clone(),
            background_color: self.background_color,
            indicator_color: self.indicator_color,
            indicator_opacity: self.indicator_opacity,
            indicator_transform: *self.indicator_transform.target(),
        }
    }

    pub fn take_changes(&mut self) -> AppearanceChanges {
        std::mem::replace(&mut self.changes, AppearanceChanges::empty())
    }

    fn set_label(&mut self, label: Option<String>) {
        if self.label != label {
            self.label = label;
            self.changes |= AppearanceChanges::LABEL;
        }
    }

    fn set_background_color(&mut self, color: Color) {
        if self.background_color != color {
            self.background_color = color;
            self.changes |= AppearanceChanges::COLOR;
        }
    }

    fn set_indicator_color(&mut self, color: Color) {
        if self.indicator_color != color {
            self.indicator_color = color;
            self.changes |= AppearanceChanges::COLOR;
        }
    }

    fn set_opacity(&mut self, opacity: f32) {
        if self.indicator_opacity != opacity {
            self.indicator_opacity = opacity;
            self.changes |= AppearanceChanges::OPACITY;
        }
    }

    fn set_transform_immediate(&mut self, transform: Transform) {
        self.indicator_transform.set_immediate(transform);
        self.changes |= AppearanceChanges::TRANSFORM;
    }
}

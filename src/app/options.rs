use std::time::Duration;

use ratatui::style::Color;

use crate::field::{Easing, LabelMotion};

use super::theme::Theme;

#[derive(Debug, Clone)]
pub struct FormOptions {
    /// Poll interval while nothing is moving.
    pub tick_rate: Duration,
    /// Poll interval while a label animation is in flight.
    pub frame_interval: Duration,
    pub motion: LabelMotion,
    pub theme: Theme,
    pub confirm_exit: bool,
    pub confirm_invalid_submit: bool,
    pub show_help: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            frame_interval: Duration::from_millis(16),
            motion: LabelMotion::default(),
            theme: Theme::default(),
            confirm_exit: true,
            confirm_invalid_submit: true,
            show_help: true,
        }
    }
}

impl FormOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn with_motion(mut self, motion: LabelMotion) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_label_duration(mut self, duration: Duration) -> Self {
        self.motion = self.motion.with_duration(duration);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.motion = self.motion.with_easing(easing);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.theme.tint = tint;
        self
    }

    pub fn with_placeholder_active_color(mut self, color: Color) -> Self {
        self.theme.appearance.set_active(Some(color));
        self
    }

    pub fn with_placeholder_inactive_color(mut self, color: Color) -> Self {
        self.theme.appearance.set_inactive(Some(color));
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_confirm_invalid_submit(mut self, confirm: bool) -> Self {
        self.confirm_invalid_submit = confirm;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Delay before the next poll, shortened while any label is moving.
    pub(crate) fn poll_timeout(&self, animating: bool) -> Duration {
        if animating {
            self.frame_interval.min(self.tick_rate)
        } else {
            self.tick_rate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_timeout_shortens_while_animating() {
        let options = FormOptions::default();
        assert_eq!(options.poll_timeout(false), Duration::from_millis(250));
        assert_eq!(options.poll_timeout(true), Duration::from_millis(16));
        let slow = options.with_tick_rate(Duration::from_millis(5));
        assert_eq!(slow.poll_timeout(true), Duration::from_millis(5));
    }

    #[test]
    fn color_builders_fill_theme() {
        let options = FormOptions::default()
            .with_tint(Color::Cyan)
            .with_placeholder_inactive_color(Color::DarkGray);
        assert_eq!(options.theme.tint, Color::Cyan);
        assert_eq!(options.theme.appearance.inactive_override(), Some(Color::DarkGray));
        assert_eq!(options.theme.appearance.active_override(), None);
    }
}

use ratatui::style::Color;

/// System blue, used as the tint when the host does not supply one.
pub const DEFAULT_TINT: Color = Color::Rgb(0, 122, 255);

/// 70% white.
pub const DEFAULT_INACTIVE_COLOR: Color = Color::Rgb(179, 179, 179);

/// Host overrides for the floating placeholder colors. `None` means "use the default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceholderAppearance {
    active: Option<Color>,
    inactive: Option<Color>,
}

impl PlaceholderAppearance {
    pub fn new(active: Option<Color>, inactive: Option<Color>) -> Self {
        Self { active, inactive }
    }

    pub fn with_active(mut self, color: Color) -> Self {
        self.active = Some(color);
        self
    }

    pub fn with_inactive(mut self, color: Color) -> Self {
        self.inactive = Some(color);
        self
    }

    pub fn active_override(&self) -> Option<Color> {
        self.active
    }

    pub fn inactive_override(&self) -> Option<Color> {
        self.inactive
    }

    pub fn set_active(&mut self, color: Option<Color>) {
        self.active = color;
    }

    pub fn set_inactive(&mut self, color: Option<Color>) {
        self.inactive = color;
    }

    pub fn active(&self, tint: Color) -> Color {
        self.active.unwrap_or(tint)
    }

    pub fn inactive(&self) -> Color {
        self.inactive.unwrap_or(DEFAULT_INACTIVE_COLOR)
    }

    /// The single color applied to the label for the given focus state.
    pub fn color_for(&self, focused: bool, tint: Color) -> Color {
        if focused {
            self.active(tint)
        } else {
            self.inactive()
        }
    }

    /// Fills unset slots from `fallback`, keeping explicit overrides.
    pub fn or(self, fallback: PlaceholderAppearance) -> Self {
        Self {
            active: self.active.or(fallback.active),
            inactive: self.inactive.or(fallback.inactive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_colors_fall_back_to_tint_and_gray() {
        let appearance = PlaceholderAppearance::default();
        assert_eq!(appearance.color_for(true, Color::Magenta), Color::Magenta);
        assert_eq!(appearance.color_for(false, Color::Magenta), DEFAULT_INACTIVE_COLOR);
    }

    #[test]
    fn overrides_take_precedence() {
        let appearance = PlaceholderAppearance::default()
            .with_active(Color::Green)
            .with_inactive(Color::Red);
        assert_eq!(appearance.color_for(true, DEFAULT_TINT), Color::Green);
        assert_eq!(appearance.color_for(false, DEFAULT_TINT), Color::Red);
    }

    #[test]
    fn merge_keeps_explicit_overrides() {
        let field = PlaceholderAppearance::default().with_active(Color::Green);
        let theme = PlaceholderAppearance::new(Some(Color::Yellow), Some(Color::Gray));
        let merged = field.or(theme);
        assert_eq!(merged.active_override(), Some(Color::Green));
        assert_eq!(merged.inactive_override(), Some(Color::Gray));
    }
}

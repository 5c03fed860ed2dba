use std::{borrow::Cow, time::Instant};

use crossterm::event::KeyEvent;
use ratatui::style::Color;

use crate::domain::{DEFAULT_TINT, PlaceholderAppearance, StyleKind};

use super::{
    format,
    input::{edit_text, paste_text},
    label::{FieldState, FloatingLabel, LabelFrame, LabelLayout, LabelMotion},
    resolver::{self, Formatter, KeyboardHint, Validator},
};

const SECURE_GLYPH: char = '•';

/// Notification produced whenever the text of a field actually changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChanged {
    pub text: String,
    pub valid: bool,
}

/// Single-line text field with a floating placeholder and style-driven behavior.
#[derive(Debug, Clone)]
pub struct FloatingTextField {
    style: StyleKind,
    placeholder: String,
    supplied_placeholder: Option<String>,
    secure: bool,
    keyboard: KeyboardHint,
    formatter: Option<Formatter>,
    validator: Option<Validator>,
    invalid_hint: Option<&'static str>,
    text: String,
    focused: bool,
    tint: Color,
    appearance: PlaceholderAppearance,
    label: FloatingLabel,
}

impl FloatingTextField {
    /// Unstyled field showing `placeholder`.
    pub fn create_with_placeholder(placeholder: impl Into<String>) -> Self {
        let mut field = Self::blank();
        field.supplied_placeholder = Some(placeholder.into());
        field.apply_style_defaults();
        field
    }

    /// Field carrying the placeholder, secure flag, formatter and validator of `style`.
    pub fn create_with_style(style: StyleKind) -> Self {
        let mut field = Self::blank();
        field.style = style;
        field.apply_style_defaults();
        field
    }

    fn blank() -> Self {
        Self {
            style: StyleKind::None,
            placeholder: String::new(),
            supplied_placeholder: None,
            secure: false,
            keyboard: KeyboardHint::Default,
            formatter: None,
            validator: None,
            invalid_hint: None,
            text: String::new(),
            focused: false,
            tint: DEFAULT_TINT,
            appearance: PlaceholderAppearance::default(),
            label: FloatingLabel::default(),
        }
    }

    pub fn with_motion(mut self, motion: LabelMotion) -> Self {
        self.label.set_motion(motion);
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_placeholder_active_color(mut self, color: Color) -> Self {
        self.appearance.set_active(Some(color));
        self
    }

    pub fn with_placeholder_inactive_color(mut self, color: Color) -> Self {
        self.appearance.set_inactive(Some(color));
        self
    }

    fn apply_style_defaults(&mut self) {
        let defaults = resolver::resolve(self.style);
        self.placeholder = defaults
            .placeholder_or(self.supplied_placeholder.as_deref())
            .to_string();
        self.secure = defaults.secure;
        self.keyboard = defaults.keyboard;
        self.formatter = defaults.formatter;
        self.validator = defaults.validator;
        self.invalid_hint = defaults.invalid_hint;
    }

    pub fn style(&self) -> StyleKind {
        self.style
    }

    /// Re-runs the style defaults. Color overrides and the entered text are kept; the new
    /// formatter applies from the next edit.
    pub fn set_style(&mut self, style: StyleKind) {
        self.style = style;
        self.apply_style_defaults();
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Overrides the placeholder. A styled field takes its table placeholder again on the next
    /// style assignment; restyling to [`StyleKind::None`] brings this text back.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        let placeholder = placeholder.into();
        self.supplied_placeholder = Some(placeholder.clone());
        self.placeholder = placeholder;
    }

    pub fn is_secure_entry(&self) -> bool {
        self.secure
    }

    pub fn set_secure_entry(&mut self, secure: bool) {
        self.secure = secure;
    }

    pub fn keyboard_hint(&self) -> KeyboardHint {
        self.keyboard
    }

    pub fn invalid_hint(&self) -> Option<&'static str> {
        self.invalid_hint
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn set_tint(&mut self, tint: Color) {
        self.tint = tint;
    }

    pub fn placeholder_active_color(&self) -> Option<Color> {
        self.appearance.active_override()
    }

    pub fn set_placeholder_active_color(&mut self, color: Option<Color>) {
        self.appearance.set_active(color);
    }

    pub fn placeholder_inactive_color(&self) -> Option<Color> {
        self.appearance.inactive_override()
    }

    pub fn set_placeholder_inactive_color(&mut self, color: Option<Color>) {
        self.appearance.set_inactive(color);
    }

    pub fn appearance(&self) -> PlaceholderAppearance {
        self.appearance
    }

    pub fn set_appearance(&mut self, appearance: PlaceholderAppearance) {
        self.appearance = appearance;
    }

    pub fn motion(&self) -> LabelMotion {
        self.label.motion()
    }

    pub fn set_motion(&mut self, motion: LabelMotion) {
        self.label.set_motion(motion);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Digits of the entered text, the logical value behind a phone mask.
    pub fn digits(&self) -> String {
        format::digits(&self.text)
    }

    /// What the field shows: the formatted text, masked when secure entry is on.
    pub fn display_text(&self) -> Cow<'_, str> {
        if self.secure {
            Cow::Owned(
                std::iter::repeat_n(SECURE_GLYPH, self.text.chars().count()).collect(),
            )
        } else {
            Cow::Borrowed(&self.text)
        }
    }

    pub fn set_text(&mut self, text: impl AsRef<str>, now: Instant) -> Option<ValueChanged> {
        let formatted = self.format(text.as_ref());
        self.replace_text(formatted, now)
    }

    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> Option<ValueChanged> {
        let edited = edit_text(&self.text, key)?;
        self.set_text(edited, now)
    }

    pub fn handle_paste(&mut self, pasted: &str, now: Instant) -> Option<ValueChanged> {
        let edited = paste_text(&self.text, pasted)?;
        self.set_text(edited, now)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns `true` when focus actually changed.
    pub fn focus(&mut self, now: Instant) -> bool {
        self.set_focused(true, now)
    }

    pub fn blur(&mut self, now: Instant) -> bool {
        self.set_focused(false, now)
    }

    fn set_focused(&mut self, focused: bool, now: Instant) -> bool {
        if self.focused == focused {
            return false;
        }
        self.focused = focused;
        self.sync_label(now);
        true
    }

    /// Outcome of the style's validator; styles without one are always valid.
    pub fn is_valid(&self) -> bool {
        self.validator.is_none_or(|validate| validate(&self.text))
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    pub fn field_state(&self) -> FieldState {
        self.label.state()
    }

    pub fn label_layout(&self) -> LabelLayout {
        self.label.layout()
    }

    pub fn label_frame(&self, now: Instant) -> LabelFrame {
        self.label.frame_at(now)
    }

    pub fn label_color(&self) -> Color {
        self.appearance.color_for(self.focused, self.tint)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.label.is_animating(now)
    }

    pub fn settle(&mut self, now: Instant) {
        self.label.settle(now);
    }

    fn format(&self, text: &str) -> String {
        match self.formatter {
            Some(format) => format(text),
            None => text.to_string(),
        }
    }

    fn replace_text(&mut self, text: String, now: Instant) -> Option<ValueChanged> {
        let changed = text != self.text;
        self.text = text;
        self.sync_label(now);
        changed.then(|| ValueChanged {
            text: self.text.clone(),
            valid: self.is_valid(),
        })
    }

    fn sync_label(&mut self, now: Instant) {
        self.label.sync(self.text.is_empty(), self.focused, now);
    }
}

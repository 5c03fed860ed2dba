use crate::domain::StyleKind;

use super::{format, validate};

pub type Formatter = fn(&str) -> String;
pub type Validator = fn(&str) -> bool;

/// Keyboard the host should prefer while the field is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardHint {
    Default,
    Email,
    PhonePad,
}

impl KeyboardHint {
    pub fn label(self) -> Option<&'static str> {
        match self {
            KeyboardHint::Default => None,
            KeyboardHint::Email => Some("abc@"),
            KeyboardHint::PhonePad => Some("123"),
        }
    }
}

/// Immutable bundle of behavior selected by a [`StyleKind`].
#[derive(Debug, Clone, Copy)]
pub struct StyleDefaults {
    /// Empty for [`StyleKind::None`]; the caller supplies its own text.
    pub placeholder: &'static str,
    pub secure: bool,
    pub keyboard: KeyboardHint,
    pub formatter: Option<Formatter>,
    pub validator: Option<Validator>,
    /// Short explanation shown while the validator rejects the text.
    pub invalid_hint: Option<&'static str>,
}

impl StyleDefaults {
    /// Placeholder to apply, preferring the caller's text only when the style has none.
    pub fn placeholder_or<'a>(&self, supplied: Option<&'a str>) -> &'a str {
        if self.placeholder.is_empty() {
            supplied.unwrap_or_default()
        } else {
            self.placeholder
        }
    }
}

static EMAIL: StyleDefaults = StyleDefaults {
    placeholder: "Email",
    secure: false,
    keyboard: KeyboardHint::Email,
    formatter: None,
    validator: Some(validate::is_email),
    invalid_hint: Some("expected name@domain.tld"),
};

static PHONE: StyleDefaults = StyleDefaults {
    placeholder: "Phone",
    secure: false,
    keyboard: KeyboardHint::PhonePad,
    formatter: Some(format::phone_mask),
    validator: Some(validate::is_phone),
    invalid_hint: Some("expected ###-###-####"),
};

static PASSWORD: StyleDefaults = StyleDefaults {
    placeholder: "Password",
    secure: true,
    keyboard: KeyboardHint::Default,
    formatter: None,
    validator: None,
    invalid_hint: None,
};

static NONE: StyleDefaults = StyleDefaults {
    placeholder: "",
    secure: false,
    keyboard: KeyboardHint::Default,
    formatter: None,
    validator: None,
    invalid_hint: None,
};

pub fn resolve(style: StyleKind) -> &'static StyleDefaults {
    match style {
        StyleKind::Email => &EMAIL,
        StyleKind::Phone => &PHONE,
        StyleKind::Password => &PASSWORD,
        StyleKind::None => &NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_style_contract() {
        let rows = [
            (StyleKind::Email, "Email", false, false, true),
            (StyleKind::Phone, "Phone", false, true, true),
            (StyleKind::Password, "Password", true, false, false),
            (StyleKind::None, "", false, false, false),
        ];
        for (style, placeholder, secure, formats, validates) in rows {
            let defaults = resolve(style);
            assert_eq!(defaults.placeholder, placeholder, "{style}");
            assert_eq!(defaults.secure, secure, "{style}");
            assert_eq!(defaults.formatter.is_some(), formats, "{style}");
            assert_eq!(defaults.validator.is_some(), validates, "{style}");
        }
    }

    #[test]
    fn unstyled_placeholder_comes_from_caller() {
        assert_eq!(resolve(StyleKind::None).placeholder_or(Some("Name")), "Name");
        assert_eq!(resolve(StyleKind::None).placeholder_or(None), "");
        assert_eq!(resolve(StyleKind::Phone).placeholder_or(Some("Name")), "Phone");
    }

    #[test]
    fn phone_defaults_wire_mask_and_digit_check() {
        let defaults = resolve(StyleKind::Phone);
        let format = defaults.formatter.unwrap();
        let validate = defaults.validator.unwrap();
        let masked = format("555 123 4567");
        assert_eq!(masked, "555-123-4567");
        assert!(validate(&masked));
    }
}

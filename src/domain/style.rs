use std::{fmt, str::FromStr};

use serde::Serialize;

/// Input kinds with bundled placeholder, formatter, validator and secure-entry defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    Email,
    Phone,
    Password,
    #[default]
    None,
}

impl StyleKind {
    pub const ALL: [StyleKind; 4] = [
        StyleKind::Email,
        StyleKind::Phone,
        StyleKind::Password,
        StyleKind::None,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleKind::Email => "email",
            StyleKind::Phone => "phone",
            StyleKind::Password => "password",
            StyleKind::None => "none",
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleKind {
    type Err = StyleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        StyleKind::ALL
            .into_iter()
            .find(|style| style.name() == normalized)
            .ok_or_else(|| StyleError::Unknown(raw.to_string()))
    }
}

/// Ordinals follow declaration order: email, phone, password, none.
impl TryFrom<i64> for StyleKind {
    type Error = StyleError;

    fn try_from(ordinal: i64) -> Result<Self, Self::Error> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| StyleKind::ALL.get(index).copied())
            .ok_or(StyleError::OutOfRange(ordinal))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    Unknown(String),
    OutOfRange(i64),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::Unknown(raw) => write!(
                f,
                "unknown style '{raw}' (expected one of: email, phone, password, none)"
            ),
            StyleError::OutOfRange(ordinal) => {
                write!(f, "style ordinal {ordinal} is out of range (expected 0..=3)")
            }
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Email".parse::<StyleKind>(), Ok(StyleKind::Email));
        assert_eq!(" phone ".parse::<StyleKind>(), Ok(StyleKind::Phone));
        assert_eq!("PASSWORD".parse::<StyleKind>(), Ok(StyleKind::Password));
        assert_eq!("none".parse::<StyleKind>(), Ok(StyleKind::None));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "fax".parse::<StyleKind>().unwrap_err();
        assert_eq!(err, StyleError::Unknown("fax".to_string()));
        assert!(err.to_string().contains("unknown style 'fax'"));
    }

    #[test]
    fn ordinals_map_in_declaration_order() {
        let mapped: Vec<_> = (0..4)
            .map(|ordinal| StyleKind::try_from(ordinal).unwrap())
            .collect();
        assert_eq!(mapped, StyleKind::ALL.to_vec());
    }

    #[test]
    fn out_of_range_ordinals_fail_fast() {
        assert_eq!(StyleKind::try_from(4), Err(StyleError::OutOfRange(4)));
        assert_eq!(StyleKind::try_from(-1), Err(StyleError::OutOfRange(-1)));
    }

    #[test]
    fn default_style_is_none() {
        assert_eq!(StyleKind::default(), StyleKind::None);
    }
}

use std::{fmt, str::FromStr};

use ratatui::style::Color;
use serde::Deserialize;

use crate::domain::{DEFAULT_TINT, PlaceholderAppearance};

/// Colors applied to every field of a form unless the field overrides them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub tint: Color,
    pub appearance: PlaceholderAppearance,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            tint: DEFAULT_TINT,
            appearance: PlaceholderAppearance::default(),
        }
    }
}

/// Serialized theme, e.g. `{"tint": "#ff8800", "inactiveColor": "gray"}`.
///
/// Colors accept anything `ratatui` parses: names, `#rrggbb`, or indexed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeConfig {
    pub tint: Option<String>,
    pub active_color: Option<String>,
    pub inactive_color: Option<String>,
}

impl ThemeConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(raw).map_err(|err| ThemeError::Parse(err.to_string()))
    }

    pub fn resolve(&self) -> Result<Theme, ThemeError> {
        let tint = parse_color("tint", self.tint.as_deref())?.unwrap_or(DEFAULT_TINT);
        let active = parse_color("activeColor", self.active_color.as_deref())?;
        let inactive = parse_color("inactiveColor", self.inactive_color.as_deref())?;
        Ok(Theme {
            tint,
            appearance: PlaceholderAppearance::new(active, inactive),
        })
    }
}

fn parse_color(key: &'static str, raw: Option<&str>) -> Result<Option<Color>, ThemeError> {
    raw.map(|value| {
        Color::from_str(value.trim()).map_err(|_| ThemeError::Color {
            key,
            value: value.to_string(),
        })
    })
    .transpose()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    Parse(String),
    Color { key: &'static str, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::Parse(message) => write!(f, "invalid theme: {message}"),
            ThemeError::Color { key, value } => {
                write!(f, "invalid color '{value}' for {key}")
            }
        }
    }
}

impl std::error::Error for ThemeError {}

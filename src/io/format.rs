use std::{fmt, str::FromStr};

/// Serialization formats for the form report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    #[cfg(feature = "toml")]
    Toml,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            #[cfg(feature = "yaml")]
            ReportFormat::Yaml => write!(f, "yaml"),
            #[cfg(feature = "toml")]
            ReportFormat::Toml => write!(f, "toml"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            #[cfg(feature = "toml")]
            "toml" => Ok(ReportFormat::Toml),
            other => Err(format!(
                "unsupported format '{other}' (enable the matching cargo feature)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_always_available() {
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert_eq!(ReportFormat::default().to_string(), "json");
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!("xml".parse::<ReportFormat>().is_err());
    }
}

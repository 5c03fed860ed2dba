use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use super::ReportFormat;

/// Controls how the report is serialized once the form closes.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: ReportFormat,
    pub pretty: bool,
}

impl OutputOptions {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(ReportFormat::Json)
    }
}

/// Serialize `value` and write it to stdout.
pub fn emit<T: Serialize>(value: &T, options: &OutputOptions) -> Result<()> {
    let payload = render(value, options)?;
    let mut stdout = io::stdout();
    stdout
        .write_all(payload.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")
}

pub fn render<T: Serialize>(value: &T, options: &OutputOptions) -> Result<String> {
    match options.format {
        ReportFormat::Json => {
            if options.pretty {
                serde_json::to_string_pretty(value).context("failed to serialize JSON")
            } else {
                serde_json::to_string(value).context("failed to serialize JSON")
            }
        }
        #[cfg(feature = "yaml")]
        ReportFormat::Yaml => serde_yaml::to_string(value).context("failed to serialize YAML"),
        #[cfg(feature = "toml")]
        ReportFormat::Toml => {
            if options.pretty {
                toml::to_string_pretty(value).context("failed to serialize TOML")
            } else {
                toml::to_string(value).context("failed to serialize TOML")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::StyleKind, field::FloatingTextField, form::FormState};

    fn report() -> crate::form::FormReport {
        FormState::new(vec![FloatingTextField::create_with_style(StyleKind::Email)])
            .with_title("Contact")
            .report(false)
    }

    #[test]
    fn compact_json_is_single_line() {
        let options = OutputOptions::default().with_pretty(false);
        let payload = render(&report(), &options).unwrap();
        assert_eq!(
            payload,
            r#"{"title":"Contact","submitted":false,"fields":[{"label":"Email","style":"email","text":"","valid":false}]}"#
        );
    }

    #[test]
    fn pretty_json_is_indented() {
        let payload = render(&report(), &OutputOptions::default()).unwrap();
        assert!(payload.contains("\n  \"submitted\": false"));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_uses_array_of_tables() {
        let options = OutputOptions::new(ReportFormat::Toml);
        let payload = render(&report(), &options).unwrap();
        assert!(payload.contains("[[fields]]"));
    }
}

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, eyre};

use floatfield::{
    FieldFormUI, FloatingTextField, FormOptions, LabelMotion, OutputOptions, ReportFormat,
    StyleError, StyleKind, ThemeConfig, emit,
};

const DEFAULT_FIELDS: [&str; 3] = ["email", "phone", "password"];

#[derive(Debug, Parser)]
#[command(
    name = "floatform",
    version,
    about = "Collect styled text fields in the terminal and print what was entered"
)]
struct Cli {
    /// Field spec: STYLE or STYLE:PLACEHOLDER (email, phone, password, none). Repeatable.
    #[arg(short = 'f', long = "field", value_name = "SPEC", action = ArgAction::Append)]
    fields: Vec<String>,

    /// Title shown at the top of the form
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// JSON theme file with optional "tint", "activeColor" and "inactiveColor"
    #[arg(long = "theme", value_name = "PATH")]
    theme: Option<PathBuf>,

    /// Tint used for the active label when no active color is set
    #[arg(long = "tint", value_name = "COLOR")]
    tint: Option<String>,

    /// Label color while a field is focused
    #[arg(long = "active-color", value_name = "COLOR")]
    active_color: Option<String>,

    /// Label color while a field is not focused
    #[arg(long = "inactive-color", value_name = "COLOR")]
    inactive_color: Option<String>,

    /// Floating label animation length in milliseconds (0 disables the animation)
    #[arg(long = "label-ms", value_name = "MS")]
    label_ms: Option<u64>,

    /// Report format: json, yaml or toml
    #[arg(long = "format", value_name = "FORMAT", default_value = "json")]
    format: String,

    /// Emit compact output rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSpec {
    style: StyleKind,
    placeholder: Option<String>,
}

impl FromStr for FieldSpec {
    type Err = StyleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (style, placeholder) = match raw.split_once(':') {
            Some((style, placeholder)) => (style, Some(placeholder.trim())),
            None => (raw, None),
        };
        Ok(Self {
            style: style.parse()?,
            placeholder: placeholder
                .filter(|text| !text.is_empty())
                .map(str::to_string),
        })
    }
}

impl FieldSpec {
    fn build(&self) -> FloatingTextField {
        match (self.style, &self.placeholder) {
            (StyleKind::None, Some(placeholder)) => {
                FloatingTextField::create_with_placeholder(placeholder.clone())
            }
            (style, placeholder) => {
                let mut field = FloatingTextField::create_with_style(style);
                if let Some(placeholder) = placeholder {
                    field.set_placeholder(placeholder.clone());
                }
                field
            }
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut diagnostics = DiagnosticCollector::default();

    let raw_fields: Vec<&str> = if cli.fields.is_empty() {
        DEFAULT_FIELDS.to_vec()
    } else {
        cli.fields.iter().map(String::as_str).collect()
    };
    let specs: Vec<FieldSpec> = raw_fields
        .iter()
        .filter_map(|raw| match raw.parse::<FieldSpec>() {
            Ok(spec) => Some(spec),
            Err(err) => {
                diagnostics.push("field", format!("'{raw}': {err}"));
                None
            }
        })
        .collect();

    let options = build_options(&cli, &mut diagnostics);
    let output = match cli.format.parse::<ReportFormat>() {
        Ok(format) => Some(OutputOptions::new(format).with_pretty(!cli.no_pretty)),
        Err(message) => {
            diagnostics.push("format", message);
            None
        }
    };

    diagnostics.into_result()?;
    let (Some(options), Some(output)) = (options, output) else {
        return Err(eyre!("invalid options"));
    };

    let mut ui = FieldFormUI::new()
        .with_fields(specs.iter().map(FieldSpec::build))
        .with_options(options);
    if let Some(title) = cli.title.as_ref() {
        ui = ui.with_title(title.clone());
    }

    let report = ui.run().map_err(Report::msg)?;
    if !report.submitted {
        return Err(eyre!("form closed without submitting"));
    }
    emit(&report, &output).map_err(Report::msg)?;
    Ok(())
}

fn build_options(cli: &Cli, diagnostics: &mut DiagnosticCollector) -> Option<FormOptions> {
    let mut config = match cli.theme.as_ref() {
        Some(path) => {
            let loaded = fs::read_to_string(path)
                .map_err(|err| format!("failed to read {}: {err}", path.display()))
                .and_then(|raw| ThemeConfig::from_json_str(&raw).map_err(|err| err.to_string()));
            match loaded {
                Ok(config) => config,
                Err(message) => {
                    diagnostics.push("theme", message);
                    return None;
                }
            }
        }
        None => ThemeConfig::default(),
    };
    config.tint = cli.tint.clone().or(config.tint);
    config.active_color = cli.active_color.clone().or(config.active_color);
    config.inactive_color = cli.inactive_color.clone().or(config.inactive_color);

    let theme = match config.resolve() {
        Ok(theme) => theme,
        Err(err) => {
            diagnostics.push("theme", err.to_string());
            return None;
        }
    };

    let mut options = FormOptions::default().with_theme(theme);
    if let Some(ms) = cli.label_ms {
        options = options.with_motion(if ms == 0 {
            LabelMotion::instant()
        } else {
            LabelMotion::default().with_duration(Duration::from_millis(ms))
        });
    }
    Some(options)
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push(&mut self, label: &str, message: impl Into<String>) {
        self.messages.push(format!("{label}: {}", message.into()));
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered invalid options:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_style_with_placeholder() {
        let spec: FieldSpec = "phone:Mobile".parse().unwrap();
        assert_eq!(spec.style, StyleKind::Phone);
        assert_eq!(spec.placeholder.as_deref(), Some("Mobile"));
        let field = spec.build();
        assert_eq!(field.placeholder(), "Mobile");
        assert_eq!(field.style(), StyleKind::Phone);
    }

    #[test]
    fn unstyled_spec_uses_placeholder_factory() {
        let field = "none:Name".parse::<FieldSpec>().unwrap().build();
        assert_eq!(field.style(), StyleKind::None);
        assert_eq!(field.placeholder(), "Name");
    }

    #[test]
    fn empty_placeholder_keeps_style_default() {
        let spec: FieldSpec = "email:".parse().unwrap();
        assert_eq!(spec.placeholder, None);
        assert_eq!(spec.build().placeholder(), "Email");
    }

    #[test]
    fn unknown_style_is_an_error() {
        let err = "fax:Number".parse::<FieldSpec>().unwrap_err();
        assert_eq!(err, StyleError::Unknown("fax".to_string()));
    }

    #[test]
    fn collector_numbers_messages() {
        let mut diagnostics = DiagnosticCollector::default();
        diagnostics.push("field", "bad");
        diagnostics.push("theme", "worse");
        let message = diagnostics.into_result().unwrap_err().to_string();
        assert!(message.contains("1. field: bad"));
        assert!(message.contains("2. theme: worse"));
    }
}

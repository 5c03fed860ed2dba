use anyhow::Result;

use crate::{
    field::FloatingTextField,
    form::{FormReport, FormState},
};

use super::{options::FormOptions, runtime::App};

/// Runs a column of floating-label fields in the terminal and reports what was entered.
#[derive(Debug)]
pub struct FieldFormUI {
    fields: Vec<FloatingTextField>,
    title: Option<String>,
    options: FormOptions,
}

impl FieldFormUI {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            title: None,
            options: FormOptions::default(),
        }
    }

    pub fn with_field(mut self, field: FloatingTextField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FloatingTextField>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: FormOptions) -> Self {
        self.options = options;
        self
    }

    /// The form as it will start, with theme and motion applied.
    pub fn form_state(&self) -> FormState {
        let fields = self
            .fields
            .iter()
            .cloned()
            .map(|field| themed(field, &self.options))
            .collect();
        let state = FormState::new(fields);
        match &self.title {
            Some(title) => state.with_title(title.clone()),
            None => state,
        }
    }

    pub fn run(self) -> Result<FormReport> {
        let form_state = self.form_state();
        let mut app = App::new(form_state, self.options);
        app.run()
    }
}

impl Default for FieldFormUI {
    fn default() -> Self {
        Self::new()
    }
}

/// Field overrides win over the theme; the theme wins over built-in defaults.
fn themed(mut field: FloatingTextField, options: &FormOptions) -> FloatingTextField {
    field.set_motion(options.motion);
    field.set_tint(options.theme.tint);
    field.set_appearance(field.appearance().or(options.theme.appearance));
    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StyleKind;
    use crate::field::LabelMotion;
    use ratatui::style::Color;

    #[test]
    fn theme_fills_only_unset_colors() {
        let options = FormOptions::default()
            .with_tint(Color::Cyan)
            .with_placeholder_active_color(Color::Yellow)
            .with_placeholder_inactive_color(Color::Gray)
            .with_motion(LabelMotion::instant());
        let ui = FieldFormUI::new()
            .with_title("Signup")
            .with_field(
                FloatingTextField::create_with_style(StyleKind::Email)
                    .with_placeholder_active_color(Color::Green),
            )
            .with_field(FloatingTextField::create_with_style(StyleKind::Phone))
            .with_options(options);

        let state = ui.form_state();
        assert_eq!(state.title.as_deref(), Some("Signup"));
        let [email, phone] = state.fields() else {
            panic!("expected two fields");
        };
        assert_eq!(email.placeholder_active_color(), Some(Color::Green));
        assert_eq!(email.placeholder_inactive_color(), Some(Color::Gray));
        assert_eq!(phone.placeholder_active_color(), Some(Color::Yellow));
        assert_eq!(phone.tint(), Color::Cyan);
        assert_eq!(phone.motion(), LabelMotion::instant());
    }
}

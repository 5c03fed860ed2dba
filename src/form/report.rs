use serde::Serialize;

use crate::{domain::StyleKind, field::FloatingTextField};

/// Host read-out of a form: one entry per field in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub submitted: bool,
    pub fields: Vec<FieldReport>,
}

impl FormReport {
    pub fn all_valid(&self) -> bool {
        self.fields.iter().all(|field| field.valid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub label: String,
    pub style: StyleKind,
    pub text: String,
    /// Only present for phone fields, where the displayed text carries a mask.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digits: Option<String>,
    pub valid: bool,
}

impl From<&FloatingTextField> for FieldReport {
    fn from(field: &FloatingTextField) -> Self {
        Self {
            label: field.placeholder().to_string(),
            style: field.style(),
            text: field.text().to_string(),
            digits: (field.style() == StyleKind::Phone).then(|| field.digits()),
            valid: field.is_valid(),
        }
    }
}

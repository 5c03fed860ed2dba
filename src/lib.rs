#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod field;
mod form;
mod io;
mod presentation;

pub use app::{FieldFormUI, FormOptions, Theme, ThemeConfig, ThemeError};
pub use domain::{
    DEFAULT_INACTIVE_COLOR, DEFAULT_TINT, PlaceholderAppearance, StyleError, StyleKind,
};
pub use field::{
    DEFAULT_LABEL_DURATION, Easing, FLOATED_SCALE, FieldState, FloatingLabel,
    FloatingTextField, Formatter, KeyboardHint, LabelFrame, LabelLayout, LabelMotion,
    StyleDefaults, Validator, ValueChanged, compute_target_layout, format, resolve, validate,
};
pub use form::{FieldReport, FormReport, FormState};
pub use io::{OutputOptions, ReportFormat, emit, render};
pub use presentation::{FIELD_HEIGHT, UiContext, draw, render_field};

pub mod prelude {
    pub use super::{FieldFormUI, FloatingTextField, FormOptions, StyleKind};
}

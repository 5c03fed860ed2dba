mod form_ui;
pub(crate) mod input;
mod options;
mod runtime;
mod status;
mod terminal;
mod theme;

pub use form_ui::FieldFormUI;
pub use options::FormOptions;
pub use theme::{Theme, ThemeConfig, ThemeError};

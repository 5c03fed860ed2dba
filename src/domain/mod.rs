mod appearance;
mod style;

pub use appearance::{DEFAULT_INACTIVE_COLOR, DEFAULT_TINT, PlaceholderAppearance};
pub use style::{StyleError, StyleKind};

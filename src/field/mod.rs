mod control;
pub mod format;
mod input;
mod label;
mod resolver;
pub mod validate;

pub use control::{FloatingTextField, ValueChanged};
pub use label::{
    DEFAULT_LABEL_DURATION, Easing, FLOATED_SCALE, FieldState, FloatingLabel, LabelFrame,
    LabelLayout, LabelMotion, compute_target_layout,
};
pub use resolver::{Formatter, KeyboardHint, StyleDefaults, Validator, resolve};

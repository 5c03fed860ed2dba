mod components;
mod field;
mod view;

pub use field::{FIELD_HEIGHT, render_field};
pub use view::{UiContext, draw};

mod report;
mod state;

pub use report::{FieldReport, FormReport};
pub use state::FormState;

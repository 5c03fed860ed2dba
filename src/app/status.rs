#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Press Ctrl+S to submit.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn value_updated(&mut self, valid: bool) {
        self.message = if valid {
            "Value updated".to_string()
        } else {
            "Value updated (not valid yet)".to_string()
        };
    }

    pub fn pending_invalid_submit(&mut self, count: usize) {
        self.message =
            format!("{count} field(s) invalid. Press Ctrl+S again to submit anyway.");
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsubmitted changes. Press Ctrl+Q again to quit.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

use contact_book::cli::View;

/// View that keeps every displayed message; prompts are dropped.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingView {
    pub messages: Vec<String>,
}

#[allow(dead_code)]
impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl View for RecordingView {
    fn display(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn prompt(&mut self, _message: &str) {}
}

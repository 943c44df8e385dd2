//! Output sinks for the assistant.

use std::io::{self, Write};
use tracing::warn;

/// Where the assistant sends user-facing text.
pub trait View {
    /// Show one message, followed by a line break.
    fn display(&mut self, message: &str);

    /// Show an input prompt. Defaults to a regular message.
    fn prompt(&mut self, message: &str) {
        self.display(message);
    }
}

/// A view writing to a terminal or any other `Write` sink.
pub struct ConsoleView<W: Write> {
    out: W,
}

impl ConsoleView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for ConsoleView<W> {
    fn display(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}", message) {
            warn!("Failed to write output: {}", e);
        }
    }

    fn prompt(&mut self, message: &str) {
        // No newline: the user types on the same line
        let result = write!(self.out, "{}", message).and_then(|()| self.out.flush());
        if let Err(e) = result {
            warn!("Failed to write prompt: {}", e);
        }
    }
}

//! Command-line interface for the contact book.
//!
//! Parses user input, dispatches to the address book and renders replies
//! through a [`View`].

pub mod assistant;
pub mod clock;
pub mod handlers;
pub mod parser;
pub mod view;

pub use assistant::{Assistant, Flow, PROMPT};
pub use clock::{Clock, FixedClock, SystemClock};
pub use parser::{parse_input, Command};
pub use view::{ConsoleView, View};

//! The read-eval-print loop.

use super::clock::Clock;
use super::handlers;
use super::parser::{parse_input, Command, HELP_LINES};
use super::view::View;
use crate::error::CommandResult;
use crate::models::AddressBook;
use std::io::{self, BufRead};
use tracing::{debug, info, warn};

pub const PROMPT: &str = "Enter a command: ";

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive assistant owning the address book for one session.
pub struct Assistant<V: View, C: Clock> {
    book: AddressBook,
    view: V,
    clock: C,
}

impl<V: View, C: Clock> Assistant<V, C> {
    pub fn new(book: AddressBook, view: V, clock: C) -> Self {
        Self { book, view, clock }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Hand back the book, typically to save it.
    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Read commands from `input` until `exit`/`close` or end of input.
    ///
    /// Command failures are shown to the user and do not stop the loop;
    /// only reading `input` can fail.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.view.display("Welcome to the assistant bot!");
        let mut lines = input.lines();

        loop {
            self.view.prompt(PROMPT);
            let Some(line) = lines.next() else {
                info!("End of input, leaving");
                self.view.display("Good bye!");
                return Ok(());
            };

            if self.handle_line(&line?) == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Execute one input line and show its reply.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        let (word, args) = parse_input(line);
        let command = match word.parse::<Command>() {
            Ok(command) => command,
            Err(never) => match never {},
        };
        debug!(?command, argc = args.len(), "Dispatching command");

        let reply: CommandResult<String> = match command {
            Command::Exit => {
                self.view.display("Good bye!");
                return Flow::Exit;
            }
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add => handlers::add_contact(&args, &mut self.book),
            Command::Change => handlers::change_contact(&args, &mut self.book),
            Command::Phone => handlers::show_phone(&args, &self.book),
            Command::All => Ok(handlers::show_all(&self.book)),
            Command::AddBirthday => handlers::add_birthday(&args, &mut self.book),
            Command::ShowBirthday => handlers::show_birthday(&args, &self.book),
            Command::Birthdays => handlers::birthdays(&self.book, self.clock.today()),
            Command::Delete => handlers::delete_contact(&args, &mut self.book),
            Command::RemovePhone => handlers::remove_phone(&args, &mut self.book),
            Command::Help => Ok(format!("\nAvailable commands:\n{}", HELP_LINES.join("\n"))),
            Command::Unknown(word) => {
                warn!(command = %word, "Unknown command");
                Ok("Invalid command. Type 'help' to see available commands.".to_string())
            }
        };

        match reply {
            Ok(message) => self.view.display(&message),
            Err(err) => {
                debug!(error = ?err, "Command failed");
                self.view.display(&err.to_string());
            }
        }
        Flow::Continue
    }
}

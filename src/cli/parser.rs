//! Input line parsing and the command vocabulary.

use std::convert::Infallible;
use std::str::FromStr;

/// Split a line into a lowercased command word and its arguments.
///
/// Blank input yields an empty command and no arguments.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().map(str::to_lowercase).unwrap_or_default();
    let args = parts.map(str::to_string).collect();
    (command, args)
}

/// A command word understood by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    RemovePhone,
    Help,
    Exit,
    Unknown(String),
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "delete" => Command::Delete,
            "remove-phone" => Command::RemovePhone,
            "help" => Command::Help,
            "exit" | "close" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        })
    }
}

/// Usage lines shown by `help`.
pub const HELP_LINES: &[&str] = &[
    "add <name> <phone> - Add or update a contact",
    "change <name> <old_phone> <new_phone> - Change a contact's phone",
    "phone <name> - Show phones of a contact",
    "remove-phone <name> <phone> - Remove a phone from a contact",
    "delete <name> - Delete a contact",
    "all - Show all contacts",
    "add-birthday <name> <dd.mm.yyyy> - Add birthday",
    "show-birthday <name> - Show birthday",
    "birthdays - Show upcoming birthdays",
    "help - Show this help message",
    "exit / close - Exit the bot",
];

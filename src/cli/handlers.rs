//! Command handlers.
//!
//! Each handler checks its arguments, calls into the address book and
//! returns the text to show. Errors are rendered by the caller.

use crate::error::{CommandError, CommandResult};
use crate::models::{group_by_greeting_date, AddressBook, Record};
use chrono::NaiveDate;

fn find<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn find_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

/// `add <name> <phone>`: create the contact or append a phone to it.
///
/// A new contact is only stored once its first phone validates.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::InvalidFormat);
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(name.as_str())?;
            record.add_phone(phone)?;
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = args else {
        return Err(CommandError::InvalidFormat);
    };

    find_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::InvalidFormat);
    };

    let record = find(book, name)?;
    Ok(format!("{}: {}", name, record.phones_display()))
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::InvalidFormat);
    };

    find_mut(book, name)?.remove_phone(phone)?;
    Ok("Phone removed.".to_string())
}

/// `delete <name>`. Deleting an unknown name succeeds silently.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::InvalidFormat);
    };

    book.delete(name);
    Ok("Contact deleted.".to_string())
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        "The address book is empty.".to_string()
    } else {
        book.to_string()
    }
}

/// `add-birthday <name> <DD.MM.YYYY>`
///
/// An invalid date does not fail the command; its diagnostic is the reply.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = args else {
        return Err(CommandError::InvalidFormat);
    };

    let record = find_mut(book, name)?;
    Ok(match record.set_birthday(birthday) {
        None => "Birthday added.".to_string(),
        Some(diagnostic) => diagnostic.to_string(),
    })
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::InvalidFormat);
    };

    let record = find(book, name)?;
    Ok(match record.birthday_display() {
        Some(birthday) => format!("{}'s birthday: {}", name, birthday),
        None => format!("{}'s birthday is not set.", name),
    })
}

/// `birthdays`: greeting dates for the coming week, one line per day.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(today)?;
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays in the next 7 days.".to_string());
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    for (date, names) in group_by_greeting_date(&upcoming) {
        lines.push(format!("{}: {}", date.format("%A %d.%m"), names.join(", ")));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book_with_john() -> AddressBook {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1111111111"]), &mut book).unwrap();
        book
    }

    #[test]
    fn test_add_contact_new_then_update() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&args(&["John", "1111111111"]), &mut book).unwrap(),
            "Contact added."
        );
        assert_eq!(
            add_contact(&args(&["John", "2222222222", "ignored"]), &mut book).unwrap(),
            "Contact updated."
        );
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_invalid_phone_stores_nothing() {
        let mut book = AddressBook::new();
        let err = add_contact(&args(&["John", "123"]), &mut book).unwrap_err();
        assert_eq!(err.to_string(), "phone must be 10 digits");
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_contact_requires_phone() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&args(&["John"]), &mut book),
            Err(CommandError::InvalidFormat)
        );
    }

    #[test]
    fn test_change_contact() {
        let mut book = book_with_john();
        assert_eq!(
            change_contact(&args(&["John", "1111111111", "2222222222"]), &mut book).unwrap(),
            "Contact updated."
        );
        assert_eq!(
            change_contact(&args(&["John", "9999999999", "2222222222"]), &mut book),
            Err(CommandError::Book(BookError::PhoneNotFound(
                "9999999999".to_string()
            )))
        );
        assert_eq!(
            change_contact(&args(&["Jane", "1111111111", "2222222222"]), &mut book),
            Err(CommandError::ContactNotFound("Jane".to_string()))
        );
        assert_eq!(
            change_contact(&args(&["John", "2222222222"]), &mut book),
            Err(CommandError::InvalidFormat)
        );
    }

    #[test]
    fn test_show_phone() {
        let mut book = book_with_john();
        add_contact(&args(&["John", "2222222222"]), &mut book).unwrap();
        assert_eq!(
            show_phone(&args(&["John"]), &book).unwrap(),
            "John: 1111111111; 2222222222"
        );
        assert_eq!(show_phone(&[], &book), Err(CommandError::InvalidFormat));
    }

    #[test]
    fn test_remove_phone_and_delete() {
        let mut book = book_with_john();
        assert_eq!(
            remove_phone(&args(&["John", "1111111111"]), &mut book).unwrap(),
            "Phone removed."
        );
        assert!(remove_phone(&args(&["John", "1111111111"]), &mut book).is_err());

        assert_eq!(
            delete_contact(&args(&["Nobody"]), &mut book).unwrap(),
            "Contact deleted."
        );
        assert_eq!(book.len(), 1);
        delete_contact(&args(&["John"]), &mut book).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_show_all() {
        assert_eq!(show_all(&AddressBook::new()), "The address book is empty.");
        assert_eq!(
            show_all(&book_with_john()),
            "Contact name: John, phones: 1111111111"
        );
    }

    #[test]
    fn test_add_and_show_birthday() {
        let mut book = book_with_john();
        assert_eq!(
            show_birthday(&args(&["John"]), &book).unwrap(),
            "John's birthday is not set."
        );
        assert_eq!(
            add_birthday(&args(&["John", "15.06.1990"]), &mut book).unwrap(),
            "Birthday added."
        );
        assert_eq!(
            show_birthday(&args(&["John"]), &book).unwrap(),
            "John's birthday: 15.06.1990"
        );
    }

    #[test]
    fn test_add_birthday_invalid_reports_diagnostic() {
        let mut book = book_with_john();
        add_birthday(&args(&["John", "15.06.1990"]), &mut book).unwrap();

        let reply = add_birthday(&args(&["John", "31.02.1990"]), &mut book).unwrap();
        assert_eq!(reply, "invalid date format, expected DD.MM.YYYY");
        assert_eq!(
            book.find("John").unwrap().birthday_display().as_deref(),
            Some("15.06.1990")
        );
    }

    #[test]
    fn test_birthdays_grouped_by_day() {
        let mut book = AddressBook::new();
        for (name, birthday) in [
            ("Sat", "15.06.1990"),
            ("Wed", "12.06.1990"),
            ("Mon", "17.06.1990"),
            ("Past", "08.06.1990"),
        ] {
            add_contact(&args(&[name, "1111111111"]), &mut book).unwrap();
            add_birthday(&args(&[name, birthday]), &mut book).unwrap();
        }

        // Mon 17.06 is day seven, outside the window; Sat moves onto that Monday.
        assert_eq!(
            birthdays(&book, ymd(2024, 6, 10)).unwrap(),
            "Upcoming birthdays:\nWednesday 12.06: Wed\nMonday 17.06: Sat"
        );
    }

    #[test]
    fn test_birthdays_none() {
        assert_eq!(
            birthdays(&book_with_john(), ymd(2024, 6, 10)).unwrap(),
            "No upcoming birthdays in the next 7 days."
        );
    }
}

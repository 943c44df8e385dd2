//! Upcoming birthday entries and their grouping by greeting date.

use chrono::NaiveDate;

/// A contact whose birthday falls inside the reminder window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Day to send greetings on; weekend birthdays move to the next Monday
    pub greeting_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn new(name: impl Into<String>, greeting_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            greeting_date,
        }
    }
}

/// Group entries by greeting date, earliest date first.
///
/// Names inside a group keep the order they appear in `upcoming`.
pub fn group_by_greeting_date(upcoming: &[UpcomingBirthday]) -> Vec<(NaiveDate, Vec<String>)> {
    let mut groups: Vec<(NaiveDate, Vec<String>)> = Vec::new();

    for entry in upcoming {
        match groups
            .iter_mut()
            .find(|(date, _)| *date == entry.greeting_date)
        {
            Some((_, names)) => names.push(entry.name.clone()),
            None => groups.push((entry.greeting_date, vec![entry.name.clone()])),
        }
    }

    groups.sort_by_key(|(date, _)| *date);
    groups
}

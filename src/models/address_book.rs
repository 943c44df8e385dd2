//! AddressBook: the keyed collection of records and the birthday query.

use super::record::Record;
use super::upcoming::UpcomingBirthday;
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;
use tracing::debug;

/// Length of the reminder window in days, today included.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Records keyed by name, in insertion order.
///
/// A name maps to at most one record. Only the operations below mutate the
/// collection; callers never see the underlying storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record stored under the same name.
    ///
    /// The replacement is whole: phones and birthday of the previous record
    /// are dropped. An overwritten name keeps its position.
    pub fn add_record(&mut self, record: Record) {
        match self.position_of(record.name().as_str()) {
            Some(index) => {
                debug!(name = %record.name(), "Replacing record");
                self.records[index] = record;
            }
            None => {
                debug!(name = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Look up a record for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record named `name`. Absent names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position_of(name)?;
        debug!(name, "Deleting record");
        Some(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Contacts with a birthday in the next seven days, `today` included.
    ///
    /// Each birthday's month and day are placed in `today`'s year, or the
    /// following year once that date has passed. Saturdays and Sundays are
    /// moved to the next Monday. Results follow the book's insertion order.
    ///
    /// # Errors
    ///
    /// `UnrepresentableBirthday` when a 29 February birthday has to be
    /// placed in a non-leap year. The year substitution is naive on purpose
    /// and fails instead of choosing 28 February or 1 March.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> BookResult<Vec<UpcomingBirthday>> {
        let mut upcoming = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let place_in = |year: i32| {
                birthday
                    .in_year(year)
                    .ok_or_else(|| BookError::UnrepresentableBirthday {
                        name: record.name().to_string(),
                        year,
                    })
            };

            let mut next = place_in(today.year())?;
            if next < today {
                next = place_in(today.year() + 1)?;
            }

            let delta = (next - today).num_days();
            if (0..UPCOMING_WINDOW_DAYS).contains(&delta) {
                upcoming.push(UpcomingBirthday::new(
                    record.name().as_str(),
                    greeting_date(next),
                ));
            }
        }

        debug!(%today, count = upcoming.len(), "Computed upcoming birthdays");
        Ok(upcoming)
    }
}

/// Move weekend dates to the following Monday.
pub fn greeting_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl FromIterator<Record> for AddressBook {
    /// Builds a book by upserting each record; later names win.
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for record in &self.records {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
            first = false;
        }
        Ok(())
    }
}

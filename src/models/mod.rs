//! Data models for the contact book.
//!
//! This module contains the contact record, the address book that owns the
//! records, and the upcoming-birthday entries the book computes.

pub mod address_book;
pub mod record;
pub mod upcoming;

pub use address_book::{greeting_date, AddressBook, UPCOMING_WINDOW_DAYS};
pub use record::Record;
pub use upcoming::{group_by_greeting_date, UpcomingBirthday};

//! Data models for the contact directory.
//!
//! This module contains the contact `Record` and the `Directory` that owns
//! all records and answers the upcoming-birthdays query.

pub mod directory;
pub mod record;

pub use directory::{Directory, UpcomingBirthday, BIRTHDAY_WINDOW_DAYS};
pub use record::Record;

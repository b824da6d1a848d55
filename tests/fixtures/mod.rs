//! Sample data shared by the integration tests.

use chrono::NaiveDate;
use contact_assistant::{Directory, Record};

/// Shorthand for a calendar date that is known to be valid.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create a record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).unwrap();
    }
    record
}

/// The two contacts from the usage walkthrough: John and Jane.
#[allow(dead_code)]
pub fn sample_directory() -> Directory {
    let mut directory = Directory::new();
    directory.add_record(sample_record(
        "John",
        &["1234567890", "5555555555"],
        Some("04.08.1990"),
    ));
    directory.add_record(sample_record("Jane", &["9876543210"], Some("31.07.1985")));
    directory
}

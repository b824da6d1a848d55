//! Directory of contact records and the upcoming-birthdays query.

use super::record::Record;
use crate::domain::birthday::BIRTHDAY_FORMAT;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Number of days on either side of today that the birthday query covers.
pub const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// A contact to congratulate and the day to do it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Day of congratulation, already moved off the weekend
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.date.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(BIRTHDAY_FORMAT))
}

/// Name-keyed collection of records.
///
/// Records are kept in insertion order. Adding a record under an existing
/// name replaces the old record in place. A `Vec` with lookup by name gives
/// both orderings without a second index; directories are small.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: Vec<Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                tracing::debug!(name = %record.name(), "Replacing existing record");
                self.records[index] = record;
            }
            None => {
                tracing::debug!(name = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().matches(name))
    }

    /// Look up a record by name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().matches(name))
    }

    /// Remove the record for `name`, returning it if it existed.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position(name)?;
        tracing::debug!(name, "Deleting record");
        Some(self.records.remove(index))
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts to congratulate in the week starting `today`.
    ///
    /// A birthday in `[today, today + 7)` is reported, moved to Monday when it
    /// falls on a weekend. A weekend birthday in `(today - 7, today]` that was
    /// not reported above is also reported on its following Monday. Results
    /// follow directory order, not date order.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let window = Duration::days(BIRTHDAY_WINDOW_DAYS);
        let next_window_end = today + window;
        let prior_window_start = today - window;

        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let this_year = birthday.in_year(today.year())?;

                let date = if today <= this_year && this_year < next_window_end {
                    observed_on_weekday(this_year)
                } else if prior_window_start < this_year
                    && this_year <= today
                    && is_weekend(this_year)
                {
                    observed_on_weekday(this_year)
                } else {
                    return None;
                };

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                })
            })
            .collect();

        tracing::debug!(
            %today,
            found = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().matches(name))
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Move a Saturday or Sunday to the following Monday.
fn observed_on_weekday(date: NaiveDate) -> NaiveDate {
    if is_weekend(date) {
        let from_monday = i64::from(date.weekday().num_days_from_monday());
        date + Duration::days((7 - from_monday) % 7)
    } else {
        date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(name: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        if let Some(birthday) = birthday {
            record.add_birthday(birthday).unwrap();
        }
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut directory = Directory::new();
        directory.add_record(record("John", None));
        assert_eq!(directory.find("John").unwrap().name().as_str(), "John");
        assert!(directory.find("Jane").is_none());
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_add_record_replaces_same_name_in_place() {
        let mut directory = Directory::new();
        let mut first = record("John", None);
        first.add_phone("1234567890").unwrap();
        directory.add_record(first);
        directory.add_record(record("Jane", None));

        let mut second = record("John", None);
        second.add_phone("5555555555").unwrap();
        directory.add_record(second);

        assert_eq!(directory.len(), 2);
        let john = directory.find("John").unwrap();
        assert!(john.find_phone("1234567890").is_none());
        assert!(john.find_phone("5555555555").is_some());

        let names: Vec<&str> = directory.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["John", "Jane"]);
    }

    #[test]
    fn test_find_mut() {
        let mut directory = Directory::new();
        directory.add_record(record("John", None));
        directory
            .find_mut("John")
            .unwrap()
            .add_phone("1234567890")
            .unwrap();
        assert_eq!(directory.find("John").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut directory = Directory::new();
        directory.add_record(record("John", None));
        assert!(directory.delete("John").is_some());
        assert!(directory.find("John").is_none());
        assert!(directory.is_empty());
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut directory = Directory::new();
        directory.add_record(record("John", None));
        assert!(directory.delete("Jane").is_none());
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_observed_on_weekday() {
        // 2024-08-03 is a Saturday, 2024-08-04 a Sunday
        assert_eq!(observed_on_weekday(date(2024, 8, 3)), date(2024, 8, 5));
        assert_eq!(observed_on_weekday(date(2024, 8, 4)), date(2024, 8, 5));
        assert_eq!(observed_on_weekday(date(2024, 8, 5)), date(2024, 8, 5));
        assert_eq!(observed_on_weekday(date(2024, 8, 2)), date(2024, 8, 2));
    }

    #[test]
    fn test_sunday_birthday_moves_to_monday() {
        let mut directory = Directory::new();
        directory.add_record(record("John", Some("04.08.1990")));

        let upcoming = directory.upcoming_birthdays(date(2024, 8, 1));
        assert_eq!(
            upcoming,
            vec![UpcomingBirthday {
                name: "John".to_string(),
                date: date(2024, 8, 5),
            }]
        );
        assert_eq!(upcoming[0].formatted_date(), "05.08.2024");
    }

    #[test]
    fn test_weekday_birthday_is_unshifted() {
        let mut directory = Directory::new();
        directory.add_record(record("Jane", Some("06.08.1985")));

        let upcoming = directory.upcoming_birthdays(date(2024, 8, 1));
        assert_eq!(upcoming[0].date, date(2024, 8, 6));
    }

    #[test]
    fn test_birthday_today_is_included() {
        let mut directory = Directory::new();
        directory.add_record(record("Jane", Some("01.08.1985")));

        let upcoming = directory.upcoming_birthdays(date(2024, 8, 1));
        assert_eq!(upcoming[0].date, date(2024, 8, 1));
    }

    #[test]
    fn test_window_end_is_exclusive() {
        let mut directory = Directory::new();
        directory.add_record(record("Seven", Some("08.08.1990")));
        directory.add_record(record("Eight", Some("09.08.1990")));

        assert!(directory.upcoming_birthdays(date(2024, 8, 1)).is_empty());
    }

    #[test]
    fn test_last_day_of_window_is_included() {
        let mut directory = Directory::new();
        directory.add_record(record("Six", Some("07.08.1990")));

        let upcoming = directory.upcoming_birthdays(date(2024, 8, 1));
        assert_eq!(upcoming[0].date, date(2024, 8, 7));
    }

    #[test]
    fn test_recent_weekend_birthday_is_reported_on_monday() {
        // Today is Monday 2024-08-05; the birthday was Saturday 2024-08-03
        let mut directory = Directory::new();
        directory.add_record(record("Jane", Some("03.08.1985")));

        let upcoming = directory.upcoming_birthdays(date(2024, 8, 5));
        assert_eq!(upcoming[0].date, date(2024, 8, 5));
    }

    #[test]
    fn test_recent_weekday_birthday_is_skipped() {
        // Friday 2024-08-02 has passed and was not on a weekend
        let mut directory = Directory::new();
        directory.add_record(record("Jane", Some("02.08.1985")));

        assert!(directory.upcoming_birthdays(date(2024, 8, 5)).is_empty());
    }

    #[test]
    fn test_weekend_birthday_seven_days_ago_is_skipped() {
        // Saturday 2024-07-27 is exactly seven days before 2024-08-03
        let mut directory = Directory::new();
        directory.add_record(record("Jane", Some("27.07.1985")));

        assert!(directory.upcoming_birthdays(date(2024, 8, 3)).is_empty());
    }

    #[test]
    fn test_leap_day_birthday_observed_on_march_first() {
        // 2023-03-01 is a Wednesday
        let mut directory = Directory::new();
        directory.add_record(record("Leap", Some("29.02.2000")));

        let upcoming = directory.upcoming_birthdays(date(2023, 2, 27));
        assert_eq!(upcoming[0].date, date(2023, 3, 1));
    }

    #[test]
    fn test_results_follow_directory_order() {
        let mut directory = Directory::new();
        directory.add_record(record("Later", Some("06.08.1990")));
        directory.add_record(record("NoBirthday", None));
        directory.add_record(record("Sooner", Some("02.08.1990")));

        let names: Vec<String> = directory
            .upcoming_birthdays(date(2024, 8, 1))
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Later", "Sooner"]);
    }

    #[test]
    fn test_upcoming_birthday_display_and_serialization() {
        let upcoming = UpcomingBirthday {
            name: "John".to_string(),
            date: date(2024, 8, 5),
        };
        assert_eq!(upcoming.to_string(), "John: 05.08.2024");
        assert_eq!(
            serde_json::to_string(&upcoming).unwrap(),
            r#"{"name":"John","date":"05.08.2024"}"#
        );
    }
}

//! Record model representing one contact in the directory.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown when a record has no birthday.
pub const NO_BIRTHDAY: &str = "N/A";

/// A single contact: a name, any number of phones, and an optional birthday.
///
/// Phones keep insertion order and may repeat. Every stored phone and
/// birthday has already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// All phones in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one was set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> ValidationResult<()> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Unknown numbers are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p != phone);
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// `new` is validated before anything changes, so a rejected edit leaves
    /// the record untouched. Returns how many phones were replaced; zero is
    /// not an error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ValidationResult<usize> {
        let replacement = PhoneNumber::new(new)?;
        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|p| *p == old) {
            *phone = replacement.clone();
            replaced += 1;
        }
        Ok(replaced)
    }

    /// First phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Parse and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> ValidationResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Phones joined with `separator`.
    pub fn joined_phones(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// `{name}: {phone}, {phone}`, the reply to a phone lookup in any locale.
    pub fn phone_listing(&self) -> String {
        format!("{}: {}", self.name, self.joined_phones(", "))
    }

    /// The birthday as `DD.MM.YYYY`, or `N/A`.
    pub fn birthday_or_placeholder(&self) -> String {
        self.birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| NO_BIRTHDAY.to_string())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            self.joined_phones("; "),
            self.birthday_or_placeholder()
        )
    }
}

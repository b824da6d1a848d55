//! Interactive assistant around the contact directory.
//!
//! The assistant owns a [`Directory`], turns each line of user input into a
//! [`Command`], runs it, and renders the outcome as text in the configured
//! [`Locale`]. It is the only place where errors become messages; the core
//! never prints.

pub mod commands;
pub mod messages;
pub mod repl;

pub use commands::Command;
pub use messages::Locale;

use crate::error::CommandResult;
use crate::models::{Directory, Record};
use chrono::NaiveDate;

/// Outcome of handling one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print (blank input)
    Silent,
    /// Print the text and keep reading
    Message(String),
    /// Print the text and stop
    Exit(String),
}

/// Command dispatcher holding the directory for one session.
#[derive(Debug, Default)]
pub struct Assistant {
    directory: Directory,
    locale: Locale,
}

impl Assistant {
    /// Create an assistant with an empty directory.
    pub fn new(locale: Locale) -> Self {
        Self {
            directory: Directory::new(),
            locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Handle one line of input using the local calendar date as today.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let today = chrono::Local::now().date_naive();
        self.handle_line_on(line, today)
    }

    /// Handle one line of input as if it were `today`.
    ///
    /// Parse and validation failures are rendered as messages; they never end
    /// the session.
    pub fn handle_line_on(&mut self, line: &str, today: NaiveDate) -> Reply {
        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command, today),
            None => Ok(Reply::Silent),
        });

        result.unwrap_or_else(|e| {
            tracing::warn!("Command rejected: {}", e);
            Reply::Message(self.locale.command_error(&e))
        })
    }

    /// Run a parsed command against the directory.
    pub fn execute(&mut self, command: Command, today: NaiveDate) -> CommandResult<Reply> {
        tracing::info!("Executing command: {:?}", command);
        let locale = self.locale;

        let text = match command {
            Command::Hello => locale.greeting().to_string(),
            Command::Add { name, phone } => self.add_contact(&name, &phone)?.to_string(),
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => match self.directory.find_mut(&name) {
                Some(record) => {
                    let replaced = record.edit_phone(&old_phone, &new_phone)?;
                    tracing::debug!(name = %name, replaced, "Edited phone");
                    locale.phone_updated().to_string()
                }
                None => locale.contact_not_found().to_string(),
            },
            Command::Phone { name } => match self.directory.find(&name) {
                Some(record) => record.phone_listing(),
                None => locale.contact_not_found().to_string(),
            },
            Command::All => {
                if self.directory.is_empty() {
                    locale.no_contacts().to_string()
                } else {
                    self.directory
                        .records()
                        .map(|record| locale.record_line(record))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::AddBirthday { name, birthday } => match self.directory.find_mut(&name) {
                Some(record) => {
                    record.add_birthday(&birthday)?;
                    locale.birthday_added().to_string()
                }
                None => locale.contact_not_found().to_string(),
            },
            Command::ShowBirthday { name } => match self.directory.find(&name) {
                Some(record) => match record.birthday() {
                    Some(birthday) => locale.birthday_of(&name, &birthday.to_string()),
                    None => locale.birthday_not_set().to_string(),
                },
                None => locale.contact_not_found().to_string(),
            },
            Command::Birthdays => {
                let upcoming = self.directory.upcoming_birthdays(today);
                if upcoming.is_empty() {
                    locale.no_upcoming_birthdays().to_string()
                } else {
                    let lines: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
                    format!("{}\n{}", locale.upcoming_birthdays_header(), lines.join("\n"))
                }
            }
            Command::Exit => return Ok(Reply::Exit(locale.farewell().to_string())),
            Command::Unknown { input } => {
                tracing::debug!(input = %input, "Unknown command");
                locale.invalid_command().to_string()
            }
        };

        Ok(Reply::Message(text))
    }

    /// Append `phone` to `name`, creating the contact if needed.
    ///
    /// The phone is validated before a new record is inserted, so a rejected
    /// number never leaves an empty contact behind.
    fn add_contact(&mut self, name: &str, phone: &str) -> CommandResult<&'static str> {
        if let Some(record) = self.directory.find_mut(name) {
            record.add_phone(phone)?;
            return Ok(self.locale.contact_updated());
        }

        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        self.directory.add_record(record);
        Ok(self.locale.contact_added())
    }
}

//! Contact Assistant - an interactive command-line contact manager.
//!
//! This library stores contacts with validated phone numbers and birthdays,
//! and reports whose birthday should be celebrated in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact `Record` and the `Directory` that owns records
//! - **assistant**: Command parsing, localized replies, and the interactive loop
//! - **error**: Error types for the command layer and configuration
//! - **config**: Configuration management from environment variables

pub mod assistant;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use assistant::{Assistant, Command, Locale, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::{Directory, Record, UpcomingBirthday};

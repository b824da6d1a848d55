//! Error types for the contact assistant.
//!
//! Domain validation errors live in [`crate::domain::errors`]; this module
//! defines the errors raised around the core by the command layer and the
//! configuration loader.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing an assistant command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command line is missing required arguments
    #[error("Not enough arguments for '{command}'. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// A name, phone, or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

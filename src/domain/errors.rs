//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// The offending input is kept on the variant for logging; the display text
/// only describes the expected format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    #[error("Phone number must be 10 digits")]
    InvalidPhone(String),

    /// The provided birthday is not a real date in DD.MM.YYYY form.
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty");
        assert_eq!(
            ValidationError::InvalidPhone("123".to_string()).to_string(),
            "Phone number must be 10 digits"
        );
        assert_eq!(
            ValidationError::InvalidBirthday("1990-08-04".to_string()).to_string(),
            "Invalid date format. Use DD.MM.YYYY"
        );
    }
}

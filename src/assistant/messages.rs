//! Localized reply text.
//!
//! Every string the assistant prints comes from here, in English or
//! Ukrainian.

use crate::domain::ValidationError;
use crate::error::CommandError;
use crate::models::Record;
use std::fmt;
use std::str::FromStr;

/// Display language of the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Uk,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "uk" | "ua" => Ok(Locale::Uk),
            other => Err(format!("unknown locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Uk => write!(f, "uk"),
        }
    }
}

impl Locale {
    pub fn welcome(self) -> &'static str {
        match self {
            Locale::En => "Welcome to the assistant bot!",
            Locale::Uk => "Ласкаво просимо до асистента!",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Locale::En => "Enter a command: ",
            Locale::Uk => "Введіть команду: ",
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            Locale::En => "How can I help you?",
            Locale::Uk => "Чим можу допомогти?",
        }
    }

    pub fn farewell(self) -> &'static str {
        match self {
            Locale::En => "Good bye!",
            Locale::Uk => "До побачення!",
        }
    }

    pub fn invalid_command(self) -> &'static str {
        match self {
            Locale::En => "Invalid command.",
            Locale::Uk => "Неправильна команда.",
        }
    }

    pub fn contact_added(self) -> &'static str {
        match self {
            Locale::En => "Contact added.",
            Locale::Uk => "Контакт додано.",
        }
    }

    pub fn contact_updated(self) -> &'static str {
        match self {
            Locale::En => "Contact updated.",
            Locale::Uk => "Контакт оновлено.",
        }
    }

    pub fn contact_not_found(self) -> &'static str {
        match self {
            Locale::En => "Contact not found.",
            Locale::Uk => "Контакт не знайдено.",
        }
    }

    pub fn phone_updated(self) -> &'static str {
        match self {
            Locale::En => "Phone number updated.",
            Locale::Uk => "Номер телефону оновлено.",
        }
    }

    pub fn birthday_added(self) -> &'static str {
        match self {
            Locale::En => "Birthday added.",
            Locale::Uk => "День народження додано.",
        }
    }

    pub fn birthday_not_set(self) -> &'static str {
        match self {
            Locale::En => "Birthday not set.",
            Locale::Uk => "День народження не встановлено.",
        }
    }

    pub fn no_contacts(self) -> &'static str {
        match self {
            Locale::En => "No contacts saved.",
            Locale::Uk => "Контактів не збережено.",
        }
    }

    pub fn no_upcoming_birthdays(self) -> &'static str {
        match self {
            Locale::En => "No birthdays next week.",
            Locale::Uk => "Немає днів народжень на наступному тижні.",
        }
    }

    pub fn upcoming_birthdays_header(self) -> &'static str {
        match self {
            Locale::En => "Here are the birthdays for the next week:",
            Locale::Uk => "Ось список днів народження на наступний тиждень:",
        }
    }

    /// Reply for `show-birthday` when a birthday is set.
    pub fn birthday_of(self, name: &str, birthday: &str) -> String {
        match self {
            Locale::En => format!("{}'s birthday: {}", name, birthday),
            Locale::Uk => format!("День народження {} - {}", name, birthday),
        }
    }

    /// One line of the `all` listing.
    pub fn record_line(self, record: &Record) -> String {
        match self {
            Locale::En => record.to_string(),
            Locale::Uk => format!(
                "Ім'я контакту: {}, телефони: {}, день народження: {}",
                record.name(),
                record.joined_phones("; "),
                record.birthday_or_placeholder()
            ),
        }
    }

    pub fn validation_error(self, error: &ValidationError) -> String {
        match self {
            Locale::En => error.to_string(),
            Locale::Uk => match error {
                ValidationError::EmptyName => "Ім'я не може бути порожнім".to_string(),
                ValidationError::InvalidPhone(_) => {
                    "Номер телефону має складатися з 10 цифр".to_string()
                }
                ValidationError::InvalidBirthday(_) => {
                    "Неправильний формат дати. Використовуйте DD.MM.YYYY".to_string()
                }
            },
        }
    }

    /// Render any command failure as user-facing text.
    pub fn command_error(self, error: &CommandError) -> String {
        match (self, error) {
            (_, CommandError::Validation(inner)) => self.validation_error(inner),
            (Locale::En, CommandError::MissingArguments { .. }) => error.to_string(),
            (Locale::Uk, CommandError::MissingArguments { command, usage }) => format!(
                "Недостатньо аргументів для '{}'. Використання: {}",
                command, usage
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("UK".parse::<Locale>(), Ok(Locale::Uk));
        assert_eq!("ua".parse::<Locale>(), Ok(Locale::Uk));
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_display_round_trips() {
        for locale in [Locale::En, Locale::Uk] {
            assert_eq!(locale.to_string().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn test_record_line_uk() {
        let mut record = Record::new("Іван").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(
            Locale::Uk.record_line(&record),
            "Ім'я контакту: Іван, телефони: 1234567890, день народження: N/A"
        );
    }

    #[test]
    fn test_validation_error_uk() {
        let err = ValidationError::InvalidPhone("1".to_string());
        assert_eq!(
            Locale::Uk.validation_error(&err),
            "Номер телефону має складатися з 10 цифр"
        );
        assert_eq!(Locale::En.validation_error(&err), "Phone number must be 10 digits");
    }

    #[test]
    fn test_missing_arguments_uk() {
        let err = CommandError::MissingArguments {
            command: "phone",
            usage: "phone <name>",
        };
        assert_eq!(
            Locale::Uk.command_error(&err),
            "Недостатньо аргументів для 'phone'. Використання: phone <name>"
        );
    }
}

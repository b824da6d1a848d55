//! Command parsing for the assistant.
//!
//! A line is split on whitespace; the first token selects the command and
//! the rest are its arguments. Arguments beyond the ones a command uses are
//! ignored.

use crate::error::{CommandError, CommandResult};

/// A parsed assistant command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    All,
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays,
    Exit,
    Unknown {
        input: String,
    },
}

/// Usage of every command that takes arguments.
pub const USAGE: &[(&str, &str)] = &[
    ("add", "add <name> <phone>"),
    ("change", "change <name> <old phone> <new phone>"),
    ("phone", "phone <name>"),
    ("add-birthday", "add-birthday <name> <DD.MM.YYYY>"),
    ("show-birthday", "show-birthday <name>"),
];

impl Command {
    /// Parse one line of input.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::MissingArguments` when a known command is given
    /// fewer arguments than it needs.
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        let mut tokens = line.split_whitespace();
        let Some(token) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match token {
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] = take_args::<2>("add", &args)?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, old_phone, new_phone] = take_args::<3>("change", &args)?;
                Command::Change {
                    name,
                    old_phone,
                    new_phone,
                }
            }
            "phone" => {
                let [name] = take_args::<1>("phone", &args)?;
                Command::Phone { name }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, birthday] = take_args::<2>("add-birthday", &args)?;
                Command::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = take_args::<1>("show-birthday", &args)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            _ => Command::Unknown {
                input: token.to_string(),
            },
        };

        Ok(Some(command))
    }
}

/// Usage line for a command token, empty for commands without arguments.
pub fn usage_of(command: &str) -> &'static str {
    USAGE
        .iter()
        .find(|(token, _)| *token == command)
        .map(|(_, usage)| *usage)
        .unwrap_or("")
}

fn take_args<const N: usize>(command: &'static str, args: &[&str]) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArguments {
            command,
            usage: usage_of(command),
        });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

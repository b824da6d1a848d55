//! Read-eval-print loop using rustyline.

use super::{Assistant, Reply};
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Read commands from the terminal until the user exits.
///
/// Ctrl-C and Ctrl-D end the session the same way `exit` does.
pub fn run(mut assistant: Assistant) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let locale = assistant.locale();

    println!("{}", locale.welcome());

    loop {
        match editor.readline(locale.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = editor.add_history_entry(trimmed);
                }

                match assistant.handle_line(&line) {
                    Reply::Silent => {}
                    Reply::Message(text) => println!("{}", text),
                    Reply::Exit(text) => {
                        println!("{}", text);
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                tracing::info!("Input closed, ending session");
                println!("{}", locale.farewell());
                break;
            }
            Err(e) => {
                tracing::error!("Failed to read input: {:?}", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}

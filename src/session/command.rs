//! Text commands.

use crate::session::error::SessionError;

/// One line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `level <name-or-label>`
    Level(String),
    /// `start <attempts>`
    Start(u32),
    /// A bare integer.
    Guess(i64),
    /// Back to level selection.
    Restart,
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse a line of input.
    ///
    /// Words that are neither a command nor an integer come back as
    /// [`SessionError::UnknownCommand`]; the session decides whether that
    /// means a bad guess.
    ///
    /// ```rust
    /// use magic_number::session::Command;
    ///
    /// assert_eq!(Command::parse("42").unwrap(), Command::Guess(42));
    /// assert_eq!(
    ///     Command::parse("level Fácil (1-10)").unwrap(),
    ///     Command::Level("Fácil (1-10)".to_string())
    /// );
    /// assert_eq!(Command::parse("start 3").unwrap(), Command::Start(3));
    /// ```
    pub fn parse(line: &str) -> Result<Command, SessionError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(SessionError::EmptyInput);
        }

        if let Ok(guess) = line.parse::<i64>() {
            return Ok(Command::Guess(guess));
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "level" | "nivel" | "nível" => {
                if rest.is_empty() {
                    return Err(SessionError::MissingArgument { command: "level" });
                }
                Ok(Command::Level(rest.to_string()))
            }
            "start" => {
                if rest.is_empty() {
                    return Err(SessionError::MissingArgument { command: "start" });
                }
                rest.parse::<u32>()
                    .map(Command::Start)
                    .map_err(|_| SessionError::InvalidAttempts(rest.to_string()))
            }
            "restart" | "again" => Ok(Command::Restart),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(SessionError::UnknownCommand(line.to_string())),
        }
    }
}

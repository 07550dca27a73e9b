//! Module `commands`
//!
//! Parses the line commands typed into the terminal form and defines the
//! result type the handlers return.

/// A command typed by the user.
///
/// Commands that take an argument store the rest of the line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Data(String),   // Replace the comma-separated input
    Select(String), // Replace the selection with the listed options
    Toggle(String), // Flip one option
    Options,
    Submit,
    Show,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Keyword of the command, without its argument.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Data(_) => "DATA",
            Command::Select(_) => "SELECT",
            Command::Toggle(_) => "TOGGLE",
            Command::Options => "OPTIONS",
            Command::Submit => "SUBMIT",
            Command::Show => "SHOW",
            Command::Clear => "CLEAR",
            Command::Help => "HELP",
            Command::Quit => "QUIT",
            Command::Unknown(_) => "UNKNOWN",
        }
    }
}

/// Outcome status of a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Quit,
}

/// Status plus the text to print back to the user.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            status: CommandStatus::Failure(reason.clone()),
            message: Some(reason),
        }
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  data <a,1,...>        set the comma-separated input
  select <name>[,...]   choose the fields to display (alphabets, numbers, highestAlphabet)
  toggle <name>         flip one field
  options               list the fields and their state
  submit                send the input
  show                  print the form and the last filtered response
  clear                 reset the form
  help                  print this help
  quit                  leave";

/// Parses one raw line into a [`Command`].
///
/// The keyword is case-insensitive; everything after it is the argument,
/// untrimmed inside so `data  a , 1` keeps its spacing for validation.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim_end_matches(['\r', '\n']).trim_start();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("");

    match cmd.as_str() {
        "DATA" | "D" => Command::Data(arg.to_string()),
        "SELECT" | "SEL" => Command::Select(arg.trim().to_string()),
        "TOGGLE" | "T" if !arg.trim().is_empty() => Command::Toggle(arg.trim().to_string()),
        "OPTIONS" => Command::Options,
        "SUBMIT" | "S" => Command::Submit,
        "SHOW" => Command::Show,
        "CLEAR" => Command::Clear,
        "HELP" | "?" => Command::Help,
        "QUIT" | "Q" | "EXIT" => Command::Quit,
        _ => Command::Unknown(trimmed.trim_end().to_string()),
    }
}

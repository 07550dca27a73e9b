//! Command handlers for the terminal form.
//!
//! Each handler turns one parsed command into form events and returns the
//! text to print.

use log::info;

use crate::api::SubmitTransport;
use crate::form::{FormEvent, submit};
use crate::options::{DisplayOption, OptionSet};
use crate::terminal::commands::{Command, CommandResult, CommandStatus, HELP_TEXT};
use crate::terminal::render::{render_filtered, render_form, render_options};
use crate::terminal::session::Session;
use crate::validation::invalid_tokens;

/// Dispatches a parsed command to its handler.
pub async fn handle_command<T>(session: &mut Session, command: &Command, transport: &T) -> CommandResult
where
    T: SubmitTransport,
{
    match command {
        Command::Data(raw) => handle_cmd_data(session, raw),
        Command::Select(names) => handle_cmd_select(session, names),
        Command::Toggle(name) => handle_cmd_toggle(session, name),
        Command::Options => handle_cmd_options(session),
        Command::Submit => handle_cmd_submit(session, transport).await,
        Command::Show => CommandResult::success(render_form(session.state(), session.selector())),
        Command::Clear => {
            session.reset();
            CommandResult::success("Form cleared.")
        }
        Command::Help => CommandResult::success(HELP_TEXT),
        Command::Quit => CommandResult {
            status: CommandStatus::Quit,
            message: Some("Goodbye.".into()),
        },
        Command::Unknown(line) => {
            CommandResult::failure(format!("Unknown command: {} (type 'help')", line))
        }
    }
}

/// Handles DATA: replaces the input and reports validity.
fn handle_cmd_data(session: &mut Session, raw: &str) -> CommandResult {
    session.apply(FormEvent::InputChanged(raw.to_string()));

    let state = session.state();
    match state.input_hint() {
        Some(hint) => {
            let offending = invalid_tokens(state.raw_input());
            CommandResult::failure(format!("{} Offending: {:?}", hint, offending))
        }
        None if state.is_valid() => {
            CommandResult::success(format!("Input accepted.\n{}", render_options(session.selector())))
        }
        None => CommandResult::success("Input cleared."),
    }
}

fn parse_options(names: &str) -> Result<OptionSet, String> {
    names
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<DisplayOption>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()
        .map(OptionSet::from_options)
}

/// Handles SELECT: replaces the whole selection; no names clears it.
fn handle_cmd_select(session: &mut Session, names: &str) -> CommandResult {
    if !session.state().options_visible() {
        return CommandResult::failure("Enter valid data before selecting options.");
    }

    match parse_options(names) {
        Ok(options) => {
            session.selector_mut().replace(options);
            session.sync_options();
            CommandResult::success(render_options(session.selector()))
        }
        Err(e) => CommandResult::failure(e),
    }
}

/// Handles TOGGLE: flips one checkbox.
fn handle_cmd_toggle(session: &mut Session, name: &str) -> CommandResult {
    if !session.state().options_visible() {
        return CommandResult::failure("Enter valid data before selecting options.");
    }

    match name.parse::<DisplayOption>() {
        Ok(option) => {
            let checked = session.selector_mut().toggle(option);
            session.sync_options();
            info!("Option {} set to {}", option, checked);
            CommandResult::success(render_options(session.selector()))
        }
        Err(e) => CommandResult::failure(e.to_string()),
    }
}

fn handle_cmd_options(session: &Session) -> CommandResult {
    if session.state().options_visible() {
        CommandResult::success(render_options(session.selector()))
    } else {
        CommandResult::failure("Enter valid data before selecting options.")
    }
}

/// Handles SUBMIT: runs the submission flow and prints its outcome.
///
/// The terminal loop awaits each submission before reading the next line, so
/// it never reaches the in-flight branch itself. The branch covers sessions
/// driven through [`Session::apply`] by other front ends that dispatch
/// `SubmitStarted` before their request settles.
async fn handle_cmd_submit<T>(session: &mut Session, transport: &T) -> CommandResult
where
    T: SubmitTransport,
{
    let next = submit(session.state(), transport).await;
    session.replace_state(next);

    let state = session.state();
    if let Some(error) = state.error() {
        return CommandResult::failure(error.to_string());
    }

    match state.response() {
        Some(response) => CommandResult::success(render_filtered(response)),
        None => CommandResult::failure("A submission is already in progress."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiResponse;
    use crate::error::ApiError;
    use std::cell::Cell;

    struct CountingTransport {
        calls: Cell<usize>,
    }

    impl SubmitTransport for CountingTransport {
        async fn submit(&self, _data: &[String]) -> Result<ApiResponse, ApiError> {
            self.calls.set(self.calls.get() + 1);
            Ok(ApiResponse {
                is_success: true.into(),
                alphabets: vec!["M".to_string()].into(),
                ..ApiResponse::default()
            })
        }
    }

    fn transport() -> CountingTransport {
        CountingTransport { calls: Cell::new(0) }
    }

    #[tokio::test]
    async fn options_are_gated_on_valid_input() {
        let mut session = Session::default();
        let t = transport();

        let result = handle_command(&mut session, &Command::Toggle("numbers".into()), &t).await;
        assert!(matches!(result.status, CommandStatus::Failure(_)));

        handle_command(&mut session, &Command::Data("M,1".into()), &t).await;
        let result = handle_command(&mut session, &Command::Toggle("numbers".into()), &t).await;
        assert_eq!(result.status, CommandStatus::Success);
        assert!(session.state().options().numbers());
    }

    #[tokio::test]
    async fn invalid_data_reports_offending_tokens() {
        let mut session = Session::default();
        let result = handle_command(&mut session, &Command::Data("A,bc".into()), &transport()).await;

        let message = result.message.unwrap();
        assert!(message.starts_with("Data must be valid: single alphabets or numbers."));
        assert!(message.contains("\"bc\""));
    }

    #[tokio::test]
    async fn select_rejects_unknown_names() {
        let mut session = Session::default();
        let t = transport();
        handle_command(&mut session, &Command::Data("A".into()), &t).await;

        let result = handle_command(&mut session, &Command::Select("numbers,vowels".into()), &t).await;
        assert_eq!(
            result.status,
            CommandStatus::Failure("Unknown option: vowels".into())
        );
        assert!(!session.state().options().any_selected());
    }

    #[tokio::test]
    async fn submit_prints_filtered_response() {
        let mut session = Session::default();
        let t = transport();
        handle_command(&mut session, &Command::Data("M".into()), &t).await;
        handle_command(&mut session, &Command::Select("alphabets".into()), &t).await;

        let result = handle_command(&mut session, &Command::Submit, &t).await;
        assert_eq!(result.status, CommandStatus::Success);
        assert!(result.message.unwrap().contains("Alphabets: ["));
        assert_eq!(t.calls.get(), 1);
    }

    #[tokio::test]
    async fn submit_without_selection_makes_no_call() {
        let mut session = Session::default();
        let t = transport();
        handle_command(&mut session, &Command::Data("M".into()), &t).await;

        let result = handle_command(&mut session, &Command::Submit, &t).await;
        assert_eq!(
            result.status,
            CommandStatus::Failure("Select at least one option.".into())
        );
        assert_eq!(t.calls.get(), 0);
    }

    #[tokio::test]
    async fn submit_while_in_flight_is_refused() {
        let mut session = Session::default();
        let t = transport();
        handle_command(&mut session, &Command::Data("M".into()), &t).await;
        handle_command(&mut session, &Command::Select("alphabets".into()), &t).await;
        session.apply(FormEvent::SubmitStarted);

        let result = handle_command(&mut session, &Command::Submit, &t).await;
        assert_eq!(
            result.status,
            CommandStatus::Failure("A submission is already in progress.".into())
        );
        assert!(session.state().is_submitting());
        assert_eq!(t.calls.get(), 0);
    }
}

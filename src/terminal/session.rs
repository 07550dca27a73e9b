//! Terminal session
//!
//! Owns the form state and the option checkboxes for one interactive session
//! and runs the read-dispatch-print loop.

use log::{debug, error, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::api::SubmitTransport;
use crate::form::{FormEvent, FormState, reduce};
use crate::options::{CheckboxSelector, OptionSelector};
use crate::terminal::commands::{CommandStatus, parse_command};
use crate::terminal::handlers::handle_command;

const GREETING: &str = "API Form (type 'help' for commands)\n";
const PROMPT: &[u8] = b"> ";

/// State of one interactive form session.
#[derive(Debug, Default)]
pub struct Session {
    state: FormState,
    selector: CheckboxSelector,
}

impl Session {
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn selector(&self) -> &CheckboxSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut CheckboxSelector {
        &mut self.selector
    }

    /// Applies one event to the form state.
    pub fn apply(&mut self, event: FormEvent) {
        self.state = reduce(&self.state, event);
    }

    pub fn replace_state(&mut self, state: FormState) {
        self.state = state;
    }

    /// Copies the checkbox selection into the form state.
    pub fn sync_options(&mut self) {
        let chosen = self.selector.chosen();
        self.apply(FormEvent::OptionsReplaced(chosen));
    }

    /// Clears the input, the selection and the last outcome.
    pub fn reset(&mut self) {
        self.apply(FormEvent::Reset);
        self.selector = CheckboxSelector::default();
    }
}

/// Runs the session until QUIT or end of input.
///
/// Lines longer than `max_input_length` are rejected without being parsed.
/// Lines that are not valid UTF-8 are rejected and the session goes on; only
/// read and write failures end it with an error.
pub async fn run_session<R, W, T>(
    mut reader: R,
    mut writer: W,
    transport: &T,
    max_input_length: usize,
) -> Result<Session, std::io::Error>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    T: SubmitTransport,
{
    let mut session = Session::default();
    let mut buf: Vec<u8> = Vec::new();

    writer.write_all(GREETING.as_bytes()).await?;

    loop {
        writer.write_all(PROMPT).await?;
        writer.flush().await?;

        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => {
                info!("End of input, closing session");
                break;
            }
            Ok(_) => {
                if buf.len() > max_input_length {
                    writer.write_all(b"Input too long\n").await?;
                    continue;
                }

                let line = match std::str::from_utf8(&buf) {
                    Ok(line) => line,
                    Err(e) => {
                        warn!("Rejected input line: {}", e);
                        writer.write_all(b"Input is not valid UTF-8\n").await?;
                        continue;
                    }
                };

                let command = parse_command(line);
                info!("Received command: {}", command.name());
                debug!("Command detail: {:?}", command);

                let result = handle_command(&mut session, &command, transport).await;

                if let Some(msg) = result.message {
                    writer.write_all(msg.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                }

                if result.status == CommandStatus::Quit {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read from input: {}", e);
                return Err(e);
            }
        }
    }

    writer.flush().await?;
    Ok(session)
}

//! Terminal presentation
//!
//! Line-oriented front end for the form: command parsing, handlers,
//! rendering and the session loop.

pub mod commands;
pub mod handlers;
pub mod render;
pub mod session;

pub use commands::{Command, CommandResult, CommandStatus, parse_command};
pub use handlers::handle_command;
pub use session::{Session, run_session};

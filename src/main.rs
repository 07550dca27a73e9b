//! api-form - Entry Point
//!
//! Terminal form that validates a comma-separated token list, submits it to
//! the configured API and shows the selected fields of the response.

use log::info;
use tokio::io::{BufReader, stdin, stdout};

use api_form::config::FormConfig;
use api_form::error::AppError;
use api_form::error::handlers::{error_to_exit_code, handle_error};
use api_form::terminal::run_session;
use api_form::utils::logging::setup_logging;
use api_form::ApiClient;

async fn run() -> Result<(), AppError> {
    let config = FormConfig::load()?;
    let client = ApiClient::new(&config)?;

    info!(
        "Launching API form against {} (timeout {}s)",
        client.endpoint(),
        config.request_timeout_secs
    );

    run_session(
        BufReader::new(stdin()),
        stdout(),
        &client,
        config.max_input_length,
    )
    .await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    setup_logging();

    if let Err(e) = run().await {
        handle_error(&e);
        std::process::exit(error_to_exit_code(&e));
    }
}

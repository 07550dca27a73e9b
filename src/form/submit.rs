//! Submission flow
//!
//! Validates the form, sends the tokens over a [`SubmitTransport`] and folds
//! the outcome back into a new [`FormState`].

use log::{info, warn};

use crate::api::{SubmitTransport, project};
use crate::error::handlers::handle_api_error;
use crate::form::state::{FormEvent, FormState, reduce};

/// Runs one submission and returns the resulting state.
///
/// A state that already has a request in flight is returned unchanged.
/// Callers that await each submission never hit that guard; it is there for
/// callers that feed `SubmitStarted` through [`reduce`] themselves and may
/// submit again before the first request settles.
/// Rejected checks never reach the transport.
pub async fn submit<T>(state: &FormState, transport: &T) -> FormState
where
    T: SubmitTransport,
{
    if state.is_submitting() {
        warn!("Submission ignored: a request is already in flight");
        return state.clone();
    }

    let pending = reduce(state, FormEvent::SubmitStarted);

    let data = match pending.check_submission() {
        Ok(data) => data,
        Err(e) => {
            info!("Submission rejected: {}", e);
            return reduce(&pending, FormEvent::SubmitRejected(e));
        }
    };

    let options = pending.options();
    info!(
        "Submitting {} tokens (display: {:?})",
        data.len(),
        options.selected()
    );

    match transport.submit(&data).await {
        Ok(response) => reduce(
            &pending,
            FormEvent::ResponseReceived(project(&response, options)),
        ),
        Err(e) => reduce(&pending, FormEvent::SubmitRejected(handle_api_error(&e))),
    }
}

//! Response projection
//!
//! Reduces a full API response to the identity fields plus the fields the
//! user selected.

use crate::api::field::Field;
use crate::api::types::{ApiResponse, FilteredResponse};
use crate::options::OptionSet;

/// Copies `field` as received when `selected`, otherwise leaves it out.
fn select<T: Clone>(selected: bool, field: &Field<T>) -> Field<T> {
    if selected {
        field.clone()
    } else {
        Field::Missing
    }
}

/// Builds the filtered view of `response` for the given selection.
///
/// Identity fields are copied as received: missing stays missing, `null`
/// stays `null`. `numbers`, `alphabets` and `highest_alphabet` are copied the
/// same way, only when their flag is set. The input is left untouched.
pub fn project(response: &ApiResponse, options: OptionSet) -> FilteredResponse {
    FilteredResponse {
        is_success: response.is_success.clone(),
        user_id: response.user_id.clone(),
        email: response.email.clone(),
        roll_number: response.roll_number.clone(),
        numbers: select(options.numbers(), &response.numbers),
        alphabets: select(options.alphabets(), &response.alphabets),
        highest_alphabet: select(options.highest_alphabet(), &response.highest_alphabet),
        selection: options,
    }
}

//! Wire types for the remote API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::field::Field;
use crate::options::OptionSet;

/// Body of the submission: `{"data": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub data: Vec<String>,
}

impl SubmitRequest {
    pub fn new(data: Vec<String>) -> Self {
        Self { data }
    }
}

/// Response returned by the remote API.
///
/// Every field may be missing or `null` upstream; both are kept as received.
/// Extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub is_success: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub user_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub roll_number: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub numbers: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub alphabets: Field<Vec<String>>,
    /// Usually a list of zero or one letter, kept opaque.
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub highest_alphabet: Field<Value>,
}

/// The projection of an [`ApiResponse`] that is shown to the user.
///
/// Identity fields are always carried over; the optional fields are only
/// present when selected. `Missing` fields are omitted from the JSON form,
/// `Null` ones are written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredResponse {
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub is_success: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub user_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub email: Field<String>,
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub roll_number: Field<String>,
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub numbers: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub alphabets: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_missing")]
    pub highest_alphabet: Field<Value>,
    /// Selection in effect when the request was submitted.
    #[serde(skip)]
    pub selection: OptionSet,
}

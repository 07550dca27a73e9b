//! Input validation
//!
//! Checks the comma-separated token list before it is submitted.

pub mod validator;

pub use validator::{invalid_tokens, is_valid, is_valid_token, split_tokens};

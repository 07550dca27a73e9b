//! Form state and submission
//!
//! Holds the form as an immutable state value and drives one submission at
//! a time.

pub mod state;
pub mod submit;

pub use state::{FormEvent, FormState, reduce};
pub use submit::submit;

//! Display option selection
//!
//! The flags choosing which optional response fields are shown, and the
//! multi-select capability that produces them.

pub mod selector;
pub mod set;

pub use selector::{CheckboxSelector, OptionSelector, SelectItem};
pub use set::{DisplayOption, OptionSet, UnknownOption};

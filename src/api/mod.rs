//! Remote API access
//!
//! Wire types, the HTTP transport and the response projection.

pub mod client;
pub mod field;
pub mod projector;
pub mod types;

pub use client::{ApiClient, SubmitTransport};
pub use field::Field;
pub use projector::project;
pub use types::{ApiResponse, FilteredResponse, SubmitRequest};

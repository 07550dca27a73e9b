pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod options;
pub mod terminal;
pub mod utils;
pub mod validation;

pub use api::{ApiClient, ApiResponse, FilteredResponse, SubmitTransport, project};
pub use config::FormConfig;
pub use error::{ApiError, AppError, FormError};
pub use form::{FormEvent, FormState, reduce, submit};
pub use options::{DisplayOption, OptionSet};
pub use validation::is_valid;

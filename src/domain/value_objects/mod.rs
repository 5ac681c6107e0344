//! Value Objects
//!
//! Immutable values without identity.

mod api_request;
mod config_warning;

pub use api_request::{ApiRequest, HttpMethod};
pub use config_warning::ConfigWarning;

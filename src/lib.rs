pub mod config;
pub mod errors;
pub mod logging;

pub use config::RenderConfig;
pub use errors::{ErrorDetail, ErrorRenderer, ErrorResponse, HttpFailure, Result};

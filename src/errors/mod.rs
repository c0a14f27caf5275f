//! The HTTP failure value and its translation into responses

pub mod codes;
pub mod failure;
pub mod response;

pub use failure::{HttpFailure, Result};
pub use response::{ErrorDetail, ErrorRenderer, ErrorResponse};

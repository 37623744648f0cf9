#![warn(missing_docs)]

//! Library for API Gateway custom authorizers.

pub mod error_response;
pub mod policy;
pub mod request;
pub mod token;

/// Principal ID attached to every successful authorization.
pub const PRINCIPAL_ID: &str = "user:test";

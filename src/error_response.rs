//! Authorizer error response.

use lambda_runtime::diagnostic::Diagnostic;
use thiserror::{Error as ThisError};

/// Authorizer error response.
///
/// An authorizer rejects a request by returning an Err result from its
/// service function.
/// API Gateway turns such a failure into an HTTP error and only looks at the
/// error message: the exact message `"Unauthorized"` becomes
/// 401 Unauthorized, and anything else becomes 500 Internal Server Error.
///
/// By default,
/// [`lambda_runtime`](https://docs.rs/lambda_runtime/latest/lambda_runtime/index.html)
/// derives the error type from the Rust type name, which depends on the
/// compiler version.
/// This enum implements
/// [`lambda_runtime::Diagnostic`](https://docs.rs/lambda_runtime/latest/lambda_runtime/diagnostic/struct.Diagnostic.html)
/// so that both the error type and the error message are deterministic.
/// Unlike other Lambda functions, the message is NOT prefixed with the error
/// type because API Gateway matches it literally.
///
/// ```
/// # use authorizers::error_response::ErrorResponse;
/// use lambda_runtime::diagnostic::Diagnostic;
/// let diagnostic: Diagnostic = ErrorResponse::Unauthorized.into();
/// assert_eq!(diagnostic.error_message, "Unauthorized");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum ErrorResponse {
    /// Credential is recognized and explicitly denied.
    ///
    /// ### Diagnostic message
    ///
    /// `"Unauthorized"`, which API Gateway translates into
    /// 401 Unauthorized.
    #[error("Unauthorized")]
    Unauthorized,
    /// Credential does not match any known pattern.
    ///
    /// ### Diagnostic message
    ///
    /// `"Error: Invalid token"`, which API Gateway translates into
    /// 500 Internal Server Error.
    #[error("Error: Invalid token")]
    InvalidToken,
}

impl ErrorResponse {
    /// Returns the error type reported to the Lambda runtime.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Unauthorized",
            Self::InvalidToken => "InvalidToken",
        }
    }
}

impl From<ErrorResponse> for Diagnostic {
    fn from(e: ErrorResponse) -> Self {
        Diagnostic {
            error_type: e.error_type().to_string(),
            error_message: e.to_string(),
        }
    }
}

//! Token-based authorization.

use aws_lambda_events::apigw::ApiGatewayCustomAuthorizerRequest;
use tracing::info;

use crate::PRINCIPAL_ID;
use crate::error_response::ErrorResponse;
use crate::policy::{PolicyResult, generate_allow};

/// Token that is allowed.
pub const ALLOW_TOKEN: &str = "Bearer allow";

/// Token that is explicitly rejected as unauthorized.
pub const UNAUTHORIZED_TOKEN: &str = "unauthorized";

/// Authorizes a request by its authorization token.
///
/// Compares the token literally:
/// - `"Bearer allow"`: allows the method ARN for `user:test`
/// - `"unauthorized"`: fails with [`ErrorResponse::Unauthorized`]
/// - anything else, including a missing token: fails with
///   [`ErrorResponse::InvalidToken`]
pub fn authorize_token(
    event: &ApiGatewayCustomAuthorizerRequest,
) -> Result<PolicyResult, ErrorResponse> {
    match event.authorization_token.as_deref() {
        Some(ALLOW_TOKEN) => {
            info!("returning Allow");
            let method_arn = event.method_arn.as_deref().unwrap_or_default();
            Ok(generate_allow(PRINCIPAL_ID, method_arn))
        }
        Some(UNAUTHORIZED_TOKEN) => {
            info!("returning Unauthorized");
            Err(ErrorResponse::Unauthorized)
        }
        _ => {
            info!("returning Error");
            Err(ErrorResponse::InvalidToken)
        }
    }
}

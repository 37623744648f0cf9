//! Request-based authorization.

use aws_lambda_events::apigw::ApiGatewayCustomAuthorizerRequestTypeRequest;
use tracing::info;

use crate::PRINCIPAL_ID;
use crate::error_response::ErrorResponse;
use crate::policy::{PolicyResult, generate_allow};

/// Name of the query parameter that carries the credential.
pub const QUERY_PARAMETER_NAME: &str = "QueryString1";

/// Value of [`QUERY_PARAMETER_NAME`] that is allowed.
pub const ALLOWED_QUERY_VALUE: &str = "queryValue1";

/// Authorizes a request by its query string parameters.
///
/// Allows the method ARN for `user:test` if `QueryString1` is
/// `"queryValue1"`.
/// Fails with [`ErrorResponse::Unauthorized`] if the parameter is missing or
/// has any other value.
/// Only the first value is looked at if the parameter is repeated.
pub fn authorize_request(
    event: &ApiGatewayCustomAuthorizerRequestTypeRequest,
) -> Result<PolicyResult, ErrorResponse> {
    match event.query_string_parameters.first(QUERY_PARAMETER_NAME) {
        Some(ALLOWED_QUERY_VALUE) => {
            info!("returning Allow");
            let method_arn = event.method_arn.as_deref().unwrap_or_default();
            Ok(generate_allow(PRINCIPAL_ID, method_arn))
        }
        Some(_) => {
            info!("returning Unauthorized: unexpected {QUERY_PARAMETER_NAME}");
            Err(ErrorResponse::Unauthorized)
        }
        None => {
            info!("returning Unauthorized: missing {QUERY_PARAMETER_NAME}");
            Err(ErrorResponse::Unauthorized)
        }
    }
}

//! Token-based custom authorizer.
//!
//! This application is intended to run as an AWS Lambda function configured
//! as a `TOKEN` authorizer of an API Gateway REST API.
//!
//! ## Decision
//!
//! Looks at the `authorizationToken` field of the event.
//!
//! - `Bearer allow`: returns a policy that allows `user:test` to invoke the
//!   method
//! - `unauthorized`: fails with `Unauthorized` (401)
//! - others: fails with `Error: Invalid token` (500)

use aws_lambda_events::apigw::ApiGatewayCustomAuthorizerRequest;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};

use authorizers::error_response::ErrorResponse;
use authorizers::policy::PolicyResult;
use authorizers::token::authorize_token;

async fn function_handler(
    event: LambdaEvent<ApiGatewayCustomAuthorizerRequest>,
) -> Result<PolicyResult, ErrorResponse> {
    let (event, _) = event.into_parts();
    authorize_token(&event)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    run(service_fn(function_handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_lambda_events::iam::IamPolicyEffect;
    use lambda_runtime::{Context, diagnostic::Diagnostic};

    fn load_event(json: &str) -> LambdaEvent<ApiGatewayCustomAuthorizerRequest> {
        let payload = serde_json::from_str(json)
            .expect("failed to deserialize token authorizer event");
        LambdaEvent::new(payload, Context::default())
    }

    #[tokio::test]
    async fn function_handler_should_allow_bearer_allow() {
        let event = load_event(include_str!("../../tests/data/token-allow.json"));
        let result = function_handler(event).await.unwrap();
        assert_eq!(result.principal_id, "user:test");
        assert_eq!(result.effect(), Some(&IamPolicyEffect::Allow));
        assert_eq!(
            result.resource(),
            Some("arn:aws:execute-api:us-east-1:123456789012:abcdef123/test/GET/token"),
        );
    }

    #[tokio::test]
    async fn function_handler_should_fail_with_unauthorized() {
        let event = load_event(include_str!("../../tests/data/token-unauthorized.json"));
        let diagnostic: Diagnostic = function_handler(event).await.unwrap_err().into();
        assert_eq!(diagnostic.error_message, "Unauthorized");
    }

    #[tokio::test]
    async fn function_handler_should_fail_with_invalid_token() {
        let event = load_event(include_str!("../../tests/data/token-invalid.json"));
        let diagnostic: Diagnostic = function_handler(event).await.unwrap_err().into();
        assert_eq!(diagnostic.error_type, "InvalidToken");
        assert_eq!(diagnostic.error_message, "Error: Invalid token");
    }
}

//! Request-based custom authorizer.
//!
//! This application is intended to run as an AWS Lambda function configured
//! as a `REQUEST` authorizer of an API Gateway REST API.
//! The identity source should include the `QueryString1` query string
//! parameter.
//!
//! ## Decision
//!
//! Returns a policy that allows `user:test` to invoke the method if the query
//! string parameter `QueryString1` is `queryValue1`.
//! Fails with `Unauthorized` (401) otherwise.

use aws_lambda_events::apigw::ApiGatewayCustomAuthorizerRequestTypeRequest;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};

use authorizers::error_response::ErrorResponse;
use authorizers::policy::PolicyResult;
use authorizers::request::authorize_request;

async fn function_handler(
    event: LambdaEvent<ApiGatewayCustomAuthorizerRequestTypeRequest>,
) -> Result<PolicyResult, ErrorResponse> {
    let (event, _) = event.into_parts();
    authorize_request(&event)
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

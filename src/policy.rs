//! IAM policy generation for API Gateway authorizer responses.

use aws_lambda_events::iam::{IamPolicyEffect, IamPolicyStatement};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version of the IAM policy language.
pub const POLICY_VERSION: &str = "2012-10-17";

/// Action that allows invocation of an API Gateway method.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

/// Value of the `stringKey` entry in the authorizer context.
pub const CONTEXT_STRING_VALUE: &str = "This is Lambda Token Authoriser (Go)";

/// Value of the `numberKey` entry in the authorizer context.
pub const CONTEXT_NUMBER_VALUE: i64 = 123;

/// Value of the `booleanKey` entry in the authorizer context.
pub const CONTEXT_BOOLEAN_VALUE: bool = true;

/// Value in the authorizer context.
///
/// API Gateway only accepts strings, numbers and booleans here.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContextValue {
    /// String value.
    String(String),
    /// Number value.
    Number(i64),
    /// Boolean value.
    Boolean(bool),
}

/// Policy document.
///
/// Unlike `ApiGatewayCustomAuthorizerPolicy`, this is wrapped in an `Option`
/// by [`PolicyResult`] so that it can be left out of the response.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    /// Version of the policy language.
    pub version: String,
    /// Statements.
    pub statement: Vec<IamPolicyStatement>,
}

/// Response of a custom authorizer.
///
/// `policyDocument` is omitted if no statement is attached.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResult {
    /// Principal ID.
    pub principal_id: String,
    /// Policy document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<PolicyDocument>,
    /// Additional context passed to the backend.
    pub context: BTreeMap<String, ContextValue>,
}

impl PolicyResult {
    /// Returns the only statement in the policy document if any.
    pub fn statement(&self) -> Option<&IamPolicyStatement> {
        self.policy_document
            .as_ref()
            .and_then(|doc| doc.statement.first())
    }

    /// Returns the effect of the statement if any.
    pub fn effect(&self) -> Option<&IamPolicyEffect> {
        self.statement().map(|s| &s.effect)
    }

    /// Returns the resource of the statement if any.
    pub fn resource(&self) -> Option<&str> {
        self.statement()
            .and_then(|s| s.resource.first())
            .map(String::as_str)
    }
}

/// Generates a policy result.
///
/// A statement that applies `effect` to `resource` for the
/// `execute-api:Invoke` action is attached if and only if `effect` is given
/// and `resource` is not empty.
/// Otherwise, the result carries the principal ID and the context alone;
/// it grants nothing but is not an explicit deny either.
pub fn generate_policy(
    principal_id: impl Into<String>,
    effect: Option<IamPolicyEffect>,
    resource: &str,
) -> PolicyResult {
    let policy_document = effect
        .filter(|_| !resource.is_empty())
        .map(|effect| PolicyDocument {
            version: POLICY_VERSION.to_string(),
            statement: vec![IamPolicyStatement {
                action: vec![INVOKE_ACTION.to_string()],
                effect,
                resource: vec![resource.to_string()],
                condition: None,
            }],
        });
    PolicyResult {
        principal_id: principal_id.into(),
        policy_document,
        context: fixed_context(),
    }
}

/// Generates a policy result that allows `resource`.
pub fn generate_allow(principal_id: impl Into<String>, resource: &str) -> PolicyResult {
    generate_policy(principal_id, Some(IamPolicyEffect::Allow), resource)
}

// Demonstration values; not derived from the request.
fn fixed_context() -> BTreeMap<String, ContextValue> {
    BTreeMap::from([
        (
            "stringKey".to_string(),
            ContextValue::String(CONTEXT_STRING_VALUE.to_string()),
        ),
        ("numberKey".to_string(), ContextValue::Number(CONTEXT_NUMBER_VALUE)),
        ("booleanKey".to_string(), ContextValue::Boolean(CONTEXT_BOOLEAN_VALUE)),
    ])
}

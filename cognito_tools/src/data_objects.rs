//! Request and response shapes for the Cognito IdP JSON-1.1 protocol.
//!
//! Field names on the wire are PascalCase (`UserAttributes`, `AccessToken`, ...), hence the blanket
//! `rename_all = "PascalCase"` on every wire type.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single name/value attribute pair as Cognito reports it, e.g. `{"Name": "email", "Value": "a@b.com"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserAttribute {
    pub name: String,
    pub value: String,
}

impl UserAttribute {
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, value: S2) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// The result of verifying an access token (a `GetUser` call). Carries the set of verified account attributes for
/// the token's owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifiedUser {
    pub username: String,
    #[serde(default)]
    pub user_attributes: Vec<UserAttribute>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticationResult {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub id_token: Option<String>,
    pub expires_in: Option<i64>,
    pub token_type: Option<String>,
}

/// The token pair handed back to clients after a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl TryFrom<AuthenticationResult> for AuthTokens {
    type Error = crate::CognitoApiError;

    fn try_from(result: AuthenticationResult) -> Result<Self, Self::Error> {
        let access_token = result.access_token.ok_or(crate::CognitoApiError::MissingField("AccessToken"))?;
        let refresh_token = result.refresh_token.ok_or(crate::CognitoApiError::MissingField("RefreshToken"))?;
        Ok(Self { access_token, refresh_token })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeDeliveryDetails {
    pub destination: Option<String>,
    pub delivery_medium: Option<String>,
    pub attribute_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignUpResponse {
    pub user_confirmed: bool,
    pub user_sub: String,
    pub code_delivery_details: Option<CodeDeliveryDetails>,
}

//--------------------------------------  Request payloads  ----------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SignUpRequest {
    pub client_id: String,
    pub username: String,
    pub password: String,
    pub secret_hash: String,
    pub user_attributes: Vec<UserAttribute>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ConfirmSignUpRequest {
    pub client_id: String,
    pub username: String,
    pub confirmation_code: String,
    pub secret_hash: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InitiateAuthRequest {
    pub auth_flow: String,
    pub client_id: String,
    /// Keys in this map are protocol constants (`USERNAME`, `PASSWORD`, `SECRET_HASH`) and are not PascalCase.
    pub auth_parameters: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AccessTokenRequest {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InitiateAuthResponse {
    pub authentication_result: Option<AuthenticationResult>,
}

/// The error body Cognito returns with non-2xx statuses, e.g.
/// `{"__type": "NotAuthorizedException", "message": "Incorrect username or password."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceErrorBody {
    #[serde(rename = "__type")]
    pub error_type: Option<String>,
    #[serde(alias = "Message")]
    pub message: Option<String>,
}

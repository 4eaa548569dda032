use log::*;
use srs_common::Secret;

pub const DEFAULT_COGNITO_REGION: &str = "us-east-1";
pub const DEFAULT_COGNITO_CLIENT_ID: &str = "client-id";
pub const DEFAULT_COGNITO_CLIENT_SECRET: &str = "client-secret";

/// Configuration for the Cognito user pool client.
///
/// The configuration is passed explicitly into [`crate::CognitoApi::new`] rather than being read from ambient
/// global state, so that components built on top of the API stay testable in isolation.
#[derive(Debug, Clone)]
pub struct CognitoConfig {
    /// The AWS region hosting the user pool, e.g. `us-east-1`.
    pub region: String,
    /// The app client id of the user pool client.
    pub client_id: String,
    /// The app client secret. Used to compute the `SecretHash` request parameter.
    pub client_secret: Secret<String>,
}

impl Default for CognitoConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_COGNITO_REGION.to_string(),
            client_id: DEFAULT_COGNITO_CLIENT_ID.to_string(),
            client_secret: Secret::new(DEFAULT_COGNITO_CLIENT_SECRET.to_string()),
        }
    }
}

impl CognitoConfig {
    pub fn new_from_env_or_default() -> Self {
        let region = std::env::var("AWS_COGNITO_REGION").unwrap_or_else(|_| {
            warn!("🪛️ AWS_COGNITO_REGION not set, using {DEFAULT_COGNITO_REGION} as default");
            DEFAULT_COGNITO_REGION.to_string()
        });
        let client_id = std::env::var("AWS_COGNITO_CLIENT_ID").unwrap_or_else(|_| {
            warn!("🪛️ AWS_COGNITO_CLIENT_ID not set, using (probably useless) default");
            DEFAULT_COGNITO_CLIENT_ID.to_string()
        });
        let client_secret = Secret::new(std::env::var("AWS_COGNITO_CLIENT_SECRET").unwrap_or_else(|_| {
            warn!("🪛️ AWS_COGNITO_CLIENT_SECRET not set, using (probably useless) default");
            DEFAULT_COGNITO_CLIENT_SECRET.to_string()
        }));
        Self { region, client_id, client_secret }
    }

    /// The regional Cognito IdP endpoint all requests are posted to.
    pub fn endpoint(&self) -> String {
        format!("https://cognito-idp.{}.amazonaws.com/", self.region)
    }
}

//! Request identity plumbing for the bearer authorization gate.
//!
//! The gate verifies the bearer token against the identity provider, folds the attributes the provider reports
//! into a [`RequestIdentity`], and stashes it in the request extensions. Handlers pull it back out with the
//! [`FromRequest`] extractor below.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use cognito_tools::{AuthTokens, CognitoApiError, SignUpResponse, UserAttribute, VerifiedUser};
use serde::{Deserialize, Serialize};

use crate::errors::ServerError;

/// The identity the gate attaches to every request that passes it.
///
/// `token` is always present (the gate refuses requests without one). `email` and `name` are filled in from the
/// verified attribute list if the provider reports them, and `id` is the local account id looked up from the
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestIdentity {
    pub token: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
}

// Attribute names the gate knows how to map onto the identity. Anything else the provider reports is ignored.
const CLAIM_SETTERS: [(&str, fn(&mut RequestIdentity, String)); 2] = [
    ("email", |identity, value| identity.email = Some(value)),
    ("name", |identity, value| identity.name = Some(value)),
];

impl RequestIdentity {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self { token: token.into(), email: None, name: None, id: None }
    }

    /// Fold a verified attribute list into the identity. Later duplicates win, matching the order the provider
    /// reports them in.
    pub fn apply_attributes(&mut self, attributes: &[UserAttribute]) {
        for attr in attributes {
            if let Some((_, setter)) = CLAIM_SETTERS.iter().find(|(name, _)| *name == attr.name.as_str()) {
                setter(self, attr.value.clone());
            }
        }
    }
}

impl FromRequest for RequestIdentity {
    type Error = ServerError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(req.extensions().get::<RequestIdentity>().cloned().ok_or_else(|| {
            // A gated handler outside the gated scope is a wiring bug, not a client error.
            log::error!("🔐️ No request identity found. Is the authorization gate wrapping this route?");
            ServerError::BackendError("No request identity attached to the request".to_string())
        }))
    }
}

/// The narrow interface the server holds against the hosted identity provider.
///
/// [`cognito_tools::CognitoApi`] is the production implementation. Endpoint tests substitute a mock so that no
/// network calls happen.
#[allow(async_fn_in_trait)]
pub trait IdentityManagement {
    /// Register a new user with the provider. The account still needs confirmation before it can sign in.
    async fn sign_up_user(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<SignUpResponse, CognitoApiError>;

    /// Confirm a freshly registered account with the emailed confirmation code.
    async fn confirm_sign_up_user(&self, email: &str, code: &str) -> Result<(), CognitoApiError>;

    /// Exchange credentials for a token pair.
    async fn sign_in_user(&self, email: &str, password: &str) -> Result<AuthTokens, CognitoApiError>;

    /// Invalidate all of the tokens attached to the given access token.
    async fn sign_out_user(&self, access_token: &str) -> Result<(), CognitoApiError>;

    /// Verify an access token and return its owner. This is the call the gate makes on every gated request.
    async fn verify_access_token(&self, access_token: &str) -> Result<VerifiedUser, CognitoApiError>;
}

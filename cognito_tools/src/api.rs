use std::{collections::HashMap, sync::Arc};

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    config::CognitoConfig,
    data_objects::{
        AccessTokenRequest,
        ConfirmSignUpRequest,
        InitiateAuthRequest,
        InitiateAuthResponse,
        ServiceErrorBody,
        SignUpRequest,
    },
    helpers::secret_hash,
    AuthTokens,
    CognitoApiError,
    SignUpResponse,
    UserAttribute,
    VerifiedUser,
};

const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";
const USER_PASSWORD_AUTH: &str = "USER_PASSWORD_AUTH";

/// A typed client for the subset of the Cognito user-pool API the sales report server uses.
///
/// All operations are either unauthenticated (carrying the client id and a `SecretHash`) or carry a user access
/// token in the request body, so no request signing is required.
#[derive(Clone)]
pub struct CognitoApi {
    config: CognitoConfig,
    client: Arc<Client>,
}

impl CognitoApi {
    pub fn new(config: CognitoConfig) -> Result<Self, CognitoApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert("Content-Type", HeaderValue::from_static("application/x-amz-json-1.1"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| CognitoApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn config(&self) -> &CognitoConfig {
        &self.config
    }

    /// Posts one JSON-1.1 operation to the regional endpoint. `action` is the bare operation name,
    /// e.g. `InitiateAuth`; the wire target header becomes `AWSCognitoIdentityProviderService.InitiateAuth`.
    async fn post<T: DeserializeOwned, B: Serialize>(&self, action: &str, body: &B) -> Result<T, CognitoApiError> {
        let url = self.config.endpoint();
        trace!("📤️ Sending {action} request to {url}");
        let response = self
            .client
            .post(url)
            .header("X-Amz-Target", format!("{TARGET_PREFIX}.{action}"))
            .json(body)
            .send()
            .await
            .map_err(|e| CognitoApiError::Transport(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            trace!("📤️ {action} returned {status}");
            response.json::<T>().await.map_err(|e| CognitoApiError::JsonError(e.to_string()))
        } else {
            let body = response.text().await.map_err(|e| CognitoApiError::Transport(e.to_string()))?;
            let err = serde_json::from_str::<ServiceErrorBody>(&body).ok();
            let code = err.as_ref().and_then(|e| e.error_type.clone()).unwrap_or_else(|| format!("HTTP {status}"));
            let message = err.and_then(|e| e.message).unwrap_or(body);
            debug!("📤️ {action} failed with {code}: {message}");
            Err(CognitoApiError::ServiceError { code, message })
        }
    }

    fn secret_hash_for(&self, username: &str) -> String {
        secret_hash(self.config.client_secret.reveal(), &self.config.client_id, username)
    }

    /// Registers a new user with the user pool. The user still needs to confirm their account with the code
    /// Cognito delivers before they can sign in.
    pub async fn sign_up(
        &self,
        username: &str,
        password: &str,
        attributes: Vec<UserAttribute>,
    ) -> Result<SignUpResponse, CognitoApiError> {
        let body = SignUpRequest {
            client_id: self.config.client_id.clone(),
            username: username.to_string(),
            password: password.to_string(),
            secret_hash: self.secret_hash_for(username),
            user_attributes: attributes,
        };
        self.post("SignUp", &body).await
    }

    /// Confirms a freshly signed-up user with the confirmation code they received.
    pub async fn confirm_sign_up(&self, username: &str, code: &str) -> Result<(), CognitoApiError> {
        let body = ConfirmSignUpRequest {
            client_id: self.config.client_id.clone(),
            username: username.to_string(),
            confirmation_code: code.to_string(),
            secret_hash: self.secret_hash_for(username),
        };
        // The response body is an empty JSON object.
        let _ = self.post::<Value, _>("ConfirmSignUp", &body).await?;
        Ok(())
    }

    /// Signs a user in with the `USER_PASSWORD_AUTH` flow and returns the access/refresh token pair.
    pub async fn initiate_auth(&self, username: &str, password: &str) -> Result<AuthTokens, CognitoApiError> {
        let mut auth_parameters = HashMap::with_capacity(3);
        auth_parameters.insert("USERNAME".to_string(), username.to_string());
        auth_parameters.insert("PASSWORD".to_string(), password.to_string());
        auth_parameters.insert("SECRET_HASH".to_string(), self.secret_hash_for(username));
        let body = InitiateAuthRequest {
            auth_flow: USER_PASSWORD_AUTH.to_string(),
            client_id: self.config.client_id.clone(),
            auth_parameters,
        };
        let response = self.post::<InitiateAuthResponse, _>("InitiateAuth", &body).await?;
        let result = response.authentication_result.ok_or(CognitoApiError::MissingField("AuthenticationResult"))?;
        AuthTokens::try_from(result)
    }

    /// Signs the token's owner out of all devices. The access token is invalidated.
    pub async fn global_sign_out(&self, access_token: &str) -> Result<(), CognitoApiError> {
        let body = AccessTokenRequest { access_token: access_token.to_string() };
        let _ = self.post::<Value, _>("GlobalSignOut", &body).await?;
        Ok(())
    }

    /// Verifies an access token by asking Cognito for the account behind it. Fails with an opaque service error
    /// for invalid, expired, or revoked tokens.
    pub async fn get_user(&self, access_token: &str) -> Result<VerifiedUser, CognitoApiError> {
        let body = AccessTokenRequest { access_token: access_token.to_string() };
        self.post("GetUser", &body).await
    }
}

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CognitoApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Could not send request to Cognito: {0}")]
    Transport(String),
    #[error("Could not deserialize JSON: {0}")]
    JsonError(String),
    /// Cognito rejected the request. `code` carries the service exception type, e.g. `NotAuthorizedException`.
    #[error("{code}: {message}")]
    ServiceError { code: String, message: String },
    #[error("Cognito response was missing the expected field: {0}")]
    MissingField(&'static str),
}

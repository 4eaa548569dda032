use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use sales_report_engine::traits::{SalesApiError, UserApiError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An error occurred on the backend of the server. {0}")]
    BackendError(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid server configuration. {0}")]
    ConfigurationError(String),
    #[error("Authentication Error. {0}")]
    AuthenticationError(#[from] AuthError),
    #[error("Failed to sign in: {0}")]
    SignInFailed(String),
    #[error("Failed to sign up: {0}")]
    SignUpFailed(String),
    #[error("Failed to confirm sign up: {0}")]
    ConfirmSignUpFailed(String),
    #[error("Failed to sign out: {0}")]
    SignOutFailed(String),
    #[error("Failed to get sales: {0}")]
    SalesListFailed(String),
    #[error("Failed to get sale: {0}")]
    SaleLookupFailed(String),
    #[error("The data was not found. {0}")]
    NoRecordFound(String),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthenticationError(e) => e.status_code(),
            Self::SignInFailed(_) => StatusCode::UNAUTHORIZED,
            Self::SignUpFailed(_) => StatusCode::BAD_REQUEST,
            Self::ConfirmSignUpFailed(_) => StatusCode::BAD_REQUEST,
            Self::SignOutFailed(_) => StatusCode::BAD_REQUEST,
            Self::SalesListFailed(_) => StatusCode::BAD_REQUEST,
            Self::SaleLookupFailed(_) => StatusCode::BAD_REQUEST,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // The gate's response contract is fixed, so it builds its own body.
            Self::AuthenticationError(e) => e.error_response(),
            _ => HttpResponse::build(self.status_code())
                .insert_header(ContentType::json())
                .body(serde_json::json!({ "error": self.to_string() }).to_string()),
        }
    }
}

/// Rejections issued by the bearer authorization gate.
///
/// Clients are deliberately told very little. A missing, malformed or unverifiable token is reported as plain
/// `Unauthorized`; only a verified token whose owner has no local account gets the more specific `User not found`.
/// The interesting detail goes to the logs instead.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Unauthorized")]
    MissingCredential,
    #[error("Unauthorized")]
    VerificationFailed,
    #[error("User not found")]
    UserNotFound,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "message": self.to_string() }).to_string())
    }
}

impl From<UserApiError> for ServerError {
    fn from(e: UserApiError) -> Self {
        match e {
            UserApiError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
            UserApiError::UserAlreadyExists(id) => Self::SignUpFailed(format!("User {id} already exists")),
        }
    }
}

impl From<SalesApiError> for ServerError {
    fn from(e: SalesApiError) -> Self {
        match e {
            SalesApiError::DatabaseError(e) => Self::BackendError(format!("Database error: {e}")),
        }
    }
}

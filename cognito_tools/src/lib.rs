//! # Cognito tools
//!
//! A standalone client for the AWS Cognito Identity Provider API. The sales report server delegates all
//! authentication to a hosted Cognito user pool; this crate wraps the handful of user-pool operations the server
//! needs (sign up, confirm sign up, sign in, sign out, and access-token verification) behind a typed API.
//!
//! Only unauthenticated operations and operations carrying a user access token are used, so requests do not need
//! AWS SigV4 signing. Calls are plain HTTPS POSTs against the regional `cognito-idp` endpoint using the AWS
//! JSON-1.1 protocol.
mod api;
mod config;
mod error;
mod helpers;

mod data_objects;

pub use api::CognitoApi;
pub use config::CognitoConfig;
pub use data_objects::{AuthTokens, AuthenticationResult, CodeDeliveryDetails, SignUpResponse, UserAttribute, VerifiedUser};
pub use error::CognitoApiError;
pub use helpers::secret_hash;

//! [`IdentityManagement`] implementation backed by a Cognito user pool.

use cognito_tools::{AuthTokens, CognitoApi, CognitoApiError, SignUpResponse, UserAttribute, VerifiedUser};

use crate::auth::IdentityManagement;

impl IdentityManagement for CognitoApi {
    async fn sign_up_user(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<SignUpResponse, CognitoApiError> {
        let attributes = vec![UserAttribute::new("name", name)];
        self.sign_up(email, password, attributes).await
    }

    async fn confirm_sign_up_user(&self, email: &str, code: &str) -> Result<(), CognitoApiError> {
        self.confirm_sign_up(email, code).await
    }

    async fn sign_in_user(&self, email: &str, password: &str) -> Result<AuthTokens, CognitoApiError> {
        self.initiate_auth(email, password).await
    }

    async fn sign_out_user(&self, access_token: &str) -> Result<(), CognitoApiError> {
        self.global_sign_out(access_token).await
    }

    async fn verify_access_token(&self, access_token: &str) -> Result<VerifiedUser, CognitoApiError> {
        self.get_user(access_token).await
    }
}

use cognito_tools::{AuthTokens, CognitoApiError, SignUpResponse, VerifiedUser};
use mockall::mock;
use sales_report_engine::{
    db_types::{CustomerSale, SaleProduct, SaleProductDetail, User, UserAttributeKind},
    traits::{SalesApiError, SalesManagement, UserApiError, UserManagement},
};

use crate::auth::IdentityManagement;

mock! {
    pub UserDirectory {}
    impl UserManagement for UserDirectory {
        async fn fetch_user_by_id(&self, id: &str) -> Result<Option<User>, UserApiError>;
        async fn fetch_first_user_by_attribute(&self, attribute: UserAttributeKind, value: &str) -> Result<Option<User>, UserApiError>;
        async fn create_user(&self, user: &User) -> Result<(), UserApiError>;
        async fn upsert_user(&self, user: &User) -> Result<(), UserApiError>;
    }
}

mock! {
    pub SalesDb {}
    impl SalesManagement for SalesDb {
        async fn fetch_sales(&self) -> Result<Vec<CustomerSale>, SalesApiError>;
        async fn fetch_sale_by_id(&self, id: &str) -> Result<Option<CustomerSale>, SalesApiError>;
        async fn fetch_sale_products(&self, sale_id: &str) -> Result<Vec<SaleProduct>, SalesApiError>;
        async fn fetch_detailed_sale_products(&self, sale_id: &str) -> Result<Vec<SaleProductDetail>, SalesApiError>;
    }
}

mock! {
    pub IdentityProvider {}
    impl IdentityManagement for IdentityProvider {
        async fn sign_up_user(&self, email: &str, password: &str, name: &str) -> Result<SignUpResponse, CognitoApiError>;
        async fn confirm_sign_up_user(&self, email: &str, code: &str) -> Result<(), CognitoApiError>;
        async fn sign_in_user(&self, email: &str, password: &str) -> Result<AuthTokens, CognitoApiError>;
        async fn sign_out_user(&self, access_token: &str) -> Result<(), CognitoApiError>;
        async fn verify_access_token(&self, access_token: &str) -> Result<VerifiedUser, CognitoApiError>;
    }
}

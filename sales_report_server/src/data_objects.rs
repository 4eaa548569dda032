use std::fmt::Display;

use sales_report_engine::db_types::{CustomerSale, SaleProductDetail};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfirmSignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaleQueryParams {
    /// Any non-empty value trips the flag; `?include_products_purchased=` (empty) does not.
    #[serde(default)]
    pub include_products_purchased: Option<String>,
}

impl SaleQueryParams {
    pub fn products_included(&self) -> bool {
        self.include_products_purchased.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// The sale-detail response. `purchased_products` is only present when the client asked for it.
#[derive(Debug, Clone, Serialize)]
pub struct SaleResult {
    pub sale_details: CustomerSale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_products: Option<Vec<SaleProductDetail>>,
}

use thiserror::Error;

use crate::db_types::{CustomerSale, SaleProduct, SaleProductDetail};

#[derive(Debug, Clone, Error)]
pub enum SalesApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for SalesApiError {
    fn from(e: sqlx::Error) -> Self {
        SalesApiError::DatabaseError(e.to_string())
    }
}

/// Read-only sales reporting queries. Nothing in the engine mutates sales data; it arrives through other
/// channels (the storefront) and this service only reports on it.
#[allow(async_fn_in_trait)]
pub trait SalesManagement {
    /// All sales, newest first, each joined with the owning customer's name.
    async fn fetch_sales(&self) -> Result<Vec<CustomerSale>, SalesApiError>;

    /// The sale with the given id, or `None`.
    async fn fetch_sale_by_id(&self, id: &str) -> Result<Option<CustomerSale>, SalesApiError>;

    /// The raw line items of a sale.
    async fn fetch_sale_products(&self, sale_id: &str) -> Result<Vec<SaleProduct>, SalesApiError>;

    /// The line items of a sale joined with product and purchaser detail, including the computed line totals.
    async fn fetch_detailed_sale_products(&self, sale_id: &str) -> Result<Vec<SaleProductDetail>, SalesApiError>;
}

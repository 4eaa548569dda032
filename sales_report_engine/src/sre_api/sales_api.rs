//! Unified API for the sales reporting queries.
use std::fmt::Debug;

use crate::{
    db_types::{CustomerSale, SaleProduct, SaleProductDetail},
    traits::{SalesApiError, SalesManagement},
};

/// The `SalesApi` provides a unified API for the read-only sales reports.
pub struct SalesApi<B> {
    db: B,
}

impl<B: Debug> Debug for SalesApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SalesApi ({:?})", self.db)
    }
}

impl<B> SalesApi<B>
where B: SalesManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    /// All sales, newest first.
    pub async fn sales(&self) -> Result<Vec<CustomerSale>, SalesApiError> {
        self.db.fetch_sales().await
    }

    pub async fn sale_by_id(&self, id: &str) -> Result<Option<CustomerSale>, SalesApiError> {
        self.db.fetch_sale_by_id(id).await
    }

    pub async fn products_for_sale(&self, sale_id: &str) -> Result<Vec<SaleProduct>, SalesApiError> {
        self.db.fetch_sale_products(sale_id).await
    }

    /// Line items with product and purchaser detail, as served by the sale-detail endpoint when products are
    /// requested.
    pub async fn detailed_products_for_sale(&self, sale_id: &str) -> Result<Vec<SaleProductDetail>, SalesApiError> {
        self.db.fetch_detailed_sale_products(sale_id).await
    }
}

//! `SqliteDatabase` is a concrete implementation of a sales report engine backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements all the traits defined in the [`crate::db::traits`]
//! module.
use std::fmt::Debug;

use sqlx::SqlitePool;

use super::db::{new_pool, sales, users};
use crate::{
    db_types::{CustomerSale, SaleProduct, SaleProductDetail, User, UserAttributeKind},
    traits::{SalesApiError, SalesManagement, UserApiError, UserManagement},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new database instance and connection pool with `max_connections` connections.
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl UserManagement for SqliteDatabase {
    async fn fetch_user_by_id(&self, id: &str) -> Result<Option<User>, UserApiError> {
        let mut conn = self.pool.acquire().await.map_err(UserApiError::from)?;
        users::user_by_id(id, &mut conn).await
    }

    async fn fetch_first_user_by_attribute(
        &self,
        attribute: UserAttributeKind,
        value: &str,
    ) -> Result<Option<User>, UserApiError> {
        let mut conn = self.pool.acquire().await.map_err(UserApiError::from)?;
        users::first_user_by_attribute(attribute, value, &mut conn).await
    }

    async fn create_user(&self, user: &User) -> Result<(), UserApiError> {
        let mut conn = self.pool.acquire().await.map_err(UserApiError::from)?;
        users::insert_user(user, &mut conn).await
    }

    async fn upsert_user(&self, user: &User) -> Result<(), UserApiError> {
        let mut conn = self.pool.acquire().await.map_err(UserApiError::from)?;
        users::upsert_user(user, &mut conn).await
    }
}

impl SalesManagement for SqliteDatabase {
    async fn fetch_sales(&self) -> Result<Vec<CustomerSale>, SalesApiError> {
        let mut conn = self.pool.acquire().await.map_err(SalesApiError::from)?;
        sales::fetch_sales(&mut conn).await
    }

    async fn fetch_sale_by_id(&self, id: &str) -> Result<Option<CustomerSale>, SalesApiError> {
        let mut conn = self.pool.acquire().await.map_err(SalesApiError::from)?;
        sales::fetch_sale_by_id(id, &mut conn).await
    }

    async fn fetch_sale_products(&self, sale_id: &str) -> Result<Vec<SaleProduct>, SalesApiError> {
        let mut conn = self.pool.acquire().await.map_err(SalesApiError::from)?;
        sales::fetch_sale_products(sale_id, &mut conn).await
    }

    async fn fetch_detailed_sale_products(&self, sale_id: &str) -> Result<Vec<SaleProductDetail>, SalesApiError> {
        let mut conn = self.pool.acquire().await.map_err(SalesApiError::from)?;
        sales::fetch_detailed_sale_products(sale_id, &mut conn).await
    }
}

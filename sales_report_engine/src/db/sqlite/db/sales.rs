use log::trace;
use sqlx::SqliteConnection;

use crate::{
    db_types::{CustomerSale, SaleProduct, SaleProductDetail},
    traits::SalesApiError,
};

pub async fn fetch_sales(conn: &mut SqliteConnection) -> Result<Vec<CustomerSale>, SalesApiError> {
    let sales = sqlx::query_as::<_, CustomerSale>(
        r#"
        SELECT
            sales.id,
            sales.reference,
            sales.status,
            sales.amount,
            sales.total_price,
            sales.created_at,
            sales.updated_at,
            sales.user_id,
            users.name AS user_name
        FROM sales
        INNER JOIN users ON sales.user_id = users.id
        ORDER BY sales.created_at DESC"#,
    )
    .fetch_all(conn)
    .await?;
    Ok(sales)
}

pub async fn fetch_sale_by_id(id: &str, conn: &mut SqliteConnection) -> Result<Option<CustomerSale>, SalesApiError> {
    trace!("🧾️ Fetching sale [{id}]");
    let sale = sqlx::query_as::<_, CustomerSale>(
        r#"
        SELECT
            sales.id,
            sales.reference,
            sales.status,
            sales.amount,
            sales.total_price,
            sales.created_at,
            sales.updated_at,
            sales.user_id,
            users.name AS user_name
        FROM sales
        INNER JOIN users ON sales.user_id = users.id
        WHERE sales.id = $1"#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(sale)
}

pub async fn fetch_sale_products(
    sale_id: &str,
    conn: &mut SqliteConnection,
) -> Result<Vec<SaleProduct>, SalesApiError> {
    let products = sqlx::query_as::<_, SaleProduct>(
        r#"
        SELECT id, sale_id, product_id, user_id, quantity, created_at, updated_at
        FROM sales_products
        WHERE sale_id = $1"#,
    )
    .bind(sale_id)
    .fetch_all(conn)
    .await?;
    Ok(products)
}

/// Joins each line item of the sale with its product and purchaser. `amount` is the purchased quantity;
/// `total_price` is the line total, computed in the query.
pub async fn fetch_detailed_sale_products(
    sale_id: &str,
    conn: &mut SqliteConnection,
) -> Result<Vec<SaleProductDetail>, SalesApiError> {
    trace!("🧾️ Fetching detailed products for sale [{sale_id}]");
    let details = sqlx::query_as::<_, SaleProductDetail>(
        r#"
        SELECT
            products.id,
            products.name,
            products.price,
            sales_products.quantity AS amount,
            sales_products.quantity * products.price AS total_price,
            users.name AS user_name
        FROM sales_products
        INNER JOIN products ON sales_products.product_id = products.id
        INNER JOIN users ON sales_products.user_id = users.id
        WHERE sales_products.sale_id = $1"#,
    )
    .bind(sale_id)
    .fetch_all(conn)
    .await?;
    Ok(details)
}

use actix_web::{test, test::TestRequest, web, App};
use sales_report_engine::{db_types::SaleProductDetail, traits::SalesApiError, SalesApi};

use super::{
    helpers::{send, test_sale},
    mocks::MockSalesDb,
};
use crate::routes::{SaleByIdRoute, SalesRoute};

// The gate has its own tests, so the sales routes are registered bare here.
macro_rules! sales_app {
    ($db:expr) => {
        test::init_service(
            App::new().app_data(web::Data::new(SalesApi::new($db))).service(
                web::scope("/api").service(SalesRoute::<MockSalesDb>::new()).service(SaleByIdRoute::<MockSalesDb>::new()),
            ),
        )
        .await
    };
}

fn detail_line() -> SaleProductDetail {
    SaleProductDetail {
        id: "sp1".to_string(),
        name: "Widget".to_string(),
        price: 29.99,
        amount: 2,
        total_price: 59.98,
        user_name: "Alice".to_string(),
    }
}

#[actix_web::test]
async fn sales_returns_the_customer_joined_list() {
    let _ = env_logger::try_init().ok();
    let mut db = MockSalesDb::new();
    db.expect_fetch_sales().returning(|| Ok(vec![test_sale("s2", 20), test_sale("s1", 10)]));
    let app = sales_app!(db);

    let req = TestRequest::get().uri("/api/sales").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 200);
    let sales: serde_json::Value = serde_json::from_str(&body).unwrap();
    // Order is whatever the query produced (newest first)
    assert_eq!(sales[0]["id"], "s2");
    assert_eq!(sales[1]["id"], "s1");
    assert_eq!(sales[0]["user_name"], "Alice");
}

#[actix_web::test]
async fn a_database_failure_carries_the_sales_prefix() {
    let mut db = MockSalesDb::new();
    db.expect_fetch_sales().returning(|| Err(SalesApiError::DatabaseError("connection reset".to_string())));
    let app = sales_app!(db);

    let req = TestRequest::get().uri("/api/sales").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 400);
    assert_eq!(body, r#"{"error":"Failed to get sales: Database error: connection reset"}"#);
}

#[actix_web::test]
async fn an_unknown_sale_id_is_not_found() {
    let mut db = MockSalesDb::new();
    db.expect_fetch_sale_by_id().withf(|id| id == "nope").returning(|_| Ok(None));
    let app = sales_app!(db);

    let req = TestRequest::get().uri("/api/sales/nope").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 404);
    assert_eq!(body, r#"{"error":"The data was not found. No sale with id nope"}"#);
}

#[actix_web::test]
async fn sale_details_come_without_products_by_default() {
    let mut db = MockSalesDb::new();
    db.expect_fetch_sale_by_id().withf(|id| id == "s1").returning(|_| Ok(Some(test_sale("s1", 10))));
    db.expect_fetch_detailed_sale_products().never();
    let app = sales_app!(db);

    let req = TestRequest::get().uri("/api/sales/s1").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 200);
    let res: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(res["sale_details"]["id"], "s1");
    assert!(res.get("purchased_products").is_none(), "was: {body}");
}

#[actix_web::test]
async fn an_empty_products_flag_does_not_count() {
    let mut db = MockSalesDb::new();
    db.expect_fetch_sale_by_id().returning(|_| Ok(Some(test_sale("s1", 10))));
    db.expect_fetch_detailed_sale_products().never();
    let app = sales_app!(db);

    let req = TestRequest::get().uri("/api/sales/s1?include_products_purchased=").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 200);
    let res: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(res.get("purchased_products").is_none(), "was: {body}");
}

#[actix_web::test]
async fn a_non_empty_products_flag_adds_the_purchased_lines() {
    let mut db = MockSalesDb::new();
    db.expect_fetch_sale_by_id().returning(|_| Ok(Some(test_sale("s1", 10))));
    db.expect_fetch_detailed_sale_products().withf(|id| id == "s1").times(1).returning(|_| Ok(vec![detail_line()]));
    let app = sales_app!(db);

    let req = TestRequest::get().uri("/api/sales/s1?include_products_purchased=true").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status.as_u16(), 200);
    let res: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(res["sale_details"]["id"], "s1");
    assert_eq!(res["purchased_products"][0]["name"], "Widget");
    assert_eq!(res["purchased_products"][0]["total_price"], 59.98);
}

use actix_web::{
    body::MessageBody,
    dev::{HttpServiceFactory, Service, ServiceResponse},
    http::StatusCode,
    test,
    web,
    web::ServiceConfig,
    HttpResponse,
};
use chrono::{TimeZone, Utc};
use sales_report_engine::{
    db_types::{CustomerSale, Sale, User},
    UserApi,
};

use super::mocks::{MockIdentityProvider, MockUserDirectory};
use crate::{
    auth::RequestIdentity,
    errors::ServerError,
    middleware::BearerAuthMiddlewareFactory,
    routes::public_routes,
};

/// Echoes the attached identity back as JSON, so tests can see exactly what the gate produced.
pub async fn whoami(identity: RequestIdentity) -> Result<HttpResponse, ServerError> {
    Ok(HttpResponse::Ok().json(identity))
}

/// A stand-in handler for routes whose body does not matter to the test.
pub async fn probe() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

/// An `/api` scope wrapped with the gate, backed by the given mocks, with a `/whoami` echo route and probe
/// handlers on the public auth paths.
pub fn gated_scope(verifier: MockIdentityProvider, directory: MockUserDirectory) -> impl HttpServiceFactory {
    let gate = BearerAuthMiddlewareFactory::new(verifier, UserApi::new(directory), public_routes());
    web::scope("/api")
        .route("/whoami", web::get().to(whoami))
        .route("/auth/signup", web::post().to(probe))
        .route("/auth/confirm-signup", web::post().to(probe))
        .route("/auth/login", web::post().to(probe))
        .wrap(gate)
}

pub fn configure_gated(
    verifier: MockIdentityProvider,
    directory: MockUserDirectory,
) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.service(gated_scope(verifier, directory));
    }
}

/// Calls the service and returns the response status and body. Handler errors arrive as regular responses, but
/// rejections raised by the gate middleware surface as service errors; both are rendered here the way the HTTP
/// dispatcher would render them.
pub async fn send<S, B, R>(app: &S, req: R) -> (StatusCode, String)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    match test::try_call_service(app, req).await {
        Ok(res) => {
            let (_req, res) = res.into_parts();
            let status = res.status();
            let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap_or_default()).into_owned();
            (status, body)
        },
        Err(e) => {
            let res = e.error_response();
            let status = res.status();
            let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap_or_default()).into_owned();
            (status, body)
        },
    }
}

pub fn test_user() -> User {
    User::new("u1", "Alice", "alice@example.com")
}

pub fn test_sale(id: &str, day: u32) -> CustomerSale {
    let ts = Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap();
    CustomerSale {
        sale: Sale {
            id: id.to_string(),
            reference: format!("ref-{id}"),
            status: "completed".to_string(),
            amount: 2,
            total_price: 59.98,
            created_at: ts,
            updated_at: ts,
            user_id: "u1".to_string(),
        },
        user_name: "Alice".to_string(),
    }
}

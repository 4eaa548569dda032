use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use cognito_tools::CognitoApi;
use sales_report_engine::{SalesApi, SqliteDatabase, UserApi};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    middleware::BearerAuthMiddlewareFactory,
    routes::{
        health,
        public_routes,
        ConfirmSignupRoute,
        LoginRoute,
        SaleByIdRoute,
        SalesRoute,
        SignoutRoute,
        SignupRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let url = if config.database_url.is_empty() { sales_report_engine::db_url() } else { config.database_url.clone() };
    let db = SqliteDatabase::new_with_url(&url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let cognito = CognitoApi::new(config.cognito.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let bind_address = (config.host.clone(), config.port);
    let srv = HttpServer::new(move || {
        let users_api = UserApi::new(db.clone());
        let sales_api = SalesApi::new(db.clone());
        let gate = BearerAuthMiddlewareFactory::new(cognito.clone(), UserApi::new(db.clone()), public_routes());
        let api_scope = web::scope("/api")
            .wrap(gate)
            .service(LoginRoute::<SqliteDatabase, CognitoApi>::new())
            .service(SignupRoute::<SqliteDatabase, CognitoApi>::new())
            .service(ConfirmSignupRoute::<SqliteDatabase, CognitoApi>::new())
            .service(SignoutRoute::<CognitoApi>::new())
            .service(SalesRoute::<SqliteDatabase>::new())
            .service(SaleByIdRoute::<SqliteDatabase>::new());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("srs::access_log"))
            .app_data(web::Data::new(users_api))
            .app_data(web::Data::new(sales_api))
            .app_data(web::Data::new(cognito.clone()))
            .service(health)
            .service(api_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind(bind_address)?
    .run();
    Ok(srv)
}

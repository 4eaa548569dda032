//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Handlers are generic over the database backend and the identity provider so that the endpoint tests can swap
//! in mocks. Since actix-web cannot route generic handlers directly, each one gets a `route!`-generated service
//! struct that pins the generics down at registration time.

use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use sales_report_engine::{
    db_types::User,
    traits::{SalesManagement, UserManagement},
    SalesApi,
    UserApi,
};

use crate::{
    auth::{IdentityManagement, RequestIdentity},
    data_objects::{AuthConfirmSignUpRequest, AuthSignInRequest, AuthSignUpRequest, JsonResponse, SaleQueryParams, SaleResult},
    errors::ServerError,
};

/// All routes hang off this prefix, and the gate wraps the scope it names.
pub const API_PREFIX: &str = "/api";

// The auth endpoints a client must be able to reach before it has a token.
const PUBLIC_ROUTE_SUFFIXES: [&str; 3] = ["/auth/signup", "/auth/confirm-signup", "/auth/login"];

/// The fully-qualified routes that bypass the bearer authorization gate. Built once at server construction and
/// handed to the gate; matched exactly, nothing else is exempt.
pub fn public_routes() -> Vec<String> {
    PUBLIC_ROUTE_SUFFIXES.iter().map(|suffix| format!("{API_PREFIX}{suffix}")).collect()
}

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Auth  ----------------------------------------------------

route!(login => Post "/auth/login" impl UserManagement, IdentityManagement);
/// Exchange credentials for a token pair.
///
/// The email must already have a record in the local directory; a signup that was never confirmed does not, and
/// is refused here even if the provider would accept the credentials.
pub async fn login<B, V>(
    body: web::Json<AuthSignInRequest>,
    users: web::Data<UserApi<B>>,
    provider: web::Data<V>,
) -> Result<HttpResponse, ServerError>
where
    B: UserManagement,
    V: IdentityManagement,
{
    let AuthSignInRequest { email, password } = body.into_inner();
    debug!("💻️ POST login for {email}");
    let user = users.user_by_email(&email).await.map_err(|e| ServerError::SignInFailed(e.to_string()))?;
    if user.is_none() {
        debug!("💻️ Login refused. {email} has no local account.");
        return Err(ServerError::SignInFailed("User not found".to_string()));
    }
    let tokens = provider.sign_in_user(&email, &password).await.map_err(|e| {
        debug!("💻️ The identity provider refused the sign-in for {email}. {e}");
        ServerError::SignInFailed(e.to_string())
    })?;
    Ok(HttpResponse::Ok().json(tokens))
}

route!(signup => Post "/auth/signup" impl UserManagement, IdentityManagement);
/// Register a new account with the identity provider.
///
/// No local record is created here. That happens at confirmation time, which is also why the directory must not
/// already know the email.
pub async fn signup<B, V>(
    body: web::Json<AuthSignUpRequest>,
    users: web::Data<UserApi<B>>,
    provider: web::Data<V>,
) -> Result<HttpResponse, ServerError>
where
    B: UserManagement,
    V: IdentityManagement,
{
    let AuthSignUpRequest { email, password, name } = body.into_inner();
    debug!("💻️ POST signup for {email}");
    let user = users.user_by_email(&email).await.map_err(|e| ServerError::SignUpFailed(e.to_string()))?;
    if user.is_some() {
        debug!("💻️ Signup refused. {email} already has an account.");
        return Err(ServerError::SignUpFailed("User already exists".to_string()));
    }
    let result = provider.sign_up_user(&email, &password, &name).await.map_err(|e| {
        debug!("💻️ The identity provider refused the signup for {email}. {e}");
        ServerError::SignUpFailed(e.to_string())
    })?;
    Ok(HttpResponse::Created().json(result))
}

route!(confirm_signup => Post "/auth/confirm-signup" impl UserManagement, IdentityManagement);
/// Confirm a pending signup with the emailed code, create the local user record, and sign the user in.
///
/// The local record uses the email as its id. A second confirmation attempt therefore fails the existence check
/// before it ever reaches the provider.
pub async fn confirm_signup<B, V>(
    body: web::Json<AuthConfirmSignUpRequest>,
    users: web::Data<UserApi<B>>,
    provider: web::Data<V>,
) -> Result<HttpResponse, ServerError>
where
    B: UserManagement,
    V: IdentityManagement,
{
    let AuthConfirmSignUpRequest { email, password, name, code } = body.into_inner();
    debug!("💻️ POST confirm-signup for {email}");
    let user = users.user_by_email(&email).await.map_err(|e| ServerError::ConfirmSignUpFailed(e.to_string()))?;
    if user.is_some() {
        debug!("💻️ Confirmation refused. {email} already has an account.");
        return Err(ServerError::ConfirmSignUpFailed("User already exists".to_string()));
    }
    provider.confirm_sign_up_user(&email, &code).await.map_err(|e| {
        debug!("💻️ The identity provider refused the confirmation for {email}. {e}");
        ServerError::ConfirmSignUpFailed(e.to_string())
    })?;
    let new_user = User::new(email.clone(), name, email.clone());
    users.create_user(&new_user).await.map_err(|e| ServerError::ConfirmSignUpFailed(e.to_string()))?;
    info!("🧑️ Created account for {email}");
    let tokens = provider
        .sign_in_user(&email, &password)
        .await
        .map_err(|e| ServerError::ConfirmSignUpFailed(e.to_string()))?;
    Ok(HttpResponse::Ok().json(tokens))
}

route!(signout => Post "/auth/signout" impl IdentityManagement);
/// Invalidate the caller's tokens. Gated, so the identity (and thus the token) is always present.
pub async fn signout<V>(identity: RequestIdentity, provider: web::Data<V>) -> Result<HttpResponse, ServerError>
where V: IdentityManagement {
    debug!("💻️ POST signout");
    provider.sign_out_user(&identity.token).await.map_err(|e| {
        debug!("💻️ Sign-out was refused. {e}");
        ServerError::SignOutFailed(e.to_string())
    })?;
    Ok(HttpResponse::Ok().json(JsonResponse::success("Signed out")))
}

//----------------------------------------------   Sales  ----------------------------------------------------

route!(sales => Get "/sales" impl SalesManagement);
/// All sales, newest first, each with the purchasing customer's name.
pub async fn sales<B: SalesManagement>(api: web::Data<SalesApi<B>>) -> Result<HttpResponse, ServerError> {
    debug!("💻️ GET sales");
    let sales = api.sales().await.map_err(|e| {
        debug!("💻️ Could not fetch sales. {e}");
        ServerError::SalesListFailed(e.to_string())
    })?;
    Ok(HttpResponse::Ok().json(sales))
}

route!(sale_by_id => Get "/sales/{id}" impl SalesManagement);
/// A single sale, optionally with its purchased product lines.
pub async fn sale_by_id<B: SalesManagement>(
    path: web::Path<String>,
    query: web::Query<SaleQueryParams>,
    api: web::Data<SalesApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("💻️ GET sale {id}");
    let sale = api.sale_by_id(&id).await.map_err(|e| {
        debug!("💻️ Could not fetch sale {id}. {e}");
        ServerError::SaleLookupFailed(e.to_string())
    })?;
    let sale = sale.ok_or_else(|| ServerError::NoRecordFound(format!("No sale with id {id}")))?;
    let purchased_products = if query.products_included() {
        let products = api
            .detailed_products_for_sale(&sale.sale.id)
            .await
            .map_err(|e| ServerError::SaleLookupFailed(e.to_string()))?;
        Some(products)
    } else {
        None
    };
    Ok(HttpResponse::Ok().json(SaleResult { sale_details: sale, purchased_products }))
}

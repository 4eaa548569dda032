//! Bearer token authorization gate.
//!
//! This middleware wraps the `/api` scope. Every request is checked against a fixed exemption list first; exempt
//! routes (the public auth endpoints) pass through untouched. Everything else must carry an
//! `Authorization: Bearer <token>` header. The token is verified against the identity provider, the verified
//! attributes are folded into a [`RequestIdentity`], and the identity's email is resolved against the local user
//! directory. Requests that survive all three steps continue with the identity attached to their extensions;
//! everything else is rejected with a 401.
//!
//! The exemption check is an exact string match on the full request path. `/api/auth/login/` (trailing slash) or
//! `/api/v2/auth/login` are NOT exempt.

use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error,
    HttpMessage,
};
use futures::future::LocalBoxFuture;
use log::{trace, warn};
use sales_report_engine::{traits::UserManagement, UserApi};

use crate::{
    auth::{IdentityManagement, RequestIdentity},
    errors::{AuthError, ServerError, ServerError::AuthenticationError},
};

pub struct BearerAuthMiddlewareFactory<V, B> {
    verifier: Rc<V>,
    directory: Rc<UserApi<B>>,
    exempt_routes: Rc<Vec<String>>,
}

impl<V, B> BearerAuthMiddlewareFactory<V, B> {
    pub fn new(verifier: V, directory: UserApi<B>, exempt_routes: Vec<String>) -> Self {
        BearerAuthMiddlewareFactory {
            verifier: Rc::new(verifier),
            directory: Rc::new(directory),
            exempt_routes: Rc::new(exempt_routes),
        }
    }
}

impl<S, Res, V, B> Transform<S, ServiceRequest> for BearerAuthMiddlewareFactory<V, B>
where
    S: Service<ServiceRequest, Response = ServiceResponse<Res>, Error = Error> + 'static,
    S::Future: 'static,
    Res: 'static,
    V: IdentityManagement + 'static,
    B: UserManagement + 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<Res>;
    type Transform = BearerAuthMiddlewareService<S, V, B>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddlewareService {
            verifier: Rc::clone(&self.verifier),
            directory: Rc::clone(&self.directory),
            exempt_routes: Rc::clone(&self.exempt_routes),
            service: Rc::new(service),
        }))
    }
}

pub struct BearerAuthMiddlewareService<S, V, B> {
    verifier: Rc<V>,
    directory: Rc<UserApi<B>>,
    exempt_routes: Rc<Vec<String>>,
    service: Rc<S>,
}

impl<S, Res, V, B> Service<ServiceRequest> for BearerAuthMiddlewareService<S, V, B>
where
    S: Service<ServiceRequest, Response = ServiceResponse<Res>, Error = Error> + 'static,
    S::Future: 'static,
    Res: 'static,
    V: IdentityManagement + 'static,
    B: UserManagement + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;
    type Response = ServiceResponse<Res>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Rc::clone(&self.verifier);
        let directory = Rc::clone(&self.directory);
        let exempt_routes = Rc::clone(&self.exempt_routes);
        Box::pin(async move {
            if exempt_routes.iter().any(|route| route == req.path()) {
                trace!("🔐️ {} is exempt from bearer authorization. Allowing request.", req.path());
                return service.call(req).await;
            }
            let token = bearer_token(&req).ok_or_else(|| {
                warn!("🔐️ No bearer token on request to {}. Denying access.", req.path());
                AuthenticationError(AuthError::MissingCredential)
            })?;
            let verified = verifier.verify_access_token(&token).await.map_err(|e| {
                warn!("🔐️ Access token verification failed. {e}");
                AuthenticationError(AuthError::VerificationFailed)
            })?;
            let mut identity = RequestIdentity::new(token);
            identity.apply_attributes(&verified.user_attributes);
            let email = identity.email.clone().ok_or_else(|| {
                warn!("🔐️ Verified token for {} carries no email attribute. Denying access.", verified.username);
                AuthenticationError(AuthError::UserNotFound)
            })?;
            let user = directory
                .user_by_email(&email)
                .await
                .map_err(|e| ServerError::BackendError(e.to_string()))?
                .ok_or_else(|| {
                    warn!("🔐️ No local account for {email}. Denying access.");
                    AuthenticationError(AuthError::UserNotFound)
                })?;
            identity.id = Some(user.id);
            trace!("🔐️ Bearer authorization for {email} ✅️");
            req.extensions_mut().insert(identity);
            service.call(req).await
        })
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header. Anything else, including an empty token or a
/// different scheme, counts as no credential at all.
fn bearer_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

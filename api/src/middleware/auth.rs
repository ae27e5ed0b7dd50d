//! Bearer token authentication middleware for protected endpoints.
//!
//! Extracts the token from the Authorization header, hands it to the
//! access guard for verification and user resolution, and injects an
//! `AuthContext` into the request for handlers to extract. Failures
//! short-circuit to a response from the shared error mapper before the
//! handler runs, so auth and token problems read as plain-text 401s
//! while storage failures stay a sanitized 500.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use td_core::errors::DomainError;
use td_core::repositories::UserRepository;
use td_core::services::guard::GuardService;

use crate::handlers::error::domain_error_response;

/// Object-safe front for the access guard so the middleware need not
/// be generic over repository types
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolves a raw bearer token (if any) to a stored user id
    async fn authenticate(&self, raw_token: Option<&str>) -> Result<Uuid, DomainError>;
}

#[async_trait]
impl<U: UserRepository + 'static> Authenticator for GuardService<U> {
    async fn authenticate(&self, raw_token: Option<&str>) -> Result<Uuid, DomainError> {
        GuardService::authenticate(self, raw_token).await
    }
}

/// Shared handle to the guard, registered as app data
pub type GuardHandle = Arc<dyn Authenticator>;

/// User authentication context injected into requests
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    /// Identifier of the verified, still-existing user
    pub user_id: Uuid,
}

/// Authentication middleware factory
pub struct JwtAuth;

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let guard = req.app_data::<web::Data<GuardHandle>>().cloned();

        Box::pin(async move {
            let Some(guard) = guard else {
                // Wiring bug: the app was built without a guard
                log::error!("authentication guard missing from app data");
                let response = HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Internal server error");
                return Ok(req.into_response(response).map_into_right_body());
            };

            let token = extract_bearer_token(&req);

            match guard.authenticate(token.as_deref()).await {
                Ok(user_id) => {
                    req.extensions_mut().insert(AuthContext { user_id });
                    service
                        .call(req)
                        .await
                        .map(|res| res.map_into_left_body())
                }
                Err(e) => {
                    // The shared mapper keeps the taxonomy intact:
                    // auth and token failures answer 401 with their
                    // display string, storage failures a logged 500
                    let response = domain_error_response(&e);
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| ErrorUnauthorized("Unauthorized"));

        ready(result)
    }
}

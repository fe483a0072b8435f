//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it with
//! the core `TokenValidator`, and injects the resulting principal into the
//! request extensions.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::{header::AUTHORIZATION, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    ops::Deref,
    rc::Rc,
    task::{Context, Poll},
};

use blog_core::services::token::{Authentication, TokenValidator, ROLE_USER};
use blog_shared::errors::error_codes;

use crate::handlers::error::error_response;

/// Authenticated principal injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext(pub Authentication);

impl Deref for AuthContext {
    type Target = Authentication;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn unauthorized_response(message: &'static str) -> HttpResponse {
    error_response(StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED, message)
}

fn unauthorized(message: &'static str) -> Error {
    InternalError::from_response(message, unauthorized_response(message)).into()
}

/// JWT authentication middleware factory
///
/// Principals lacking the required authority (`ROLE_USER` unless changed
/// with [`JwtAuth::require_authority`]) get 403.
#[derive(Clone)]
pub struct JwtAuth {
    validator: TokenValidator,
    required_authority: &'static str,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new(validator: TokenValidator) -> Self {
        Self {
            validator,
            required_authority: ROLE_USER,
        }
    }

    pub fn require_authority(mut self, authority: &'static str) -> Self {
        self.required_authority = authority;
        self
    }
}

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
            validator: self.validator.clone(),
            required_authority: self.required_authority,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    validator: TokenValidator,
    required_authority: &'static str,
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
        let validator = self.validator.clone();
        let required_authority = self.required_authority;

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    let response = unauthorized_response("Missing or invalid Authorization header");
                    return Ok(req.into_response(response.map_into_right_body()));
                }
            };

            let authentication = match validator.get_authentication(&token) {
                Ok(authentication) => authentication,
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected bearer token");
                    let response = unauthorized_response("Invalid or expired access token");
                    return Ok(req.into_response(response.map_into_right_body()));
                }
            };

            if !authentication.has_authority(required_authority) {
                tracing::debug!(subject = %authentication.subject, required_authority, "Missing authority");
                let response = error_response(
                    StatusCode::FORBIDDEN,
                    error_codes::FORBIDDEN,
                    "Insufficient authority",
                );
                return Ok(req.into_response(response.map_into_right_body()));
            }

            req.extensions_mut().insert(AuthContext(authentication));

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized("Authentication required"));

        ready(result)
    }
}

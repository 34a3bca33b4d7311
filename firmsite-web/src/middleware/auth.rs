//! Authentication middleware for handling bearer token authentication.
//! Validates the session token and attaches the decoded claims to the
//! request; the authorization decision itself belongs to the admin gate.

use actix_service::{Service, Transform};
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    http::{header::AUTHORIZATION, Method},
    Error, HttpMessage, HttpResponse,
};
use firmsite_common::FSAppContext;
use firmsite_models::{
    constants::BEARER_TOKEN, domain::prelude::Claims, settings::Settings, web::WebResponse,
};
use firmsite_utils::jwt::{decode_jwt, session_validation};
use futures::{
    future::{ok, LocalBoxFuture, Ready},
    FutureExt,
};
use std::{
    cell::RefCell,
    rc::Rc,
    task::{Context, Poll},
};

/// Authentication middleware factory.
pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthenticationMiddleware {
            service: Rc::new(RefCell::new(service)),
        })
    }
}

/// Authentication middleware implementation.
///
/// 1. Extracts the bearer token from the Authorization header
/// 2. Validates it against the configured issuer and secret
/// 3. Attaches the decoded claims for downstream extractors
/// 4. Rejects the request with 401 when the token is missing or invalid
pub struct AuthenticationMiddleware<S> {
    service: Rc<RefCell<S>>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        async move {
            // Fast path for OPTIONS requests
            if Method::OPTIONS == req.method() {
                return srv.call(req).await.map(|res| res.map_into_left_body());
            }

            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Ok(req
                        .into_response(HttpResponse::Unauthorized().json(WebResponse::<()>::error(
                            "Invalid token, please login again",
                        )))
                        .map_into_right_body())
                }
            };

            let settings = get_settings().await?;
            let validation = session_validation(&settings.web.jwt.issuer);

            let claims = match decode_jwt::<Claims>(
                token,
                settings.web.jwt.secret.as_bytes(),
                Some(validation),
            ) {
                Ok(td) => td.claims,
                Err(_) => {
                    return Ok(req
                        .into_response(HttpResponse::Unauthorized().json(WebResponse::<()>::error(
                            "Invalid token, please login again",
                        )))
                        .map_into_right_body())
                }
            };

            req.extensions_mut().insert(claims);

            srv.call(req).await.map(|res| res.map_into_left_body())
        }
        .boxed_local()
    }
}

/// Extracts the bearer token from the request headers.
#[inline]
fn extract_bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_TOKEN)
        .map(str::trim)
}

/// Retrieves the settings from the application context.
#[inline]
async fn get_settings() -> Result<Settings, Error> {
    let ctx = FSAppContext::instance().await;
    ctx.settings().map_err(ErrorInternalServerError).cloned()
}

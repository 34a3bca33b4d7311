//! Admin gate middleware: allow-list authorization for the admin API.
//!
//! Runs inside `Authentication`, so a validated identity is already on the
//! request. One allow-list lookup keyed by email OR identity subject decides
//! the request; a row still holding the placeholder subject is bound to the
//! real identity before access is granted. No match and lookup failure both
//! resolve to the access-denied response; protected handlers never run in
//! those cases. Positive verdicts are cached for one token lifetime.

use actix_service::{Service, Transform};
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    http::Method,
    Error, HttpMessage, HttpResponse,
};
use firmsite_common::FSAppContext;
use firmsite_error::storage::StorageError;
use firmsite_models::{
    cache::{AdminGateCache, FSBaseCache, ADMIN_GATE_CACHE_NAME},
    domain::prelude::Claims,
    web::WebResponse,
    CacheProvider,
};
use firmsite_repository::AdminUserRepository;
use firmsite_storage::FSCacheProvider;
use futures::{
    future::{ok, LocalBoxFuture, Ready},
    FutureExt,
};
use std::{
    cell::RefCell,
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use tracing::{info, warn};

/// Admin gate middleware factory.
pub struct AdminGate;

impl<S, B> Transform<S, ServiceRequest> for AdminGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminGateMiddleware {
            service: Rc::new(RefCell::new(service)),
        })
    }
}

pub struct AdminGateMiddleware<S> {
    service: Rc<RefCell<S>>,
}

impl<S, B> Service<ServiceRequest> for AdminGateMiddleware<S>
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
            if Method::OPTIONS == req.method() {
                return srv.call(req).await.map(|res| res.map_into_left_body());
            }

            let maybe_claims = req.extensions().get::<Claims>().cloned();
            let claims = match maybe_claims {
                Some(claims) => claims,
                None => {
                    return Ok(req
                        .into_response(
                            HttpResponse::Unauthorized()
                                .json(WebResponse::<()>::error("Not signed in")),
                        )
                        .map_into_right_body())
                }
            };

            let verdict = match check_allow_list(&claims).await {
                Ok(Some(verdict)) => verdict,
                Ok(None) => {
                    info!(subject = %claims.sub, "admin access denied: not on allow-list");
                    return Ok(access_denied(req));
                }
                Err(e) => {
                    warn!(subject = %claims.sub, error = %e, "admin access denied: lookup failed");
                    return Ok(access_denied(req));
                }
            };

            req.extensions_mut().insert(verdict);

            srv.call(req).await.map(|res| res.map_into_left_body())
        }
        .boxed_local()
    }
}

fn access_denied<B>(req: ServiceRequest) -> ServiceResponse<EitherBody<B>>
where
    B: MessageBody,
{
    req.into_response(
        HttpResponse::Forbidden().json(WebResponse::<()>::error(
            "Access denied: this account is not authorized for the admin area",
        )),
    )
    .map_into_right_body()
}

/// One allow-list lookup per identity, cached on success only. A placeholder
/// subject row is reconciled to the real identity before the grant.
async fn check_allow_list(claims: &Claims) -> Result<Option<AdminGateCache>, Error> {
    let cache = get_admin_gate_cache().await?;
    if let Some(cached) = cache
        .get(claims.sub.clone())
        .await
        .map_err(ErrorInternalServerError)?
    {
        return Ok(Some(cached));
    }

    let entry = AdminUserRepository::find_active_match(claims.email.as_deref(), &claims.sub)
        .await
        .map_err(to_lookup_error)?;

    let entry = match entry {
        Some(entry) => entry,
        None => return Ok(None),
    };

    AdminUserRepository::reconcile_subject(&entry, &claims.sub)
        .await
        .map_err(to_lookup_error)?;

    let verdict = AdminGateCache {
        admin_id: entry.id,
        email: entry.email,
    };
    cache
        .set(claims.sub.clone(), verdict.clone())
        .await
        .map_err(ErrorInternalServerError)?;

    Ok(Some(verdict))
}

#[inline]
fn to_lookup_error(e: StorageError) -> Error {
    ErrorInternalServerError(e.to_string())
}

/// Retrieves the admin gate cache from the application context.
#[inline]
pub(crate) async fn get_admin_gate_cache(
) -> Result<Arc<dyn FSBaseCache<Value = AdminGateCache> + Send + Sync>, Error> {
    let ctx = FSAppContext::instance().await;
    let provider = ctx.cache_provider().map_err(ErrorInternalServerError)?;
    let cache_provider = provider
        .downcast_ref::<FSCacheProvider>()
        .ok_or(ErrorInternalServerError("Cache provider not initialized"))?;
    let cache = cache_provider
        .get_cache::<AdminGateCache>(ADMIN_GATE_CACHE_NAME)
        .map_err(ErrorInternalServerError)?;
    Ok(cache)
}

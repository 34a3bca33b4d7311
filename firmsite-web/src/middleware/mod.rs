pub(crate) mod auth;
pub(crate) mod cors;
pub(crate) mod gate;

use actix_web::{dev::Payload, Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::{ready, Ready};
use firmsite_models::{cache::AdminGateCache, domain::prelude::Claims};

/// Per-request view of the signed-in identity and its admin verdict,
/// populated by the authentication and gate middleware.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub grant: Option<Claims>,
    pub admin: Option<AdminGateCache>,
}

impl FromRequest for RequestContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let mut ctx = RequestContext::default();
        if let Some(grant) = req.extensions().get::<Claims>().cloned() {
            ctx.grant = Some(grant);
        }
        if let Some(admin) = req.extensions().get::<AdminGateCache>().cloned() {
            ctx.admin = Some(admin);
        }
        ready(Ok(ctx))
    }
}

use actix_web::{web, HttpRequest};
use actix_web_validator::Json;
use firmsite_common::FSAppContext;
use firmsite_error::{web::WebError, WebResult};
use firmsite_models::{
    domain::prelude::{Claims, LoginRequest, LoginResponse},
    enums::common::Status,
    web::WebResponse,
};
use firmsite_repository::get_db_connection;
use firmsite_models::entities::prelude::{User, UserColumn};
use firmsite_utils::{hash::bcrypt_check, jwt::encode_jwt};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

pub(super) const ROUTER_PREFIX: &str = "/auth";

/// Configure authentication routes
///
/// # Routes
/// - POST `/login`: Login endpoint (public, registered by the parent scope)
/// - POST `/logout`: Logout endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/logout", web::post().to(logout));
}

/// Login endpoint
///
/// # Endpoint
/// `POST /api/v1/auth/login`
///
/// # Description
/// Verifies the credentials against the local account table and issues the
/// session token the admin gate later authorizes.
pub async fn login(req: Json<LoginRequest>) -> WebResult<WebResponse<LoginResponse>> {
    let username = req.username.as_ref().unwrap();
    let password = req.password.as_ref().unwrap();

    let db = get_db_connection().await?;
    let user = User::find()
        .filter(UserColumn::Username.eq(username))
        .filter(UserColumn::Status.eq(Status::Enabled))
        .one(&db)
        .await
        .map_err(|e| WebError::InternalError(e.to_string()))?;

    let user = match user {
        Some(user) => user,
        None => return Err(WebError::NotFound("User".to_string())),
    };

    if !bcrypt_check(password, &user.password) {
        return Err(WebError::Unauthorized);
    }

    let settings = FSAppContext::instance()
        .await
        .settings()
        .map_err(|_| WebError::InternalError("Failed to get settings".to_string()))?
        .clone();

    let claims = Claims::new(
        settings.web.jwt.issuer.clone(),
        user.id.to_string(),
        user.username.clone(),
        user.email.clone(),
        settings.web.jwt.expire,
    );

    let token = encode_jwt(&claims, settings.web.jwt.secret.as_bytes(), None)
        .map_err(|_| WebError::InternalError("Failed to encode JWT".to_string()))?;

    Ok(WebResponse::ok(LoginResponse {
        jti: claims.jti,
        sub: claims.sub,
        iss: claims.iss,
        exp: claims.exp,
        nbf: claims.nbf,
        iat: claims.iat,
        user_id: claims.user_id,
        username: claims.username,
        email: claims.email,
        token,
        access_token_expire: settings.web.jwt.expire,
    }))
}

/// Logout endpoint
///
/// # Endpoint
/// `POST /api/v1/auth/logout`
///
/// # Description
/// Session tokens are stateless; logout is a client-side discard. The
/// endpoint exists so the UI has a uniform place to land the action.
async fn logout(_req: HttpRequest) -> WebResult<WebResponse<bool>> {
    Ok(WebResponse::ok(true))
}

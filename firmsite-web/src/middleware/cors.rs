use actix_cors::Cors;
use actix_web::http::Method;
use firmsite_models::settings::{Cors as FSCors, CorsMode};

pub(crate) fn middleware(cors_config: &FSCors) -> Cors {
    match cors_config.mode {
        CorsMode::AllowAll => Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600),
        CorsMode::Whitelist => {
            let origins = cors_config.whitelist.origins.clone();
            let mut cors = Cors::default()
                .allowed_origin_fn(move |origin, _| {
                    origin
                        .to_str()
                        .is_ok_and(|origin| origins.iter().any(|allowed| allowed == origin))
                })
                .allowed_methods(
                    cors_config
                        .whitelist
                        .methods
                        .iter()
                        .filter_map(|m| Method::from_bytes(m.as_bytes()).ok())
                        .collect::<Vec<Method>>(),
                )
                .allowed_headers(cors_config.whitelist.headers.clone())
                .expose_headers(cors_config.whitelist.expose_headers.clone())
                .max_age(3600);

            if cors_config.whitelist.credentials {
                cors = cors.supports_credentials();
            }
            cors
        }
    }
}

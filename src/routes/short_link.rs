use actix_web::web;

use crate::{
    errors::AppError,
    handlers::{
        create_handler, redirect_handler, resolve_by_path_handler, resolve_by_query_handler,
    },
};

/// Largest accepted JSON body on the API
const JSON_LIMIT: usize = 32 * 1024;

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

// Configure short link routes; the catch-all redirect must be registered last
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/urls")
            .app_data(json_config())
            .route("", web::post().to(create_handler))
            .route("", web::get().to(resolve_by_query_handler))
            .route("/{token}", web::get().to(resolve_by_path_handler)),
    );
    cfg.route("/{token}", web::get().to(redirect_handler));
}

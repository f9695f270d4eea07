//! CORS policy for browser clients.
//!
//! Sessions ride on a cookie, so a cross-origin frontend only gets the
//! identity when credentials are allowed. That is only ever done for an
//! explicit allowlist.
//!
//! - Development: any origin, WITHOUT credentials.
//! - Production: exact-match allowlist from Config, WITH credentials.
//!   An empty allowlist allows no origin.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;
use crate::middleware::http::REQUEST_ID_HEADER;

pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}

fn layer(config: &Config) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .max_age(Duration::from_secs(60 * 10));

    if !config.app_env.is_production() {
        // Any + credentials is rejected by tower-http; keep them apart.
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    base.allow_origin(AllowOrigin::predicate(
        move |origin: &HeaderValue, _req| allowed.iter().any(|v| v == origin),
    ))
    .allow_credentials(true)
}

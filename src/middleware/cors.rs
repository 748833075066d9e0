//! CORS policy for browser clients.
//!
//! Note:
//! - CORS is enforced by browsers. Native apps and server-to-server calls are
//!   not restricted by it.
//! - This middleware is applied at the Router level (not inside handlers).
//!
//! Policy:
//! - Fixed allow-list of the two known frontends, with credentials.
//! - Credentialed requests cannot use wildcards, so methods and headers are
//!   mirrored from the request instead of `Any`.

use axum::Router;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Browser origins allowed to call this API.
const ALLOWED_ORIGINS: [&str; 2] = ["https://apps.topaims.net", "http://localhost:8000"];

/// Apply the CORS policy to the given Router.
pub fn apply(router: Router) -> Router {
    let allowed: Vec<HeaderValue> = ALLOWED_ORIGINS
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    router.layer(cors)
}

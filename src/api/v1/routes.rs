/*
 * Responsibility
 * - define the v1 URL structure
 * - decide per route whether the bearer check applies; this is the only
 *   access-control decision in the service
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::bearer_auth;
use crate::state::AppState;

use crate::api::v1::handlers::{health::health, hello::hello, protected::protected};

pub fn routes(state: AppState) -> Router<AppState> {
    let protected_routes = bearer_auth::apply(
        Router::new()
            .route("/protected", get(protected))
            .route("/hello", post(hello)),
        state,
    );

    Router::new()
        .route("/health", get(health))
        .merge(protected_routes)
}

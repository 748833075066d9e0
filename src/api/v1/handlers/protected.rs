/*
 * Responsibility
 * - GET /api/v1/protected (fixed payload; reachable only through bearer_auth)
 */
use axum::{Extension, Json, response::IntoResponse};
use serde_json::json;

use crate::services::auth::AuthClaims;

pub async fn protected(Extension(claims): Extension<AuthClaims>) -> impl IntoResponse {
    // The claim set is request-scoped; it is only used for diagnostics here.
    tracing::debug!(
        sub = claims.0.get("sub").and_then(|v| v.as_str()),
        "protected route accessed"
    );

    Json(json!({"message": "Access granted to protected API route"}))
}

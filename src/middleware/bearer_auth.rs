//! Bearer token check for protected routes.
//!
//! Responsibility:
//! - Extract `Authorization: Bearer <token>` and verify it against the
//!   shared signing secret.
//! - Short-circuit with 401 on any failure (missing header, wrong scheme,
//!   bad signature, expired).
//! - On success, put the decoded claim set into request extensions for
//!   handlers that want it.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::AuthClaims;
use crate::state::AppState;

/// Require a valid bearer token for every route in `router`.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8's from_fn cannot take a State extractor, so the state is passed
    // explicitly via from_fn_with_state.
    router.layer(middleware::from_fn_with_state(state, bearer_auth))
}

async fn bearer_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::InvalidToken)?;

    let token = auth.strip_prefix("Bearer ").ok_or(AppError::InvalidToken)?;

    let claims = match state.auth.verify(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(error = %err, "bearer token verification failed");
            return Err(AppError::InvalidToken);
        }
    };

    // middleware -> handler handoff
    req.extensions_mut().insert(AuthClaims(claims));

    Ok(next.run(req).await)
}

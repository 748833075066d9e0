/*
 * Responsibility
 * - POST /api/v1/hello (run the hello-world task; reachable only through
 *   bearer_auth)
 */
use axum::Json;

use crate::services::hello::{HelloOutput, hello_world};

// The task itself is infallible; a failure inside a future, fallible task
// would surface as AppError::Hello (500 with the task's message).
pub async fn hello() -> Json<HelloOutput> {
    Json(hello_world())
}

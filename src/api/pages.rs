//! Root landing page.
//!
//! `GET /` reads `index.html` from the public asset directory and splices the
//! anon key into its empty `content=""` marker. This is a literal substring
//! replacement on purpose, not a template engine; the served bytes are
//! otherwise identical to the file on disk. The rest of the directory is
//! mounted read-only under `/static` (see `app::build_router`).

use axum::extract::State;
use axum::response::Html;

use crate::error::AppError;
use crate::state::AppState;

/// Empty attribute in `index.html` that receives the anon key.
const ANON_KEY_MARKER: &str = "content=\"\"";

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let path = state.public_dir.join("index.html");

    let template = tokio::fs::read_to_string(&path).await.map_err(|err| {
        tracing::error!(error = %err, path = %path.display(), "failed to read index.html");
        AppError::Internal
    })?;

    Ok(Html(render_index(&template, &state.anon_key)))
}

// Replaces every occurrence, like the str.replace the marker contract was
// written against. Templates ship with exactly one.
fn render_index(template: &str, anon_key: &str) -> String {
    template.replace(ANON_KEY_MARKER, &format!("content=\"{}\"", anon_key))
}

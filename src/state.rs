/*
 * Responsibility
 * - shared context attached to the Router (AppState)
 * - cheap to Clone (internals are Arc)
 */
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::TokenVerifier;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<TokenVerifier>,
    pub anon_key: Arc<str>,
    pub public_dir: Arc<Path>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let auth = TokenVerifier::new(config.jwt_secret.as_bytes());

        Self {
            auth: Arc::new(auth),
            anon_key: Arc::from(config.anon_key.as_str()),
            public_dir: Arc::from(config.public_dir.as_path()),
        }
    }
}

/*
 * Responsibility
 * - load configuration from the environment (secrets, port, asset dir)
 * - validate it (startup fails if a required secret is missing or empty)
 */
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // Shared signing secret; every bearer token is verified against it.
    pub jwt_secret: String,
    // Public (non-secret) key embedded into the served HTML for browser clients.
    pub anon_key: String,

    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        // Serving requests without these would be unsafe, so absence is fatal.
        let jwt_secret = require_non_empty("JWT_SECRET")?;
        let anon_key = require_non_empty("SUPABASE_ANON_KEY")?;

        let public_dir = env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        Ok(Config {
            addr,
            app_env,
            jwt_secret,
            anon_key,
            public_dir,
        })
    }
}

fn require_non_empty(key: &'static str) -> Result<String, ConfigError> {
    let value = env::var(key).map_err(|_| ConfigError::Missing(key))?;
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(key));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Process env is shared; serialize the tests that mutate it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn set_env(jwt_secret: Option<&str>, anon_key: Option<&str>) {
        unsafe {
            match jwt_secret {
                Some(v) => env::set_var("JWT_SECRET", v),
                None => env::remove_var("JWT_SECRET"),
            }
            match anon_key {
                Some(v) => env::set_var("SUPABASE_ANON_KEY", v),
                None => env::remove_var("SUPABASE_ANON_KEY"),
            }
            env::remove_var("PORT");
            env::remove_var("PUBLIC_DIR");
            env::remove_var("APP_ENV");
        }
    }

    #[test]
    fn from_env_with_both_secrets_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_env(Some("signing-secret"), Some("anon-key"));

        let config = Config::from_env().expect("config should load");

        assert_eq!(config.addr.port(), 8000);
        assert_eq!(config.jwt_secret, "signing-secret");
        assert_eq!(config.anon_key, "anon-key");
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.app_env, AppEnv::Development);
    }

    #[test]
    fn from_env_without_jwt_secret_fails() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_env(None, Some("anon-key"));

        let result = Config::from_env();

        assert!(matches!(result, Err(ConfigError::Missing("JWT_SECRET"))));
    }

    #[test]
    fn from_env_without_anon_key_fails() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_env(Some("signing-secret"), None);

        let result = Config::from_env();

        assert!(matches!(
            result,
            Err(ConfigError::Missing("SUPABASE_ANON_KEY"))
        ));
    }

    #[test]
    fn from_env_with_empty_secret_fails() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_env(Some("   "), Some("anon-key"));

        let result = Config::from_env();

        assert!(matches!(result, Err(ConfigError::Invalid("JWT_SECRET"))));
    }
}

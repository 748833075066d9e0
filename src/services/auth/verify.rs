use std::{error::Error as StdError, fmt};

use jsonwebtoken::{Algorithm, DecodingKey, Validation};

/// Decoded claim set of a verified token.
///
/// Upstream clients send Supabase-style tokens whose claim sets vary, so this
/// stays an arbitrary JSON mapping instead of a fixed struct. It lives for one
/// request and is never stored.
pub type Claims = serde_json::Map<String, serde_json::Value>;

/// Request-extension wrapper handed from the bearer middleware to handlers.
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

// Every decode/signature failure collapses into a single 401 on the wire;
// the wrapped library error is kept for logging only.
#[derive(Debug)]
pub struct VerifyError(jsonwebtoken::errors::Error);

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token verification failed: {}", self.0)
    }
}

impl StdError for VerifyError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.0)
    }
}

impl From<jsonwebtoken::errors::Error> for VerifyError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self(e)
    }
}

/// HS256 verifier for the process-wide shared signing secret.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &[u8]) -> Self {
        let decoding_key = DecodingKey::from_secret(secret);

        // Only the signature, the algorithm and (when present) `exp` are
        // checked. No claim is required, and issuer/audience are not pinned.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_aud = false;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify and decode a bearer token.
    ///
    /// Stateless and side-effect-free; each call is independent.
    pub fn verify(&self, token: &str) -> Result<Claims, VerifyError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }
}

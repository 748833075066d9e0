/*!
 * Bearer token verification
 *
 * Public API:
 * - TokenVerifier
 * - AuthClaims / Claims
 * - VerifyError
 */

mod verify;

pub use verify::{AuthClaims, Claims, TokenVerifier, VerifyError};

//! Admin console authentication extractor.
//!
//! The admin console is protected by a single shared password supplied in
//! the `X-Admin-Password` header. Comparison happens over SHA-256 digests
//! so the check does not short-circuit on the first differing byte of the
//! password itself.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use sha2::{Digest, Sha256};

use crate::app::AppState;
use crate::error::ApiError;

/// Header carrying the shared admin password.
pub const ADMIN_PASSWORD_HEADER: &str = "X-Admin-Password";

/// Proof that the request carried the shared admin password.
///
/// Handlers for admin-only routes take this extractor as a parameter;
/// requests without the correct password are rejected with 401.
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

#[async_trait]
impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let configured = &state.config.security.admin_password;
        if configured.is_empty() {
            return Err(ApiError::Unauthorized(
                "Admin access is not configured".to_string(),
            ));
        }

        let provided = parts
            .headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ApiError::Unauthorized("Missing admin password header".to_string())
            })?;

        if sha256_hex(provided) == sha256_hex(configured) {
            Ok(AdminAuth)
        } else {
            Err(ApiError::Unauthorized("Invalid admin password".to_string()))
        }
    }
}

/// Computes SHA-256 hash of the input and returns it as a hex string.
fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex() {
        let hash = sha256_hex("test");
        assert_eq!(hash.len(), 64);
        assert_eq!(
            hash,
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn test_sha256_hex_deterministic() {
        assert_eq!(sha256_hex("same_input"), sha256_hex("same_input"));
    }

    #[test]
    fn test_sha256_hex_different_inputs() {
        assert_ne!(sha256_hex("input1"), sha256_hex("input2"));
    }
}

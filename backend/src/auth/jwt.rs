//! JWT token issuing and verification
//!
//! Tokens are stateless: the subject and absolute expiry live in the signed
//! claims and nothing is persisted. Keys are pre-computed once at startup.

use anyhow::Result;
use argon2::password_hash::rand_core::{OsRng, RngCore};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use laptop_inventory_shared::{AuthError, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Random token id, keeps two tokens issued in the same second distinct
    pub jti: String,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
///
/// Cloning is cheap; keys are shared behind `Arc`.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    validation: Validation,
    token_expiry_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    pub fn new(secret: &str, token_expiry_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is re-checked against `now >= exp` in `verify`
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            keys: JwtKeys::new(secret),
            validation,
            token_expiry_secs,
        }
    }

    /// Issue a token for `user_id` that stays valid for `ttl`
    ///
    /// A zero or negative `ttl` yields a token that is already expired.
    pub fn issue(&self, user_id: UserId, ttl: Duration) -> Result<String> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(ttl)
            .ok_or_else(|| anyhow::anyhow!("Token lifetime out of range: {}s", ttl.num_seconds()))?;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            jti: format!("{:016x}", OsRng.next_u64()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to generate token: {}", e))
    }

    /// Issue a token with the configured default lifetime
    #[inline]
    pub fn generate_access_token(&self, user_id: UserId) -> Result<String> {
        let ttl = Duration::try_seconds(self.token_expiry_secs).ok_or_else(|| {
            anyhow::anyhow!("Token lifetime out of range: {}s", self.token_expiry_secs)
        })?;
        self.issue(user_id, ttl)
    }

    /// Verify a token and return its subject.
    ///
    /// Every failure (bad signature, malformed token, bad subject, expiry
    /// reached) collapses into [`AuthError::InvalidToken`].
    pub fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let claims = self.decode_claims(token)?;

        if claims.exp <= Utc::now().timestamp() {
            debug!(sub = %claims.sub, "Rejected expired token");
            return Err(AuthError::InvalidToken);
        }

        claims.sub.parse::<UserId>().map_err(|_| AuthError::InvalidToken)
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, self.keys.decoding(), &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "Rejected token");
                AuthError::InvalidToken
            })
    }

    /// Default token lifetime in seconds
    #[inline]
    pub fn token_expiry_secs(&self) -> i64 {
        self.token_expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 3600)
    }

    #[test]
    fn test_issue_and_verify() {
        let service = create_test_service();

        let token = service.generate_access_token(42).unwrap();
        assert_eq!(service.verify(&token), Ok(42));
    }

    #[test]
    fn test_zero_ttl_token_is_expired() {
        let service = create_test_service();

        let token = service.issue(42, Duration::zero()).unwrap();
        assert_eq!(service.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_past_expiry_rejected() {
        let service = create_test_service();

        let token = service.issue(42, Duration::seconds(-120)).unwrap();
        assert_eq!(service.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_out_of_range_ttl_is_an_error() {
        let service = JwtService::new("test-secret", i64::MAX);
        assert!(service.generate_access_token(42).is_err());

        let service = create_test_service();
        let beyond_calendar = Duration::try_days(1_000_000_000).unwrap();
        assert!(service.issue(42, beyond_calendar).is_err());
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = create_test_service();
        assert_eq!(
            service.verify("invalid.token.here"),
            Err(AuthError::InvalidToken)
        );
        assert_eq!(service.verify(""), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = JwtService::new("secret-one", 3600);
        let verifier = JwtService::new("secret-two", 3600);

        let token = issuer.generate_access_token(1).unwrap();
        assert_eq!(verifier.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        let service = create_test_service();
        let claims = Claims {
            sub: "not-a-number".to_string(),
            exp: Utc::now().timestamp() + 600,
            iat: Utc::now().timestamp(),
            jti: "0".to_string(),
        };
        let token = encode(&Header::default(), &claims, service.keys.encoding()).unwrap();

        assert_eq!(service.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_tokens_for_same_subject_differ() {
        let service = create_test_service();

        let first = service.generate_access_token(1).unwrap();
        let second = service.generate_access_token(1).unwrap();

        assert_ne!(first, second);
        assert_eq!(service.verify(&first), service.verify(&second));
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let cloned = service.clone();
        let token = service.generate_access_token(5).unwrap();
        assert_eq!(cloned.verify(&token), Ok(5));
    }

    proptest! {
        #[test]
        fn prop_positive_ttl_round_trips(user_id in 1i64..i64::MAX, ttl in 60i64..10_000_000) {
            let service = create_test_service();
            let token = service.issue(user_id, Duration::seconds(ttl)).unwrap();
            prop_assert_eq!(service.verify(&token), Ok(user_id));
        }

        #[test]
        fn prop_non_positive_ttl_never_verifies(user_id in 1i64..1_000_000, ttl in -10_000i64..=0) {
            let service = create_test_service();
            let token = service.issue(user_id, Duration::seconds(ttl)).unwrap();
            prop_assert_eq!(service.verify(&token), Err(AuthError::InvalidToken));
        }
    }
}

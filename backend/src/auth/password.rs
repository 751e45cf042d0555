//! Password hashing and verification
//!
//! Hashing is hidden behind [`PasswordHashing`] so the algorithm can be
//! chosen by configuration. Argon2id is the default; bcrypt is available
//! for databases populated by older deployments.
//!
//! Both algorithms are intentionally CPU-intensive. Request handlers use the
//! `*_async` variants which run on tokio's blocking thread pool.

use crate::config::PasswordAlgorithm;
use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// One-way password hashing primitive
pub trait PasswordHashing: Send + Sync {
    /// Hash a plaintext password with a fresh random salt
    fn hash(&self, password: &str) -> Result<String>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns `false` on mismatch and on a hash that cannot be parsed.
    fn verify(&self, password: &str, hash: &str) -> bool;

    /// Longest password in bytes the algorithm takes into account, if bounded
    fn max_password_bytes(&self) -> Option<usize> {
        None
    }
}

/// Argon2id hasher producing PHC-format strings
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl PasswordHashing for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

/// bcrypt only reads the first 72 bytes of its input
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

/// bcrypt hasher producing modular-crypt strings (`$2b$...`)
///
/// Passwords longer than [`BCRYPT_MAX_PASSWORD_BYTES`] are refused instead of
/// silently truncated.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHashing for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String> {
        if password.len() > BCRYPT_MAX_PASSWORD_BYTES {
            anyhow::bail!("Password exceeds {} bytes", BCRYPT_MAX_PASSWORD_BYTES);
        }
        bcrypt::hash(password, self.cost)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        if password.len() > BCRYPT_MAX_PASSWORD_BYTES {
            return false;
        }
        bcrypt::verify(password, hash).unwrap_or(false)
    }

    fn max_password_bytes(&self) -> Option<usize> {
        Some(BCRYPT_MAX_PASSWORD_BYTES)
    }
}

/// Plaintext hashed once per service to give unknown-account logins the same
/// cost as real ones
const DUMMY_PASSWORD: &str = "laptop-inventory-dummy-password";

/// Password hashing service shared through `AppState`
#[derive(Clone)]
pub struct PasswordService {
    hasher: Arc<dyn PasswordHashing>,
    dummy_hash: Arc<OnceCell<String>>,
}

impl PasswordService {
    /// Build the service for the configured algorithm
    pub fn new(algorithm: PasswordAlgorithm) -> Self {
        match algorithm {
            PasswordAlgorithm::Argon2 => Self::with_hasher(Arc::new(Argon2Hasher)),
            PasswordAlgorithm::Bcrypt => Self::with_hasher(Arc::new(BcryptHasher::default())),
        }
    }

    pub fn with_hasher(hasher: Arc<dyn PasswordHashing>) -> Self {
        Self {
            hasher,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Whether the configured algorithm can represent `password` without loss
    pub fn accepts(&self, password: &str) -> bool {
        self.hasher
            .max_password_bytes()
            .map_or(true, |max| password.len() <= max)
    }

    /// Hash a password (blocking operation)
    pub fn hash(&self, password: &str) -> Result<String> {
        self.hasher.hash(password)
    }

    /// Verify a password against a hash (blocking operation)
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        self.hasher.verify(password, hash)
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(&self, password: String) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(&self, password: String, hash: String) -> Result<bool> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))
    }

    /// Run one verification against a dummy hash and discard the result.
    ///
    /// Used when no stored hash exists so the caller cannot tell the cases
    /// apart by response time.
    pub async fn verify_dummy_async(&self, password: String) -> Result<()> {
        let hash = self
            .dummy_hash
            .get_or_try_init(|| self.hash_async(DUMMY_PASSWORD.to_string()))
            .await?
            .clone();
        self.verify_async(password, hash).await?;
        Ok(())
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(PasswordAlgorithm::default())
    }
}

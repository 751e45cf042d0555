//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! State is read-only during request handling. The only shared mutable
//! resource is the database behind the pool; each request checks out its
//! own connection or transaction from it.

use crate::auth::{JwtService, PasswordService};
use crate::config::AppConfig;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared application state
///
/// - `db`: SqlitePool is internally Arc'd, cloning is O(1)
/// - `config`: Wrapped in Arc, cloning is O(1)
/// - `jwt`: Pre-computed keys wrapped in Arc, cloning is O(1)
/// - `passwords`: Hasher behind an Arc, cloning is O(1)
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
    /// Password hasher selected by configuration
    pub passwords: PasswordService,
}

impl AppState {
    /// Create a new application state
    ///
    /// Pre-computes JWT keys from the config secret and selects the
    /// password hasher. Call once at application startup.
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        let passwords = PasswordService::new(config.password.algorithm);
        Self::with_password_service(db, config, passwords)
    }

    /// Create a state with an explicit password service
    pub fn with_password_service(
        db: SqlitePool,
        config: AppConfig,
        passwords: PasswordService,
    ) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.token_expiry_secs);

        Self {
            db,
            config: Arc::new(config),
            jwt,
            passwords,
        }
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &SqlitePool {
        &self.db
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the JWT service
    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    /// Get a reference to the password service
    #[inline]
    pub fn passwords(&self) -> &PasswordService {
        &self.passwords
    }
}

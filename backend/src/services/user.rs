//! User service for registration, login and profile reads
//!
//! - Password hashing/verification runs on blocking thread pool
//! - JWT service is passed by reference (pre-computed keys)
//! - Registration runs in a single transaction; the token is issued before
//!   commit so a signing failure leaves no user behind

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{is_unique_violation, LaptopRepository, UserRepository};
use laptop_inventory_shared::{
    AuthError, AuthTokens, Laptop, User, UserId, UserProfile,
};
use sqlx::SqlitePool;
use tracing::{info, warn};

/// Outcome of a successful registration or login
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: User,
    pub tokens: AuthTokens,
}

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user and issue a token for it.
    ///
    /// Fails with [`AuthError::DuplicateEmail`] when the email is taken.
    pub async fn register(
        pool: &SqlitePool,
        jwt_service: &JwtService,
        passwords: &PasswordService,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Authenticated, ApiError> {
        if !passwords.accepts(password) {
            return Err(ApiError::Validation("Password too long".to_string()));
        }
        let password_hash = passwords.hash_async(password.to_string()).await?;

        let mut tx = pool.begin().await?;

        let record = UserRepository::create(&mut tx, name, email, &password_hash)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    warn!("Registration rejected: email already registered");
                    ApiError::Auth(AuthError::DuplicateEmail)
                } else {
                    ApiError::Database(e)
                }
            })?;

        let tokens = issue_tokens(jwt_service, record.id)?;
        tx.commit().await?;

        info!(user_id = record.id, "User registered");

        Ok(Authenticated {
            user: record.into(),
            tokens,
        })
    }

    /// Login with email and password.
    ///
    /// An unknown email and a wrong password produce the same
    /// [`AuthError::InvalidCredentials`], and both pay for one hash check.
    pub async fn login(
        pool: &SqlitePool,
        jwt_service: &JwtService,
        passwords: &PasswordService,
        email: &str,
        password: &str,
    ) -> Result<Authenticated, ApiError> {
        let record = {
            let mut conn = pool.acquire().await?;
            UserRepository::find_by_email(&mut conn, email).await?
        };

        let Some(record) = record else {
            passwords.verify_dummy_async(password.to_string()).await?;
            warn!("Login failed");
            return Err(AuthError::InvalidCredentials.into());
        };

        let valid = passwords
            .verify_async(password.to_string(), record.password_hash.clone())
            .await?;

        if !valid {
            warn!(user_id = record.id, "Login failed");
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = issue_tokens(jwt_service, record.id)?;
        info!(user_id = record.id, "User logged in");

        Ok(Authenticated {
            user: record.into(),
            tokens,
        })
    }

    /// Get the user's profile together with every laptop they own
    pub async fn get_profile(pool: &SqlitePool, user_id: UserId) -> Result<UserProfile, ApiError> {
        let mut conn = pool.acquire().await?;

        let user = UserRepository::find_by_id(&mut conn, user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id, "Profile read for missing user");
                ApiError::NotFound("User not found".to_string())
            })?;

        let laptops = LaptopRepository::list_by_owner(&mut conn, user_id)
            .await?
            .into_iter()
            .map(Laptop::from)
            .collect();

        Ok(UserProfile::new(user.into(), laptops))
    }
}

fn issue_tokens(jwt_service: &JwtService, user_id: UserId) -> Result<AuthTokens, ApiError> {
    let access_token = jwt_service.generate_access_token(user_id)?;

    Ok(AuthTokens {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: jwt_service.token_expiry_secs(),
    })
}

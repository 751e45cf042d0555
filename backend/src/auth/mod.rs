//! Authentication module
//!
//! Provides JWT-based bearer authentication and pluggable password hashing.

mod jwt;
mod middleware;
pub(crate) mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
pub use password::{
    Argon2Hasher, BcryptHasher, PasswordHashing, PasswordService, BCRYPT_MAX_PASSWORD_BYTES,
};

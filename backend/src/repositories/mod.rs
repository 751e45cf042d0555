//! Database repositories
//!
//! Provides data access layer for database operations. Repository functions
//! take a `&mut SqliteConnection` so that callers decide the scope: a pooled
//! connection for reads, a transaction for writes.

pub mod laptop;
pub mod user;

pub use laptop::{LaptopRecord, LaptopRepository};
pub use user::{UserRecord, UserRepository};

/// True when the storage engine rejected a write because of a unique index
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

//! User repository for database operations

use laptop_inventory_shared::{User, UserId};
use sqlx::SqliteConnection;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user.
    ///
    /// Email uniqueness is enforced by the `users.email` unique index; a
    /// duplicate surfaces as a database error that
    /// [`is_unique_violation`](super::is_unique_violation) recognises.
    pub async fn create(
        conn: &mut SqliteConnection,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> sqlx::Result<UserRecord> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES (?, ?, ?)
            RETURNING id, name, email, password_hash
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut *conn)
        .await
    }

    /// Find user by email
    pub async fn find_by_email(
        conn: &mut SqliteConnection,
        email: &str,
    ) -> sqlx::Result<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, password_hash
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
    }

    /// Find user by ID
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: UserId,
    ) -> sqlx::Result<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, password_hash
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
    }
}

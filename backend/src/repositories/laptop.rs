//! Laptop repository for database operations
//!
//! Every query that touches an existing row filters on `user_id` as well as
//! `id`, so a row owned by someone else behaves exactly like a missing row.

use laptop_inventory_shared::{Laptop, LaptopId, NewLaptop, UserId};
use sqlx::SqliteConnection;

/// Laptop record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LaptopRecord {
    pub id: LaptopId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
}

impl From<LaptopRecord> for Laptop {
    fn from(record: LaptopRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            name: record.name,
            description: record.description,
        }
    }
}

/// Laptop repository for database operations
pub struct LaptopRepository;

impl LaptopRepository {
    /// All laptops owned by `owner_id`, in insertion order
    pub async fn list_by_owner(
        conn: &mut SqliteConnection,
        owner_id: UserId,
    ) -> sqlx::Result<Vec<LaptopRecord>> {
        sqlx::query_as::<_, LaptopRecord>(
            r#"
            SELECT id, user_id, name, description
            FROM laptops
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Insert a laptop for `owner_id`; the id is assigned by the database
    pub async fn create(
        conn: &mut SqliteConnection,
        owner_id: UserId,
        input: &NewLaptop,
    ) -> sqlx::Result<LaptopRecord> {
        sqlx::query_as::<_, LaptopRecord>(
            r#"
            INSERT INTO laptops (user_id, name, description)
            VALUES (?, ?, ?)
            RETURNING id, user_id, name, description
            "#,
        )
        .bind(owner_id)
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(&mut *conn)
        .await
    }

    /// Get a laptop by ID, only if it belongs to `owner_id`
    pub async fn find_owned(
        conn: &mut SqliteConnection,
        owner_id: UserId,
        id: LaptopId,
    ) -> sqlx::Result<Option<LaptopRecord>> {
        sqlx::query_as::<_, LaptopRecord>(
            r#"
            SELECT id, user_id, name, description
            FROM laptops
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&mut *conn)
        .await
    }

    /// Persist the mutable fields of `laptop`.
    ///
    /// Returns `None` when no row with that id exists for `laptop.user_id`.
    pub async fn update(
        conn: &mut SqliteConnection,
        laptop: &Laptop,
    ) -> sqlx::Result<Option<LaptopRecord>> {
        sqlx::query_as::<_, LaptopRecord>(
            r#"
            UPDATE laptops SET
                name = ?,
                description = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, user_id, name, description
            "#,
        )
        .bind(&laptop.name)
        .bind(&laptop.description)
        .bind(laptop.id)
        .bind(laptop.user_id)
        .fetch_optional(&mut *conn)
        .await
    }

    /// Delete a laptop; returns whether a row owned by `owner_id` was removed
    pub async fn delete(
        conn: &mut SqliteConnection,
        owner_id: UserId,
        id: LaptopId,
    ) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM laptops
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

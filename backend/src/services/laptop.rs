//! Laptop service: ownership-scoped CRUD
//!
//! Every operation takes the authenticated owner's id first. A laptop owned
//! by another user is reported exactly like a missing one. Writes run inside
//! a transaction that is rolled back when dropped on an error path.

use crate::error::ApiError;
use crate::repositories::LaptopRepository;
use laptop_inventory_shared::{Laptop, LaptopId, LaptopPatch, NewLaptop, UserId};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{info, warn};

const NOT_FOUND_MESSAGE: &str = "No laptop with this id";

/// Laptop service for business logic
pub struct LaptopService;

impl LaptopService {
    /// All laptops owned by `owner_id`; empty when there are none
    pub async fn list(pool: &SqlitePool, owner_id: UserId) -> Result<Vec<Laptop>, ApiError> {
        let mut conn = pool.acquire().await?;
        let records = LaptopRepository::list_by_owner(&mut conn, owner_id).await?;

        Ok(records.into_iter().map(Laptop::from).collect())
    }

    /// Create a laptop owned by `owner_id`
    pub async fn create(
        pool: &SqlitePool,
        owner_id: UserId,
        input: NewLaptop,
    ) -> Result<Laptop, ApiError> {
        let mut tx = pool.begin().await?;
        let record = LaptopRepository::create(&mut tx, owner_id, &input).await?;
        tx.commit().await?;

        info!(user_id = owner_id, laptop_id = record.id, "Laptop created");
        Ok(record.into())
    }

    /// Get a laptop, only if `owner_id` owns it
    pub async fn get_owned(
        pool: &SqlitePool,
        owner_id: UserId,
        laptop_id: LaptopId,
    ) -> Result<Laptop, ApiError> {
        let mut conn = pool.acquire().await?;
        load_owned(&mut conn, owner_id, laptop_id).await
    }

    /// Apply a partial update to a laptop owned by `owner_id`
    pub async fn update(
        pool: &SqlitePool,
        owner_id: UserId,
        laptop_id: LaptopId,
        patch: LaptopPatch,
    ) -> Result<Laptop, ApiError> {
        let mut tx = pool.begin().await?;
        let mut laptop = load_owned(&mut tx, owner_id, laptop_id).await?;

        if patch.is_empty() {
            return Ok(laptop);
        }
        patch.apply(&mut laptop);

        let record = LaptopRepository::update(&mut tx, &laptop)
            .await?
            .ok_or_else(|| ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;
        tx.commit().await?;

        info!(user_id = owner_id, laptop_id, "Laptop updated");
        Ok(record.into())
    }

    /// Delete a laptop owned by `owner_id`
    pub async fn delete(
        pool: &SqlitePool,
        owner_id: UserId,
        laptop_id: LaptopId,
    ) -> Result<(), ApiError> {
        let mut tx = pool.begin().await?;
        load_owned(&mut tx, owner_id, laptop_id).await?;

        if !LaptopRepository::delete(&mut tx, owner_id, laptop_id).await? {
            return Err(ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }
        tx.commit().await?;

        info!(user_id = owner_id, laptop_id, "Laptop deleted");
        Ok(())
    }
}

async fn load_owned(
    conn: &mut SqliteConnection,
    owner_id: UserId,
    laptop_id: LaptopId,
) -> Result<Laptop, ApiError> {
    LaptopRepository::find_owned(conn, owner_id, laptop_id)
        .await?
        .map(Laptop::from)
        .ok_or_else(|| {
            warn!(user_id = owner_id, laptop_id, "Laptop not found for owner");
            ApiError::NotFound(NOT_FOUND_MESSAGE.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{test_support::memory_pool, UserRepository};

    async fn user(pool: &SqlitePool, email: &str) -> UserId {
        let mut conn = pool.acquire().await.unwrap();
        UserRepository::create(&mut conn, "user", email, "hash")
            .await
            .unwrap()
            .id
    }

    fn new_laptop(name: &str, description: &str) -> NewLaptop {
        NewLaptop {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let pool = memory_pool().await;
        let owner = user(&pool, "a@x.com").await;

        let created = LaptopService::create(&pool, owner, new_laptop("L1", "D1"))
            .await
            .unwrap();
        let fetched = LaptopService::get_owned(&pool, owner, created.id)
            .await
            .unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.user_id, owner);
        assert_eq!(fetched.name, "L1");
        assert_eq!(fetched.description, "D1");
    }

    #[tokio::test]
    async fn test_list_is_empty_then_idempotent() {
        let pool = memory_pool().await;
        let owner = user(&pool, "a@x.com").await;

        assert!(LaptopService::list(&pool, owner).await.unwrap().is_empty());

        LaptopService::create(&pool, owner, new_laptop("L1", "D1"))
            .await
            .unwrap();
        LaptopService::create(&pool, owner, new_laptop("L2", "D2"))
            .await
            .unwrap();

        let first = LaptopService::list(&pool, owner).await.unwrap();
        let second = LaptopService::list(&pool, owner).await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_other_owner_sees_not_found() {
        let pool = memory_pool().await;
        let alice = user(&pool, "a@x.com").await;
        let bob = user(&pool, "b@x.com").await;

        let laptop = LaptopService::create(&pool, alice, new_laptop("L1", "D1"))
            .await
            .unwrap();

        let get = LaptopService::get_owned(&pool, bob, laptop.id).await;
        let update = LaptopService::update(
            &pool,
            bob,
            laptop.id,
            LaptopPatch {
                name: Some("mine now".to_string()),
                description: None,
            },
        )
        .await;
        let delete = LaptopService::delete(&pool, bob, laptop.id).await;
        let missing = LaptopService::get_owned(&pool, bob, laptop.id + 1000).await;

        for result in [get.map(|_| ()), update.map(|_| ()), delete, missing.map(|_| ())] {
            match result {
                Err(ApiError::NotFound(msg)) => assert_eq!(msg, NOT_FOUND_MESSAGE),
                other => panic!("expected NotFound, got {:?}", other),
            }
        }

        let still_there = LaptopService::get_owned(&pool, alice, laptop.id)
            .await
            .unwrap();
        assert_eq!(still_there, laptop);
    }

    #[tokio::test]
    async fn test_partial_update_changes_only_given_field() {
        let pool = memory_pool().await;
        let owner = user(&pool, "a@x.com").await;
        let laptop = LaptopService::create(&pool, owner, new_laptop("L1", "D1"))
            .await
            .unwrap();

        let updated = LaptopService::update(
            &pool,
            owner,
            laptop.id,
            LaptopPatch {
                name: None,
                description: Some("x".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.name, "L1");
        assert_eq!(updated.description, "x");
        assert_eq!(
            LaptopService::get_owned(&pool, owner, laptop.id).await.unwrap(),
            updated
        );
    }

    #[tokio::test]
    async fn test_empty_patch_returns_current_record() {
        let pool = memory_pool().await;
        let owner = user(&pool, "a@x.com").await;
        let laptop = LaptopService::create(&pool, owner, new_laptop("L1", "D1"))
            .await
            .unwrap();

        let updated = LaptopService::update(&pool, owner, laptop.id, LaptopPatch::default())
            .await
            .unwrap();
        assert_eq!(updated, laptop);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let pool = memory_pool().await;
        let owner = user(&pool, "a@x.com").await;
        let laptop = LaptopService::create(&pool, owner, new_laptop("L1", "D1"))
            .await
            .unwrap();

        LaptopService::delete(&pool, owner, laptop.id).await.unwrap();

        assert!(matches!(
            LaptopService::get_owned(&pool, owner, laptop.id).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            LaptopService::delete(&pool, owner, laptop.id).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_failed_create_leaves_state_unchanged() {
        let pool = memory_pool().await;

        // No such user: the foreign key rejects the insert
        let err = LaptopService::create(&pool, 999, new_laptop("L1", "D1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Database(_)));

        let mut conn = pool.acquire().await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM laptops")
            .fetch_one(&mut *conn)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}

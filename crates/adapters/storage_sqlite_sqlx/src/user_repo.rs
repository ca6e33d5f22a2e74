//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use shelf_app::ports::UserRepository;
use shelf_domain::error::{NotFoundError, ShelfError};
use shelf_domain::id::UserId;
use shelf_domain::time;
use shelf_domain::user::{NewUser, User};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let email: String = row.try_get("email")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

        Ok(Self(User {
            id: UserId::new(id),
            name,
            email,
            created_at,
            updated_at,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (name, email, created_at, updated_at) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str =
    "SELECT id, name, email, created_at, updated_at FROM users WHERE id = ? AND deleted_at IS NULL";
const SELECT_ALL: &str =
    "SELECT id, name, email, created_at, updated_at FROM users WHERE deleted_at IS NULL ORDER BY id";
const UPDATE: &str =
    "UPDATE users SET name = ?, email = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL";
const SOFT_DELETE: &str = "UPDATE users SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn insert(&self, draft: NewUser) -> impl Future<Output = Result<User, ShelfError>> + Send {
        let pool = self.pool.clone();
        async move {
            let now = time::now();
            let result = sqlx::query(INSERT)
                .bind(&draft.name)
                .bind(&draft.email)
                .bind(now)
                .bind(now)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(User {
                id: UserId::new(result.last_insert_rowid()),
                name: draft.name,
                email: draft.email,
                created_at: now,
                updated_at: now,
            })
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, ShelfError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.value())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, ShelfError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, user: User) -> impl Future<Output = Result<User, ShelfError>> + Send {
        let pool = self.pool.clone();
        async move {
            let now = time::now();
            let result = sqlx::query(UPDATE)
                .bind(&user.name)
                .bind(&user.email)
                .bind(now)
                .bind(user.id.value())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            // A concurrent soft-delete between lookup and persist lands here.
            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "User",
                    id: user.id.to_string(),
                }
                .into());
            }

            Ok(User {
                updated_at: now,
                ..user
            })
        }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), ShelfError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(SOFT_DELETE)
                .bind(time::now())
                .bind(id.value())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "User",
                    id: id.to_string(),
                }
                .into());
            }

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteUserRepository {
        let pool = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteUserRepository::new(pool)
    }

    fn test_draft() -> NewUser {
        NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn should_insert_and_retrieve_user() {
        let repo = setup().await;

        let created = repo.insert(test_draft()).await.unwrap();
        assert_eq!(created.id.value(), 1);

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Ada");
        assert_eq!(fetched.email, "ada@example.com");
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn should_assign_increasing_ids() {
        let repo = setup().await;
        let first = repo.insert(test_draft()).await.unwrap();
        let second = repo.insert(test_draft()).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn should_return_none_when_user_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(UserId::new(42)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_users_ordered_by_id() {
        let repo = setup().await;
        repo.insert(test_draft()).await.unwrap();
        repo.insert(NewUser {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
        })
        .await
        .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Ada");
        assert_eq!(all[1].name, "Grace");
    }

    #[tokio::test]
    async fn should_update_user_and_refresh_updated_at() {
        let repo = setup().await;
        let mut user = repo.insert(test_draft()).await.unwrap();
        let created_at = user.created_at;

        user.name = "Ada Lovelace".to_string();
        let updated = repo.update(user.clone()).await.unwrap();
        assert!(updated.updated_at >= created_at);

        let fetched = repo.get_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Ada Lovelace");
        assert_eq!(fetched.created_at, created_at);
    }

    #[tokio::test]
    async fn should_soft_delete_and_exclude_from_reads() {
        let repo = setup().await;
        let user = repo.insert(test_draft()).await.unwrap();

        repo.delete(user.id).await.unwrap();

        assert!(repo.get_by_id(user.id).await.unwrap().is_none());
        assert!(repo.get_all().await.unwrap().is_empty());

        // The row is marked, not removed.
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_twice() {
        let repo = setup().await;
        let user = repo.insert(test_draft()).await.unwrap();

        repo.delete(user.id).await.unwrap();
        let result = repo.delete(user.id).await;
        assert!(matches!(result, Err(ShelfError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_deleted_user() {
        let repo = setup().await;
        let user = repo.insert(test_draft()).await.unwrap();
        repo.delete(user.id).await.unwrap();

        let result = repo.update(user).await;
        assert!(matches!(result, Err(ShelfError::NotFound(_))));
    }
}

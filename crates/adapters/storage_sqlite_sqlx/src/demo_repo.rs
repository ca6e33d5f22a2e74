//! `SQLite` implementation of [`DemoRepository`].

use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use shelf_app::ports::DemoRepository;
use shelf_domain::demo::{Demo, NewDemo};
use shelf_domain::error::{NotFoundError, ShelfError};
use shelf_domain::id::DemoId;
use shelf_domain::time;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Demo`].
struct Wrapper(Demo);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Demo> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

        Ok(Self(Demo {
            id: DemoId::new(id),
            name,
            created_at,
            updated_at,
        }))
    }
}

const INSERT: &str = "INSERT INTO demos (name, created_at, updated_at) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str =
    "SELECT id, name, created_at, updated_at FROM demos WHERE id = ? AND deleted_at IS NULL";
const SELECT_ALL: &str =
    "SELECT id, name, created_at, updated_at FROM demos WHERE deleted_at IS NULL ORDER BY id";
const UPDATE: &str =
    "UPDATE demos SET name = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL";
const SOFT_DELETE: &str = "UPDATE demos SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL";

/// `SQLite`-backed demo repository.
pub struct SqliteDemoRepository {
    pool: SqlitePool,
}

impl SqliteDemoRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DemoRepository for SqliteDemoRepository {
    fn insert(&self, draft: NewDemo) -> impl Future<Output = Result<Demo, ShelfError>> + Send {
        let pool = self.pool.clone();
        async move {
            let now = time::now();
            let result = sqlx::query(INSERT)
                .bind(&draft.name)
                .bind(now)
                .bind(now)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Demo {
                id: DemoId::new(result.last_insert_rowid()),
                name: draft.name,
                created_at: now,
                updated_at: now,
            })
        }
    }

    fn get_by_id(
        &self,
        id: DemoId,
    ) -> impl Future<Output = Result<Option<Demo>, ShelfError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Demo>, ShelfError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, demo: Demo) -> impl Future<Output = Result<Demo, ShelfError>> + Send {
        let pool = self.pool.clone();
        async move {
            let now = time::now();
            let result = sqlx::query(UPDATE)
                .bind(&demo.name)
                .bind(now)
                .bind(demo.id.value())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "Demo",
                    id: demo.id.to_string(),
                }
                .into());
            }

            Ok(Demo {
                updated_at: now,
                ..demo
            })
        }
    }

    fn delete(&self, id: DemoId) -> impl Future<Output = Result<(), ShelfError>> + Send {
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
                    entity: "Demo",
                    id: id.to_string(),
                }
                .into());
            }

            Ok(())
        }
    }
}

//! # shelf-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `shelf-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Own the store-assigned parts of every record: autoincrement ids,
//!   `created_at` / `updated_at`, and the `deleted_at` soft-delete marker
//!
//! ## Dependency rule
//! Depends on `shelf-app` (for port traits) and `shelf-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod demo_repo;
pub mod error;
pub mod pool;
pub mod user_repo;

pub use demo_repo::SqliteDemoRepository;
pub use error::StorageError;
pub use pool::Config;
pub use user_repo::SqliteUserRepository;

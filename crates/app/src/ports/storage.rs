//! Storage port — repository traits for persistence.
//!
//! Repositories own the store-assigned parts of a record: the identifier,
//! the audit timestamps, and the soft-delete marker. `insert` takes a draft
//! and returns the full stored record; `delete` is a soft delete (the row is
//! marked, not removed) and every read excludes marked rows.

use std::future::Future;

use shelf_domain::demo::{Demo, NewDemo};
use shelf_domain::error::ShelfError;
use shelf_domain::id::{DemoId, UserId};
use shelf_domain::user::{NewUser, User};

/// Persistence for [`User`] records.
pub trait UserRepository {
    /// Insert a new record; the store assigns id and timestamps.
    fn insert(&self, draft: NewUser) -> impl Future<Output = Result<User, ShelfError>> + Send;

    /// Fetch a live (non-deleted) record by id.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, ShelfError>> + Send;

    /// Fetch all live records, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, ShelfError>> + Send;

    /// Persist a full record back; the store refreshes `updated_at`.
    fn update(&self, user: User) -> impl Future<Output = Result<User, ShelfError>> + Send;

    /// Soft-delete a record by id.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), ShelfError>> + Send;
}

/// Persistence for [`Demo`] records.
pub trait DemoRepository {
    /// Insert a new record; the store assigns id and timestamps.
    fn insert(&self, draft: NewDemo) -> impl Future<Output = Result<Demo, ShelfError>> + Send;

    /// Fetch a live (non-deleted) record by id.
    fn get_by_id(
        &self,
        id: DemoId,
    ) -> impl Future<Output = Result<Option<Demo>, ShelfError>> + Send;

    /// Fetch all live records, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Demo>, ShelfError>> + Send;

    /// Persist a full record back; the store refreshes `updated_at`.
    fn update(&self, demo: Demo) -> impl Future<Output = Result<Demo, ShelfError>> + Send;

    /// Soft-delete a record by id.
    fn delete(&self, id: DemoId) -> impl Future<Output = Result<(), ShelfError>> + Send;
}

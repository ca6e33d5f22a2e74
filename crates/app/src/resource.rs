//! Resource controller — the uniform five-operation capability set.
//!
//! Any type implementing this trait can be mounted as a REST resource by the
//! HTTP adapter's route-binder: one `GET`/`POST` pair on the collection and a
//! `GET`/`PUT`/`DELETE` triple on `/{id}`. Each entity gets its own
//! implementation (see [`crate::services`]); the adapter stays generic.

use std::future::Future;

use shelf_domain::error::ShelfError;

/// The five conventional operations of a REST resource.
pub trait ResourceController: Send + Sync {
    /// Human-readable singular label, used in confirmation messages.
    const LABEL: &'static str;

    /// Path-segment identifier type.
    type Id: Send;
    /// The stored record returned by every operation.
    type Record: Send;
    /// Creatable fields, deserialized from a POST body.
    type Draft: Send;
    /// Partial update, deserialized from a PUT body.
    type Patch: Send;

    /// Return all live records.
    fn list(&self) -> impl Future<Output = Result<Vec<Self::Record>, ShelfError>> + Send;

    /// Return the record with the given id, or NotFound.
    fn get(&self, id: Self::Id) -> impl Future<Output = Result<Self::Record, ShelfError>> + Send;

    /// Persist a new record; the store assigns id and timestamps.
    fn create(
        &self,
        draft: Self::Draft,
    ) -> impl Future<Output = Result<Self::Record, ShelfError>> + Send;

    /// Load the record, overlay the patch, and persist it back.
    fn update(
        &self,
        id: Self::Id,
        patch: Self::Patch,
    ) -> impl Future<Output = Result<Self::Record, ShelfError>> + Send;

    /// Soft-delete the record with the given id.
    fn delete(&self, id: Self::Id) -> impl Future<Output = Result<(), ShelfError>> + Send;
}

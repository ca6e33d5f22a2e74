//! Demo service — use-cases for managing demo records.

use std::future::Future;

use shelf_domain::demo::{Demo, DemoPatch, NewDemo};
use shelf_domain::error::{NotFoundError, ShelfError};
use shelf_domain::id::DemoId;

use crate::ports::DemoRepository;
use crate::resource::ResourceController;

/// Application service for demo CRUD operations.
pub struct DemoService<R> {
    repo: R,
}

impl<R: DemoRepository> DemoService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new demo from the given draft.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft), fields(demo_name = %draft.name))]
    pub async fn create_demo(&self, draft: NewDemo) -> Result<Demo, ShelfError> {
        self.repo.insert(draft).await
    }

    /// Look up a demo by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::NotFound`] when no live demo with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_demo(&self, id: DemoId) -> Result<Demo, ShelfError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Demo",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all live demos.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_demos(&self) -> Result<Vec<Demo>, ShelfError> {
        self.repo.get_all().await
    }

    /// Load an existing demo, overlay the patch, and persist the result.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::NotFound`] when no live demo with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_demo(&self, id: DemoId, patch: DemoPatch) -> Result<Demo, ShelfError> {
        let mut demo = self.get_demo(id).await?;
        demo.apply(patch);
        self.repo.update(demo).await
    }

    /// Soft-delete a demo by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::NotFound`] when no live demo with `id` exists,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_demo(&self, id: DemoId) -> Result<(), ShelfError> {
        self.get_demo(id).await?;
        self.repo.delete(id).await
    }
}

impl<R> ResourceController for DemoService<R>
where
    R: DemoRepository + Send + Sync,
{
    const LABEL: &'static str = "Demo";

    type Id = DemoId;
    type Record = Demo;
    type Draft = NewDemo;
    type Patch = DemoPatch;

    fn list(&self) -> impl Future<Output = Result<Vec<Demo>, ShelfError>> + Send {
        self.list_demos()
    }

    fn get(&self, id: DemoId) -> impl Future<Output = Result<Demo, ShelfError>> + Send {
        self.get_demo(id)
    }

    fn create(&self, draft: NewDemo) -> impl Future<Output = Result<Demo, ShelfError>> + Send {
        self.create_demo(draft)
    }

    fn update(
        &self,
        id: DemoId,
        patch: DemoPatch,
    ) -> impl Future<Output = Result<Demo, ShelfError>> + Send {
        self.update_demo(id, patch)
    }

    fn delete(&self, id: DemoId) -> impl Future<Output = Result<(), ShelfError>> + Send {
        self.delete_demo(id)
    }
}

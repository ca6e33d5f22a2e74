//! User service — use-cases for managing user records.

use std::future::Future;

use shelf_domain::error::{NotFoundError, ShelfError};
use shelf_domain::id::UserId;
use shelf_domain::user::{NewUser, User, UserPatch};

use crate::ports::UserRepository;
use crate::resource::ResourceController;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new user from the given draft.
    ///
    /// Any draft that deserialized is persisted as-is; the store assigns
    /// the id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft), fields(user_name = %draft.name))]
    pub async fn create_user(&self, draft: NewUser) -> Result<User, ShelfError> {
        self.repo.insert(draft).await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::NotFound`] when no live user with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_user(&self, id: UserId) -> Result<User, ShelfError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all live users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, ShelfError> {
        self.repo.get_all().await
    }

    /// Load an existing user, overlay the patch, and persist the result.
    ///
    /// Fields absent from the patch keep their prior values. The id and
    /// audit timestamps are never patchable.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::NotFound`] when no live user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, ShelfError> {
        let mut user = self.get_user(id).await?;
        user.apply(patch);
        self.repo.update(user).await
    }

    /// Soft-delete a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::NotFound`] when no live user with `id` exists,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), ShelfError> {
        self.get_user(id).await?;
        self.repo.delete(id).await
    }
}

impl<R> ResourceController for UserService<R>
where
    R: UserRepository + Send + Sync,
{
    const LABEL: &'static str = "User";

    type Id = UserId;
    type Record = User;
    type Draft = NewUser;
    type Patch = UserPatch;

    fn list(&self) -> impl Future<Output = Result<Vec<User>, ShelfError>> + Send {
        self.list_users()
    }

    fn get(&self, id: UserId) -> impl Future<Output = Result<User, ShelfError>> + Send {
        self.get_user(id)
    }

    fn create(&self, draft: NewUser) -> impl Future<Output = Result<User, ShelfError>> + Send {
        self.create_user(draft)
    }

    fn update(
        &self,
        id: UserId,
        patch: UserPatch,
    ) -> impl Future<Output = Result<User, ShelfError>> + Send {
        self.update_user(id, patch)
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), ShelfError>> + Send {
        self.delete_user(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_domain::time;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI64, Ordering};

    struct InMemoryUserRepo {
        store: Mutex<HashMap<UserId, User>>,
        next_id: AtomicI64,
    }

    impl Default for InMemoryUserRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }
        }
    }

    impl UserRepository for InMemoryUserRepo {
        fn insert(&self, draft: NewUser) -> impl Future<Output = Result<User, ShelfError>> + Send {
            let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
            let now = time::now();
            let user = User {
                id,
                name: draft.name,
                email: draft.email,
                created_at: now,
                updated_at: now,
            };
            let mut store = self.store.lock().unwrap();
            store.insert(id, user.clone());
            async { Ok(user) }
        }

        fn get_by_id(
            &self,
            id: UserId,
        ) -> impl Future<Output = Result<Option<User>, ShelfError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<User>, ShelfError>> + Send {
            let store = self.store.lock().unwrap();
            let mut result: Vec<User> = store.values().cloned().collect();
            result.sort_by_key(|u| u.id);
            async { Ok(result) }
        }

        fn update(&self, user: User) -> impl Future<Output = Result<User, ShelfError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(user.id, user.clone());
            async { Ok(user) }
        }

        fn delete(&self, id: UserId) -> impl Future<Output = Result<(), ShelfError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.remove(&id);
            async { Ok(()) }
        }
    }

    fn make_service() -> UserService<InMemoryUserRepo> {
        UserService::new(InMemoryUserRepo::default())
    }

    fn valid_draft() -> NewUser {
        NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_user_and_assign_id() {
        let svc = make_service();

        let created = svc.create_user(valid_draft()).await.unwrap();
        assert_eq!(created.id, UserId::new(1));

        let fetched = svc.get_user(created.id).await.unwrap();
        assert_eq!(fetched.name, "Ada");
        assert_eq!(fetched.email, "ada@example.com");
    }

    #[tokio::test]
    async fn should_create_user_with_empty_name() {
        let svc = make_service();
        let draft = NewUser {
            name: String::new(),
            email: String::new(),
        };

        let created = svc.create_user(draft).await.unwrap();
        assert_eq!(created.name, "");
        assert_eq!(created.id, UserId::new(1));
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_missing() {
        let svc = make_service();
        let result = svc.get_user(UserId::new(99)).await;
        assert!(matches!(result, Err(ShelfError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_users() {
        let svc = make_service();
        svc.create_user(valid_draft()).await.unwrap();
        svc.create_user(NewUser {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
        })
        .await
        .unwrap();

        let all = svc.list_users().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Ada");
        assert_eq!(all[1].name, "Grace");
    }

    #[tokio::test]
    async fn should_preserve_absent_fields_when_patching() {
        let svc = make_service();
        let created = svc.create_user(valid_draft()).await.unwrap();

        let updated = svc
            .update_user(
                created.id,
                UserPatch {
                    name: Some("Grace".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Grace");
        assert_eq!(updated.email, "ada@example.com");
    }

    #[tokio::test]
    async fn should_allow_patch_that_empties_the_name() {
        let svc = make_service();
        let created = svc.create_user(valid_draft()).await.unwrap();

        let updated = svc
            .update_user(
                created.id,
                UserPatch {
                    name: Some(String::new()),
                    email: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "");
        assert_eq!(updated.email, "ada@example.com");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_user() {
        let svc = make_service();
        let result = svc.update_user(UserId::new(42), UserPatch::default()).await;
        assert!(matches!(result, Err(ShelfError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_user() {
        let svc = make_service();
        let created = svc.create_user(valid_draft()).await.unwrap();

        svc.delete_user(created.id).await.unwrap();

        let result = svc.get_user(created.id).await;
        assert!(matches!(result, Err(ShelfError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_user() {
        let svc = make_service();
        let result = svc.delete_user(UserId::new(7)).await;
        assert!(matches!(result, Err(ShelfError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_expose_crud_through_resource_controller() {
        let svc = make_service();

        let created = ResourceController::create(&svc, valid_draft()).await.unwrap();
        let fetched = ResourceController::get(&svc, created.id).await.unwrap();
        assert_eq!(fetched, created);

        ResourceController::delete(&svc, created.id).await.unwrap();
        let all = ResourceController::list(&svc).await.unwrap();
        assert!(all.is_empty());
    }
}

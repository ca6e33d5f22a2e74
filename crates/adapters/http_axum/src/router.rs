//! Axum router assembly.

use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;

use shelf_app::resource::ResourceController;

use crate::resource::resources;

/// Build the top-level axum [`Router`].
///
/// Mounts the `users` and `demos` resources under `/api/v1` and adds a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<U, D>(users: Arc<U>, demos: Arc<D>) -> Router
where
    U: ResourceController + 'static,
    U::Id: FromStr + 'static,
    U::Record: Serialize + 'static,
    U::Draft: DeserializeOwned + 'static,
    U::Patch: DeserializeOwned + 'static,
    D: ResourceController + 'static,
    D::Id: FromStr + 'static,
    D::Record: Serialize + 'static,
    D::Draft: DeserializeOwned + 'static,
    D::Patch: DeserializeOwned + 'static,
{
    let api = Router::new()
        .merge(resources("users", users))
        .merge(resources("demos", demos));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

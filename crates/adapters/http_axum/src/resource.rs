//! The route-binder: mounts any controller as a conventional REST resource.
//!
//! [`resources`] takes a URL-safe resource name and a controller and returns
//! a router binding the five conventional routes:
//!
//! ```text
//! GET    /{name}        -> list
//! GET    /{name}/{id}   -> get
//! POST   /{name}        -> create
//! PUT    /{name}/{id}   -> update
//! DELETE /{name}/{id}   -> delete
//! ```
//!
//! Each resource sub-router carries its own controller as state, so adding a
//! new entity is: declare the record types, implement one trait, call
//! [`resources`] once at startup. Mounting the same name twice is a route
//! collision and panics when the router is built.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde::Serialize;
use serde::de::DeserializeOwned;

use shelf_app::resource::ResourceController;
use shelf_domain::error::{NotFoundError, ShelfError, ValidationError};

use crate::error::ApiError;

/// Build a sub-router exposing `controller` under `/{name}`.
pub fn resources<C>(name: &str, controller: Arc<C>) -> Router
where
    C: ResourceController + 'static,
    C::Id: FromStr + 'static,
    C::Record: Serialize + 'static,
    C::Draft: DeserializeOwned + 'static,
    C::Patch: DeserializeOwned + 'static,
{
    Router::new()
        .route(
            &format!("/{name}"),
            routing::get(list::<C>).post(create::<C>),
        )
        .route(
            &format!("/{name}/{{id}}"),
            routing::get(get::<C>).put(update::<C>).delete(delete::<C>),
        )
        .with_state(controller)
}

/// Confirmation body returned by the delete endpoint.
#[derive(Serialize)]
pub struct Confirmation {
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse<T> {
    Ok(Json<Vec<T>>),
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse<T> {
    Ok(Json<T>),
}

impl<T: Serialize> IntoResponse for GetResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse<T> {
    Created(Json<T>),
}

impl<T: Serialize> IntoResponse for CreateResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse<T> {
    Ok(Json<T>),
}

impl<T: Serialize> IntoResponse for UpdateResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted(Json<Confirmation>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(json) => json.into_response(),
        }
    }
}

fn parse_id<C>(raw: &str) -> Result<C::Id, ApiError>
where
    C: ResourceController,
    C::Id: FromStr,
{
    raw.parse()
        .map_err(|_| ApiError::from(ShelfError::from(ValidationError::InvalidId)))
}

/// `GET /{name}`
async fn list<C>(State(controller): State<Arc<C>>) -> Result<ListResponse<C::Record>, ApiError>
where
    C: ResourceController + 'static,
    C::Record: Serialize + 'static,
{
    let records = controller.list().await?;
    Ok(ListResponse::Ok(Json(records)))
}

/// `GET /{name}/{id}`
///
/// An id that does not parse cannot name any record, so a read reports it
/// as missing rather than as a client fault.
async fn get<C>(
    State(controller): State<Arc<C>>,
    Path(id): Path<String>,
) -> Result<GetResponse<C::Record>, ApiError>
where
    C: ResourceController + 'static,
    C::Id: FromStr + 'static,
    C::Record: Serialize + 'static,
{
    let Ok(id) = id.parse::<C::Id>() else {
        return Err(ShelfError::from(NotFoundError {
            entity: C::LABEL,
            id,
        })
        .into());
    };
    let record = controller.get(id).await?;
    Ok(GetResponse::Ok(Json(record)))
}

/// `POST /{name}`
async fn create<C>(
    State(controller): State<Arc<C>>,
    body: Result<Json<C::Draft>, JsonRejection>,
) -> Result<CreateResponse<C::Record>, ApiError>
where
    C: ResourceController + 'static,
    C::Record: Serialize + 'static,
    C::Draft: DeserializeOwned + 'static,
{
    let Json(draft) = body?;
    let created = controller.create(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /{name}/{id}`
///
/// A missing record takes precedence over a malformed body: the lookup
/// happens before the body is inspected.
async fn update<C>(
    State(controller): State<Arc<C>>,
    Path(id): Path<String>,
    body: Result<Json<C::Patch>, JsonRejection>,
) -> Result<UpdateResponse<C::Record>, ApiError>
where
    C: ResourceController + 'static,
    C::Id: FromStr + 'static,
    C::Record: Serialize + 'static,
    C::Patch: DeserializeOwned + 'static,
{
    let id = parse_id::<C>(&id)?;
    let patch = match body {
        Ok(Json(patch)) => patch,
        Err(rejection) => {
            controller.get(id).await?;
            return Err(rejection.into());
        }
    };
    let updated = controller.update(id, patch).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /{name}/{id}`
async fn delete<C>(
    State(controller): State<Arc<C>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    C: ResourceController + 'static,
    C::Id: FromStr + 'static,
{
    let id = parse_id::<C>(&id)?;
    controller.delete(id).await?;
    Ok(DeleteResponse::Deleted(Json(Confirmation {
        message: format!("{} deleted", C::LABEL),
    })))
}

//! # shelf-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST API (`/api/v1/users`, `/api/v1/demos`, …)
//! - Mount any [`ResourceController`](shelf_app::resource::ResourceController)
//!   as a conventional five-route resource via [`resource::resources`]
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application errors into status-coded `{"error": …}` JSON responses
//!
//! ## Dependency rule
//! Depends on `shelf-app` (for the controller trait) and `shelf-domain`
//! (for error types used in response mapping). Never leaks axum types into
//! the domain.

pub mod error;
pub mod resource;
pub mod router;

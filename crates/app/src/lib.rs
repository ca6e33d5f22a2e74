//! # shelf-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository` — persistence for users
//!   - `DemoRepository` — persistence for demos
//! - Define the **driving/inbound port**:
//!   - [`resource::ResourceController`] — the five-operation capability set
//!     (list, get, create, update, delete) that the HTTP adapter mounts
//! - Provide the services implementing it (`UserService`, `DemoService`)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `shelf-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod resource;
pub mod services;

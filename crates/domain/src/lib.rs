//! # shelf-domain
//!
//! Pure domain model for the shelf record service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **records** exposed as REST resources (users, demos)
//! - Define each record's **draft** (creatable fields) and **patch**
//!   (partial update) companion types
//!
//! Record shapes are the only constraint on client input: whatever
//! deserializes is persisted as-is. There is no per-field value validation.
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod demo;
pub mod user;

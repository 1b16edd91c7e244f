//! Prospect Challenge backend.
//!
//! A thin HTTP key-value service: one JSON document per user, fetched by id
//! and replaced wholesale on save. The service knows nothing about the
//! document's internal shape -- clients own the schema.

pub mod api;
pub mod store;

pub use api::create_router;
pub use store::{DocumentStore, StoreError};

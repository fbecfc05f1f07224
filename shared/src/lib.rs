//! Shared types for the catalog workspace
//!
//! Entity models, create/update payloads, and the client route table
//! used by both the client library and its front-ends.

pub mod models;
pub mod routes;

// Re-exports
pub use models::{Category, CategoryCreate, CategoryUpdate, Product, ProductCreate, ProductUpdate};
pub use routes::Route;
pub use serde::{Deserialize, Serialize};

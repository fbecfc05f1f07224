//! Data models
//!
//! Shared between the catalog client and its front-ends.
//! Wire format follows the catalog API: camelCase JSON, `i64` ids assigned by the server.

pub mod category;
pub mod product;

// Re-exports
pub use category::*;
pub use product::*;

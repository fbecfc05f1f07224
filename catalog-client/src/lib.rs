//! Catalog Client - data-synchronization layer for the catalog API
//!
//! Holds in-memory category/product collections per view, keeps derived
//! values (filtered lists, resolved names, related products) consistent
//! with them, and sequences writes with refresh-after-write: every
//! confirmed mutation is followed by a full re-fetch of the affected
//! collection.

pub mod client;
pub mod config;
pub mod derived;
pub mod error;
pub mod repository;
pub mod store;
pub mod validation;

pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use repository::{CategoryRepository, EntityKind, ProductRepository, Repository};
pub use store::{
    CategoryView, CommandOutcome, CommandPhase, ProductDetailView, ProductView, StoreEvent,
};

// Re-export shared types for convenience
pub use shared::Route;
pub use shared::models::{
    Category, CategoryCreate, CategoryUpdate, Product, ProductCreate, ProductUpdate,
};

//! Repository Module
//!
//! Typed CRUD access to the catalog API, one repository per entity kind.
//! Repositories are pass-through: no field validation happens here.

pub mod category;
pub mod product;

// Re-exports
pub use category::CategoryRepository;
pub use product::ProductRepository;

use crate::ClientResult;

/// Entity kinds held by the catalog views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    Product,
}

/// Common repository trait for basic CRUD
///
/// Writes resolve to the server's confirmation text.
#[allow(async_fn_in_trait)]
pub trait Repository<T, CreateDto, UpdateDto> {
    async fn find_all(&self) -> ClientResult<Vec<T>>;
    async fn find_by_id(&self, id: i64) -> ClientResult<T>;
    async fn create(&self, data: &CreateDto) -> ClientResult<String>;
    async fn update(&self, data: &UpdateDto) -> ClientResult<String>;
    async fn delete(&self, id: i64) -> ClientResult<String>;
}

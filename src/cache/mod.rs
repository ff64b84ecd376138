//! Read-through caching for catalog queries

pub mod cache_aside;
pub mod store;

// Re-exports for public API convenience
pub use cache_aside::CacheAside;
pub use store::{CacheError, CacheStore, MemoryStore};

//! # Product store
//!
//! A single file-backed table of products. Rows live in an in-memory
//! map guarded by a lock; every mutation rewrites a JSON snapshot file
//! atomically. Name uniqueness is enforced here, at the storage layer.

pub mod errors;
pub mod product;
pub mod table;

pub use errors::{StoreError, StoreResult};
pub use product::{Product, ProductInput};
pub use table::ProductTable;

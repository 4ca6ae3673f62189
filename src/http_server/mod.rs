//! # stockroom HTTP server
//!
//! Axum-based HTTP/JSON API mapping the five product CRUD routes onto
//! the store, with validation and error mapping around each:
//!
//! - `POST /product` - create
//! - `GET /product` - list all
//! - `GET /product/{id}` - fetch by id
//! - `PUT /product/{id}` - replace all mutable fields
//! - `DELETE /product/{id}` - remove, returning the prior row

pub mod errors;
pub mod routes;
pub mod server;

pub use errors::{ApiError, ApiResult};
pub use routes::{product_routes, AppState};
pub use server::HttpServer;

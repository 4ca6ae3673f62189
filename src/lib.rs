//! stockroom - a small file-backed product inventory HTTP service

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod store;
pub mod validate;

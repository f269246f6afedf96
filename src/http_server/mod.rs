//! # HTTP Server Module
//!
//! JSON API over the in-memory book store, built on Axum.
//!
//! # Endpoints
//!
//! - `/books`, `/books/:id` - book CRUD
//! - `/health` - health check
//! - `/observability/metrics` - counter snapshot

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use book_routes::BooksState;
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;

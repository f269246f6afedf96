//! bookstore - an in-memory book catalogue served over a JSON HTTP API
//!
//! - `book`: the `BookStore` collection and record types
//! - `http_server`: Axum routes and server
//! - `observability`: JSON logging and counters
//! - `cli`: command-line entry point

pub mod book;
pub mod cli;
pub mod http_server;
pub mod observability;

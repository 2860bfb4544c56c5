//! # HTTP Server Module
//!
//! Axum server for the user roster API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/v1/users` - User CRUD operations

pub mod server;
pub mod user_routes;

pub use server::HttpServer;
pub use user_routes::{user_routes, UserState};

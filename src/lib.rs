//! Animal Registry - A small in-memory CRUD service
//!
//! Keeps animal records keyed by id behind a reader/writer lock and serves
//! them over a versioned HTTP API.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::ApiError;
pub use models::Animal;
pub use store::AnimalStore;

//! Data models for the registry API
//!
//! This module defines the record type and the response DTOs used for
//! serializing/deserializing HTTP bodies.

pub mod animal;
pub mod responses;

// Re-export commonly used types
pub use animal::Animal;
pub use responses::HealthResponse;

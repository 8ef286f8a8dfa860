//! Store Module
//!
//! Provides the in-memory animal registry and its locking discipline.

mod animal_store;


// Re-export public types
pub use animal_store::AnimalStore;

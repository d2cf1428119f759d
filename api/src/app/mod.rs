//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod category_service;

pub use category_service::{CategoryService, CreateCategory};

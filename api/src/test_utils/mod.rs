//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//! - The recording repository keeps the exact arguments of every call
//!
//! Handler tests build the real router over these mocks and drive it with
//! axum-test.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

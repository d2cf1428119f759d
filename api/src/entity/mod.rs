//! SeaORM entity models
//!
//! Row-level mappings of the PostgreSQL tables, converted into domain
//! entities at the adapter boundary.

pub mod categories;
pub mod users;

//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod category;
pub mod user;

pub use category::{Category, CategoryFilter, CategoryId, CategoryType, NewCategory, OwnerFilter};
pub use user::{User, UserId};

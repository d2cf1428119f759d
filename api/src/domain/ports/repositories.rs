//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Category, CategoryFilter, CategoryId, NewCategory, User};
use crate::error::DomainError;

/// Repository for Category entities
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List every category matching the filter, in storage order
    async fn list_all(&self, filter: &CategoryFilter) -> Result<Vec<Category>, DomainError>;

    /// Create a new category
    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError>;

    /// Find the first category matching the filter
    async fn find_one(&self, filter: &CategoryFilter) -> Result<Option<Category>, DomainError>;

    /// Find a category by ID, regardless of owner
    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError>;
}

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by API key hash
    async fn find_by_api_key_hash(&self, hash: &str) -> Result<Option<User>, DomainError>;
}

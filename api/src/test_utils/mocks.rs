//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Category, CategoryFilter, CategoryId, NewCategory, User};
use crate::domain::ports::{CategoryRepository, UserRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Category Repository
// ============================================================================

/// Category store backed by a `Vec`, preserving insertion order
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<Vec<Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a category for testing
    pub fn with_category(self, category: Category) -> Self {
        self.categories.write().unwrap().push(category);
        self
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_all(&self, filter: &CategoryFilter) -> Result<Vec<Category>, DomainError> {
        let categories = self.categories.read().unwrap();
        Ok(categories
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }

    async fn create(&self, new_category: &NewCategory) -> Result<Category, DomainError> {
        let category = Category {
            id: CategoryId::new(),
            name: new_category.name.clone(),
            category_type: new_category.category_type,
            user_id: new_category.user_id,
            parent_id: new_category.parent_id,
            created_at: Utc::now(),
        };

        self.categories.write().unwrap().push(category.clone());
        Ok(category)
    }

    async fn find_one(&self, filter: &CategoryFilter) -> Result<Option<Category>, DomainError> {
        let categories = self.categories.read().unwrap();
        Ok(categories.iter().find(|c| filter.matches(c)).cloned())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        let categories = self.categories.read().unwrap();
        Ok(categories.iter().find(|c| &c.id == id).cloned())
    }
}

// ============================================================================
// Recording Category Repository
// ============================================================================

/// A call made against `RecordingCategoryRepository`
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryCall {
    ListAll(CategoryFilter),
    Create(NewCategory),
    FindOne(CategoryFilter),
    FindById(CategoryId),
}

/// Scripted repository that records every call.
///
/// Returns whatever it was configured with and ignores filters, so tests can
/// assert exactly what the caller asked for and that results pass through
/// untouched. `failing()` makes every call return a database error.
#[derive(Default)]
pub struct RecordingCategoryRepository {
    calls: Arc<RwLock<Vec<RepositoryCall>>>,
    list_result: Vec<Category>,
    find_result: Option<Category>,
    fail: bool,
}

impl RecordingCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records returned by every `list_all` call
    pub fn with_list_result(mut self, categories: Vec<Category>) -> Self {
        self.list_result = categories;
        self
    }

    /// Record returned by every `find_one` and `find_by_id` call
    pub fn with_find_result(mut self, category: Category) -> Self {
        self.find_result = Some(category);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn list_calls(&self) -> Vec<CategoryFilter> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RepositoryCall::ListAll(filter) => Some(filter),
                _ => None,
            })
            .collect()
    }

    pub fn create_calls(&self) -> Vec<NewCategory> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RepositoryCall::Create(category) => Some(category),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: RepositoryCall) -> Result<(), DomainError> {
        self.calls.write().unwrap().push(call);
        if self.fail {
            Err(DomainError::Database("connection reset by peer".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CategoryRepository for RecordingCategoryRepository {
    async fn list_all(&self, filter: &CategoryFilter) -> Result<Vec<Category>, DomainError> {
        self.record(RepositoryCall::ListAll(filter.clone()))?;
        Ok(self.list_result.clone())
    }

    async fn create(&self, new_category: &NewCategory) -> Result<Category, DomainError> {
        self.record(RepositoryCall::Create(new_category.clone()))?;
        Ok(Category {
            id: CategoryId::new(),
            name: new_category.name.clone(),
            category_type: new_category.category_type,
            user_id: new_category.user_id,
            parent_id: new_category.parent_id,
            created_at: Utc::now(),
        })
    }

    async fn find_one(&self, filter: &CategoryFilter) -> Result<Option<Category>, DomainError> {
        self.record(RepositoryCall::FindOne(filter.clone()))?;
        Ok(self.find_result.clone())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        self.record(RepositoryCall::FindById(*id))?;
        Ok(self.find_result.clone())
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    by_api_key: Arc<RwLock<HashMap<String, User>>>,
    fail: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.by_api_key
            .write()
            .unwrap()
            .insert(user.api_key_hash.clone(), user);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_api_key_hash(&self, hash: &str) -> Result<Option<User>, DomainError> {
        if self.fail {
            return Err(DomainError::Database("users table unavailable".to_string()));
        }
        let by_api_key = self.by_api_key.read().unwrap();
        Ok(by_api_key.get(hash).cloned())
    }
}

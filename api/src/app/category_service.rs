//! Category service
//!
//! Validates category requests and scopes every query to the requesting user.
//! The requester is always an explicit argument; ownership is never read from
//! client input.

use std::sync::Arc;

use crate::domain::entities::{
    Category, CategoryFilter, CategoryId, CategoryType, NewCategory, UserId,
};
use crate::domain::ports::CategoryRepository;
use crate::error::{AppError, DomainError};

/// Maximum length of a category name, in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// Unvalidated input for creating a category
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    pub category_type: String,
    pub parent_id: Option<CategoryId>,
}

/// Service for listing and creating categories
pub struct CategoryService<CR>
where
    CR: CategoryRepository + ?Sized,
{
    categories: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository + ?Sized,
{
    pub fn new(categories: Arc<CR>) -> Self {
        Self { categories }
    }

    /// List the user's own categories plus every system default.
    ///
    /// Records come back in the order the repository returned them.
    pub async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Category>, AppError> {
        let categories = self
            .categories
            .list_all(&CategoryFilter::visible_to(*user_id))
            .await?;

        tracing::debug!(user_id = %user_id, count = categories.len(), "Listed categories");
        Ok(categories)
    }

    /// Create a category owned by `user_id`
    pub async fn create_for_user(
        &self,
        user_id: &UserId,
        request: CreateCategory,
    ) -> Result<Category, AppError> {
        let name = validate_name(&request.name)?;
        let category_type = validate_type(&request.category_type)?;

        if let Some(parent_id) = request.parent_id {
            let parent = self
                .categories
                .find_one(&CategoryFilter::visible_to(*user_id).with_id(parent_id))
                .await?
                .ok_or_else(|| {
                    DomainError::NotFound(format!("Parent category {} not found", parent_id))
                })?;

            if parent.category_type != category_type {
                return Err(DomainError::Validation(format!(
                    "Parent category is {} but the new category is {}",
                    parent.category_type, category_type
                ))
                .into());
            }
        }

        let new_category = NewCategory {
            name,
            category_type,
            user_id: Some(*user_id),
            parent_id: request.parent_id,
        };

        let category = self.categories.create(&new_category).await?;

        tracing::info!(
            user_id = %user_id,
            category_id = %category.id,
            "Created category"
        );
        Ok(category)
    }

    /// Get a single category visible to `user_id`.
    ///
    /// Another user's category is reported as missing.
    pub async fn get_for_user(
        &self,
        user_id: &UserId,
        id: &CategoryId,
    ) -> Result<Category, AppError> {
        self.categories
            .find_by_id(id)
            .await?
            .filter(|c| c.is_visible_to(user_id))
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }
}

fn validate_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::Validation(
            "Name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::Validation(format!(
            "Name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(name.to_string())
}

fn validate_type(category_type: &str) -> Result<CategoryType, DomainError> {
    category_type.parse::<CategoryType>().map_err(|_| {
        DomainError::Validation(format!(
            "Type must be one of {} or {}",
            CategoryType::Expense,
            CategoryType::Income
        ))
    })
}

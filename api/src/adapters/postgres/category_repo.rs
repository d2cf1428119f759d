//! PostgreSQL adapter for CategoryRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Category, CategoryFilter, CategoryId, NewCategory, OwnerFilter};
use crate::domain::ports::CategoryRepository;
use crate::entity::categories;
use crate::error::DomainError;

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Translate a `CategoryFilter` into a SQL condition.
///
/// `VisibleTo` becomes `user_id = $1 OR user_id IS NULL`.
pub(crate) fn filter_condition(filter: &CategoryFilter) -> Condition {
    let mut condition = match filter.owner {
        OwnerFilter::Any => Condition::all(),
        OwnerFilter::VisibleTo(user_id) => Condition::all().add(
            Condition::any()
                .add(categories::Column::UserId.eq(user_id.0))
                .add(categories::Column::UserId.is_null()),
        ),
    };

    if let Some(id) = filter.id {
        condition = condition.add(categories::Column::Id.eq(id.0));
    }
    if let Some(name) = &filter.name {
        condition = condition.add(categories::Column::Name.eq(name.as_str()));
    }
    if let Some(category_type) = filter.category_type {
        condition = condition.add(categories::Column::CategoryType.eq(category_type.to_string()));
    }
    if let Some(parent_id) = filter.parent_id {
        condition = condition.add(categories::Column::ParentId.eq(parent_id.0));
    }

    condition
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list_all(&self, filter: &CategoryFilter) -> Result<Vec<Category>, DomainError> {
        let results = categories::Entity::find()
            .filter(filter_condition(filter))
            .order_by_asc(categories::Column::CreatedAt)
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Category::try_from).collect()
    }

    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError> {
        let model = categories::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(category.name.clone()),
            category_type: Set(category.category_type.to_string()),
            user_id: Set(category.user_id.map(|id| id.0)),
            parent_id: Set(category.parent_id.map(|id| id.0)),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.try_into()
    }

    async fn find_one(&self, filter: &CategoryFilter) -> Result<Option<Category>, DomainError> {
        let result = categories::Entity::find()
            .filter(filter_condition(filter))
            .order_by_asc(categories::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Category::try_from).transpose()
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, DomainError> {
        let result = categories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Category::try_from).transpose()
    }
}

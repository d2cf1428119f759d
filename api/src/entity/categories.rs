//! `categories` table

use sea_orm::entity::prelude::*;

use crate::domain::entities::{Category, CategoryId, CategoryType, UserId};
use crate::error::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// EXPENSE or INCOME
    #[sea_orm(column_name = "type")]
    pub category_type: String,
    /// NULL for system defaults
    pub user_id: Option<Uuid>,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id"
    )]
    Parent,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Category {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let category_type = model.category_type.parse::<CategoryType>().map_err(|e: String| {
            DomainError::Internal(format!("Category {} has invalid type: {}", model.id, e))
        })?;

        Ok(Category {
            id: CategoryId(model.id),
            name: model.name,
            category_type,
            user_id: model.user_id.map(UserId),
            parent_id: model.parent_id.map(CategoryId),
            created_at: model.created_at.with_timezone(&chrono::Utc),
        })
    }
}

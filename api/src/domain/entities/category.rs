//! Category domain entity
//!
//! A budget category. Categories form a forest under each root type and are
//! either owned by a user or shared by everyone as system defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// Unique identifier for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CategoryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Root classification of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryType {
    Expense,
    Income,
}

impl std::fmt::Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryType::Expense => write!(f, "EXPENSE"),
            CategoryType::Income => write!(f, "INCOME"),
        }
    }
}

impl std::str::FromStr for CategoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EXPENSE" => Ok(CategoryType::Expense),
            "INCOME" => Ok(CategoryType::Income),
            _ => Err(format!("Unknown category type: {}", s)),
        }
    }
}

/// A budget category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    /// `None` marks a system default shared by every user
    pub user_id: Option<UserId>,
    pub parent_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Check if this is a system default category
    pub fn is_system_default(&self) -> bool {
        self.user_id.is_none()
    }

    /// Check if the given user may see this category
    pub fn is_visible_to(&self, user_id: &UserId) -> bool {
        self.is_system_default() || self.user_id.as_ref() == Some(user_id)
    }
}

/// Data needed to create a new category
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub category_type: CategoryType,
    pub user_id: Option<UserId>,
    pub parent_id: Option<CategoryId>,
}

/// Ownership constraint for category queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerFilter {
    /// No ownership constraint
    Any,
    /// Owned by the user OR a system default
    VisibleTo(UserId),
}

/// Query constraint passed to the category repository
///
/// `matches` is the reference semantics; every repository adapter must select
/// the same records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    pub owner: OwnerFilter,
    pub id: Option<CategoryId>,
    pub name: Option<String>,
    pub category_type: Option<CategoryType>,
    pub parent_id: Option<CategoryId>,
}

impl CategoryFilter {
    /// Match every category
    pub fn all() -> Self {
        Self {
            owner: OwnerFilter::Any,
            id: None,
            name: None,
            category_type: None,
            parent_id: None,
        }
    }

    /// Categories owned by `user_id` plus all system defaults
    pub fn visible_to(user_id: UserId) -> Self {
        Self {
            owner: OwnerFilter::VisibleTo(user_id),
            ..Self::all()
        }
    }

    pub fn with_id(mut self, id: CategoryId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn matches(&self, category: &Category) -> bool {
        let owner_ok = match &self.owner {
            OwnerFilter::Any => true,
            OwnerFilter::VisibleTo(user_id) => category.is_visible_to(user_id),
        };

        owner_ok
            && self.id.map_or(true, |id| category.id == id)
            && self.name.as_ref().map_or(true, |name| &category.name == name)
            && self
                .category_type
                .map_or(true, |t| category.category_type == t)
            && self
                .parent_id
                .map_or(true, |p| category.parent_id == Some(p))
    }
}

//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;
use uuid::Uuid;

use crate::auth::hash_api_key;
use crate::domain::entities::{Category, CategoryId, CategoryType, User, UserId};

/// API key accepted for `test_user_with_key`
pub const TEST_API_KEY: &str = "bb-test-api-key";

/// Create a test user that authenticates with the given API key
pub fn test_user_with_key(api_key: &str) -> User {
    User {
        id: UserId(Uuid::new_v4()),
        name: format!("user-{}", &api_key[..api_key.len().min(8)]),
        api_key_hash: hash_api_key(api_key),
        created_at: Utc::now(),
    }
}

/// Create a category owned by `user_id`
pub fn test_category(user_id: UserId, name: &str, category_type: CategoryType) -> Category {
    Category {
        id: CategoryId(Uuid::new_v4()),
        name: name.to_string(),
        category_type,
        user_id: Some(user_id),
        parent_id: None,
        created_at: Utc::now(),
    }
}

/// Create a system default category (no owner)
pub fn test_system_category(name: &str, category_type: CategoryType) -> Category {
    Category {
        id: CategoryId(Uuid::new_v4()),
        name: name.to_string(),
        category_type,
        user_id: None,
        parent_id: None,
        created_at: Utc::now(),
    }
}

/// Create a child category under `parent`, inheriting its type and owner
pub fn test_child_category(parent: &Category, name: &str) -> Category {
    Category {
        id: CategoryId(Uuid::new_v4()),
        name: name.to_string(),
        category_type: parent.category_type,
        user_id: parent.user_id,
        parent_id: Some(parent.id),
        created_at: Utc::now(),
    }
}

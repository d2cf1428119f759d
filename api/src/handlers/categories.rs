//! Category handlers
//!
//! Endpoints for listing, creating and reading budget categories. The
//! requester comes from `auth_middleware` and is passed to the service
//! explicitly.

use axum::{extract::State, Extension};
use serde::Deserialize;
use uuid::Uuid;

use super::{AppJson, AppPath};
use crate::app::CreateCategory;
use crate::auth::AuthenticatedUser;
use crate::domain::entities::{Category, CategoryId};
use crate::envelope::ApiResponse;
use crate::error::AppError;
use crate::AppState;

/// Request body for creating a category
///
/// Ownership is not part of the body; a client-supplied `userId` is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub category_type: String,
    pub parent_id: Option<Uuid>,
}

impl From<CreateCategoryRequest> for CreateCategory {
    fn from(request: CreateCategoryRequest) -> Self {
        Self {
            name: request.name,
            category_type: request.category_type,
            parent_id: request.parent_id.map(CategoryId),
        }
    }
}

/// GET /categories
///
/// List the requester's categories plus all system defaults.
pub async fn list_categories(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiResponse<Vec<Category>>, AppError> {
    let categories = state.category_service.list_for_user(&user.id).await?;

    Ok(ApiResponse::ok(
        "Categories retrieved successfully",
        categories,
    ))
}

/// POST /categories
///
/// Create a category owned by the requester.
pub async fn create_category(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    AppJson(request): AppJson<CreateCategoryRequest>,
) -> Result<ApiResponse<Category>, AppError> {
    let category = state
        .category_service
        .create_for_user(&user.id, request.into())
        .await?;

    Ok(ApiResponse::created(
        "Category created successfully",
        category,
    ))
}

/// GET /categories/:id
pub async fn get_category(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    AppPath(id): AppPath<Uuid>,
) -> Result<ApiResponse<Category>, AppError> {
    let category = state
        .category_service
        .get_for_user(&user.id, &CategoryId(id))
        .await?;

    Ok(ApiResponse::ok("Category retrieved successfully", category))
}

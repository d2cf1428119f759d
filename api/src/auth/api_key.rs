//! API key authentication middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use sha2::{Digest, Sha256};

use crate::domain::entities::{User, UserId};
use crate::error::AppError;
use crate::AppState;

/// The requester identity resolved from the API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

/// Hash an API key for storage and lookup
pub fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Extract the API key from the Authorization header
fn extract_api_key(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|key| !key.is_empty())
}

/// Authentication middleware
///
/// Validates the API key and injects the `AuthenticatedUser` into request
/// extensions. Routes that require authentication should use this middleware.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = extract_api_key(&request).ok_or_else(|| {
        tracing::warn!(path = %request.uri().path(), "Missing API key");
        AppError::Unauthorized
    })?;

    let key_hash = hash_api_key(api_key);

    let user = state
        .user_repo
        .find_by_api_key_hash(&key_hash)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Unknown API key");
            AppError::Unauthorized
        })?;

    let user = AuthenticatedUser::from(user);
    tracing::debug!(user_id = %user.id, user = %user.name, "Authenticated request");
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

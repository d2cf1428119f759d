//! HTTP handlers
//!
//! Axum request handlers for the API endpoints, plus the extractors that
//! route request rejections through `AppError`.

use axum::{
    extract::{FromRequest, FromRequestParts},
    Json,
};
use serde::Serialize;

use crate::error::AppError;

pub mod categories;

pub use categories::{create_category, get_category, list_categories};

/// `Json` extractor whose rejection is rendered as the error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Path` extractor whose rejection is rendered as the error envelope
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

//! Budgetbook API Server
//!
//! Serves user-scoped budget categories over JSON. System default categories
//! (no owner) are visible to every user alongside their own.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use sea_orm::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod envelope;
mod error;
mod handlers;
mod routes;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresCategoryRepository, PostgresUserRepository};
use app::CategoryService;
use config::Config;
use domain::ports::{CategoryRepository, UserRepository};

/// Application state shared across all handlers
///
/// Repositories are trait objects so the same router runs over PostgreSQL in
/// production and over in-memory mocks in tests.
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService<dyn CategoryRepository>>,
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(categories: Arc<dyn CategoryRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            category_service: Arc::new(CategoryService::new(categories)),
            user_repo: users,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,budgetbook_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Budgetbook API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let category_repo = Arc::new(PostgresCategoryRepository::new(db.clone()));
    let user_repo = Arc::new(PostgresUserRepository::new(db));

    let state = AppState::new(category_repo, user_repo);
    let app = routes::build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}

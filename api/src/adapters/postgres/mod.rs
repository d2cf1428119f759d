//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod category_repo;
pub mod user_repo;


pub use category_repo::PostgresCategoryRepository;
pub use user_repo::PostgresUserRepository;

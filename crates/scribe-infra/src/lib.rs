//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`.
//! This crate contains the persistence substrate and the token service.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory store only
//! - `postgres` - Durable PostgreSQL store via SeaORM

pub mod auth;
pub mod store;

// Re-exports - In-Memory
pub use store::InMemoryBlogStore;

pub use auth::JwtTokenService;

// Re-exports - Postgres
pub use store::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use store::PostgresBlogStore;

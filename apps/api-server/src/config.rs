//! Application configuration loaded from environment variables.

use std::env;

use uuid::Uuid;

use scribe_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub blog_name: String,
    pub blog_owner: Uuid,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        // The owner is recorded on first initialization only; it identifies
        // whoever stood the blog up and gates nothing.
        let blog_owner = env::var("BLOG_OWNER")
            .ok()
            .and_then(|s| Uuid::parse_str(&s).ok())
            .unwrap_or_else(|| {
                tracing::warn!("BLOG_OWNER not set or invalid. Using the nil owner id.");
                Uuid::nil()
            });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            blog_name: env::var("BLOG_NAME").unwrap_or_else(|_| "Blogger".to_string()),
            blog_owner,
        }
    }
}

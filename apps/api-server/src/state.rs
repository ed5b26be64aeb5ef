//! Application state - shared across all handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use scribe_core::domain::Blog;
use scribe_core::ports::BlogStore;
use scribe_infra::InMemoryBlogStore;

#[cfg(feature = "postgres")]
use scribe_infra::PostgresBlogStore;

use crate::config::AppConfig;

/// Shared application state.
///
/// The blog aggregate sits behind a single `RwLock`: writers take the lock
/// for the whole mutate-and-commit span, so every operation observes the
/// store fully applied or not at all.
#[derive(Clone)]
pub struct AppState {
    pub blog: Arc<RwLock<Blog>>,
    pub store: Arc<dyn BlogStore>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let store: Arc<dyn BlogStore> = match &config.database {
            Some(db_config) => match scribe_infra::store::connect(db_config).await {
                Ok(db) => Arc::new(PostgresBlogStore::new(db, &config.blog_name)),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryBlogStore::new())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryBlogStore::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let store: Arc<dyn BlogStore> = {
            tracing::info!("Running without postgres feature - using in-memory store");
            Arc::new(InMemoryBlogStore::new())
        };

        let blog = match store.load().await {
            Ok(Some(blog)) => {
                tracing::info!(
                    blog = blog.name(),
                    posts = blog.posts().len(),
                    "Resumed persisted blog"
                );
                blog
            }
            Ok(None) => {
                let blog = Blog::new(config.blog_name.clone(), config.blog_owner);
                if let Err(e) = store.init(&blog).await {
                    tracing::error!("Failed to initialize blog storage: {}", e);
                }
                tracing::info!(blog = blog.name(), "Created new blog");
                blog
            }
            Err(e) => {
                tracing::error!("Failed to load persisted blog: {}. Starting empty.", e);
                Blog::new(config.blog_name.clone(), config.blog_owner)
            }
        };

        tracing::info!("Application state initialized");

        Self {
            blog: Arc::new(RwLock::new(blog)),
            store,
        }
    }
}

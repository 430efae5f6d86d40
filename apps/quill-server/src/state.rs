//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use quill_core::ports::{
    AuthorRepository, PasswordService, PostRepository, TemplateRenderer, TokenService,
};
use quill_infra::{Argon2PasswordService, InMemoryStore, JwtConfig, JwtTokenService};

#[cfg(feature = "postgres")]
use quill_infra::{DatabaseConnections, PostgresAuthorRepository, PostgresPostRepository};

use crate::config::AppConfig;
use crate::pages;

/// Shared application state, built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub authors: Arc<dyn AuthorRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    pub pages: Arc<dyn TemplateRenderer>,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// Without `DATABASE_URL` the server runs on the in-memory store. A
    /// configured database that cannot be reached is a startup error.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let (authors, posts) = match &config.database {
            #[cfg(feature = "postgres")]
            Some(db_config) => {
                let connections = DatabaseConnections::init(db_config)
                    .await
                    .context("Failed to connect to database")?;
                let authors: Arc<dyn AuthorRepository> =
                    Arc::new(PostgresAuthorRepository::new(connections.main.clone()));
                let posts: Arc<dyn PostRepository> =
                    Arc::new(PostgresPostRepository::new(connections.main));
                (authors, posts)
            }
            #[cfg(not(feature = "postgres"))]
            Some(_) => {
                anyhow::bail!("DATABASE_URL is set but the server was built without postgres")
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running with the in-memory store.");
                in_memory_store()
            }
        };

        let state = Self::assemble(authors, posts, config.jwt.clone())?;
        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(jwt: JwtConfig) -> anyhow::Result<Self> {
        let (authors, posts) = in_memory_store();
        Self::assemble(authors, posts, jwt)
    }

    fn assemble(
        authors: Arc<dyn AuthorRepository>,
        posts: Arc<dyn PostRepository>,
        jwt: JwtConfig,
    ) -> anyhow::Result<Self> {
        let pages = pages::renderer().context("Failed to compile page templates")?;

        Ok(Self {
            authors,
            posts,
            tokens: Arc::new(JwtTokenService::new(jwt)),
            passwords: Arc::new(Argon2PasswordService::new()),
            pages: Arc::new(pages),
        })
    }
}

fn in_memory_store() -> (Arc<dyn AuthorRepository>, Arc<dyn PostRepository>) {
    let store = Arc::new(InMemoryStore::new());
    let authors: Arc<dyn AuthorRepository> = store.clone();
    let posts: Arc<dyn PostRepository> = store;
    (authors, posts)
}

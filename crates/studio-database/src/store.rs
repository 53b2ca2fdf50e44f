//! The set of repositories behind the site, for whichever backend is
//! configured.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use studio_core::config::{DatabaseConfig, StoreProvider};
use studio_core::result::AppResult;
use studio_core::traits::{Document, DocumentRepository};
use studio_entity::{
    GeneralGallery, Media, OfficeGallery, Person, Post, Product, Project, SiteInfo,
};

use crate::connection::{self, DatabasePool};
use crate::memory::{MemoryDocumentRepository, MemoryUserRepository};
use crate::migration::run_migrations;
use crate::repositories::{PgDocumentRepository, PgUserRepository, UserStore};

/// Shared handle to one collection.
pub type Repo<T> = Arc<dyn DocumentRepository<T>>;

/// Every collection the site stores, plus user accounts.
#[derive(Clone)]
pub struct ContentStore {
    pub media: Repo<Media>,
    pub people: Repo<Person>,
    pub posts: Repo<Post>,
    pub products: Repo<Product>,
    pub projects: Repo<Project>,
    pub site_info: Repo<SiteInfo>,
    pub office_galleries: Repo<OfficeGallery>,
    pub general_galleries: Repo<GeneralGallery>,
    pub users: Arc<dyn UserStore>,
    provider: StoreProvider,
    pool: Option<PgPool>,
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

impl ContentStore {
    /// Open the configured backend.
    ///
    /// For PostgreSQL this initializes the process-wide pool and applies
    /// pending migrations before any repository is handed out.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                let db = DatabasePool::init(config).await?;
                run_migrations(db.pool()).await?;
                Ok(Self::postgres(db.pool().clone()))
            }
            StoreProvider::Memory => {
                info!("Using in-memory content store; data will not persist");
                Ok(Self::memory())
            }
        }
    }

    /// Repositories over an existing PostgreSQL pool.
    pub fn postgres(pool: PgPool) -> Self {
        fn repo<T: Document>(pool: &PgPool) -> Repo<T> {
            Arc::new(PgDocumentRepository::<T>::new(pool.clone()))
        }

        Self {
            media: repo(&pool),
            people: repo(&pool),
            posts: repo(&pool),
            products: repo(&pool),
            projects: repo(&pool),
            site_info: repo(&pool),
            office_galleries: repo(&pool),
            general_galleries: repo(&pool),
            users: Arc::new(PgUserRepository::new(pool.clone())),
            provider: StoreProvider::Postgres,
            pool: Some(pool),
        }
    }

    /// Fresh, empty in-memory repositories.
    pub fn memory() -> Self {
        fn repo<T: Document>() -> Repo<T> {
            Arc::new(MemoryDocumentRepository::<T>::new())
        }

        Self {
            media: repo(),
            people: repo(),
            posts: repo(),
            products: repo(),
            projects: repo(),
            site_info: repo(),
            office_galleries: repo(),
            general_galleries: repo(),
            users: Arc::new(MemoryUserRepository::new()),
            provider: StoreProvider::Memory,
            pool: None,
        }
    }

    /// Which backend is in use.
    pub fn provider(&self) -> StoreProvider {
        self.provider
    }

    /// Check that the backend can serve queries.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => connection::ping(pool).await,
            None => Ok(true),
        }
    }
}

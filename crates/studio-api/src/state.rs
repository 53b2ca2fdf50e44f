//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use studio_auth::{PasswordHasher, PasswordValidator, SessionTokens};
use studio_core::config::AppConfig;
use studio_database::ContentStore;
use studio_entity::{General, Office};
use studio_service::{
    ContentService, CredentialService, GalleryService, MediaService, PersonService, PostService,
    ProductService, ProjectService, SearchService, SiteService,
};
use studio_storage::AssetManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Content store (PostgreSQL or in-memory)
    pub store: ContentStore,
    /// Asset lifecycle over the public uploads directory
    pub assets: Arc<AssetManager>,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token issuer and verifier
    pub tokens: Arc<SessionTokens>,
    /// Signup, signin and session inspection
    pub credentials: Arc<CredentialService>,

    // ── Services ─────────────────────────────────────────────
    pub media: Arc<MediaService>,
    pub people: Arc<PersonService>,
    pub posts: Arc<PostService>,
    pub products: Arc<ProductService>,
    pub projects: Arc<ProjectService>,
    pub site: Arc<SiteService>,
    pub office_gallery: Arc<GalleryService<Office>>,
    pub general_gallery: Arc<GalleryService<General>>,
    /// Cross-collection search
    pub search: Arc<SearchService>,
}

impl AppState {
    /// Wire every service over one store and one asset manager.
    pub fn new(config: AppConfig, store: ContentStore, assets: Arc<AssetManager>) -> Self {
        let tokens = Arc::new(SessionTokens::new(&config.auth));
        let credentials = Arc::new(CredentialService::new(
            Arc::clone(&store.users),
            Arc::new(PasswordHasher::new()),
            Arc::new(PasswordValidator::new(&config.auth)),
            Arc::clone(&tokens),
        ));

        let media = MediaService::new(ContentService::new(
            Arc::clone(&store.media),
            Arc::clone(&assets),
        ));
        let people = PersonService::new(ContentService::new(
            Arc::clone(&store.people),
            Arc::clone(&assets),
        ));
        let posts = PostService::new(ContentService::new(
            Arc::clone(&store.posts),
            Arc::clone(&assets),
        ));
        let products = ProductService::new(ContentService::new(
            Arc::clone(&store.products),
            Arc::clone(&assets),
        ));
        let projects = ProjectService::new(ContentService::new(
            Arc::clone(&store.projects),
            Arc::clone(&assets),
        ));
        let site = SiteService::new(ContentService::new(
            Arc::clone(&store.site_info),
            Arc::clone(&assets),
        ));
        let office_gallery = GalleryService::new(ContentService::new(
            Arc::clone(&store.office_galleries),
            Arc::clone(&assets),
        ));
        let general_gallery = GalleryService::new(ContentService::new(
            Arc::clone(&store.general_galleries),
            Arc::clone(&assets),
        ));
        let search = SearchService::new(
            Arc::clone(&store.posts),
            Arc::clone(&store.projects),
            Arc::clone(&store.products),
        );

        Self {
            config: Arc::new(config),
            store,
            assets,
            tokens,
            credentials,
            media: Arc::new(media),
            people: Arc::new(people),
            posts: Arc::new(posts),
            products: Arc::new(products),
            projects: Arc::new(projects),
            site: Arc::new(site),
            office_gallery: Arc::new(office_gallery),
            general_gallery: Arc::new(general_gallery),
            search: Arc::new(search),
        }
    }
}

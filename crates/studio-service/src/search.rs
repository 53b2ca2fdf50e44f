//! Free-text search across posts, projects, and products.
//!
//! The three collections are queried concurrently, merged newest first,
//! and paginated as one list, so `total_items` and `total_pages` describe
//! exactly the pages a client can request.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::traits::DocumentRepository;
use studio_core::types::{PageRequest, PageResponse};
use studio_entity::{Post, Product, Project};

/// Which collection a hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Post,
    Project,
    Product,
}

impl SearchKind {
    /// Public page prefix for this kind.
    pub fn route(&self) -> &'static str {
        match self {
            Self::Post => "/journal",
            Self::Project => "/work",
            Self::Product => "/etha",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post => write!(f, "post"),
            Self::Project => write!(f, "project"),
            Self::Product => write!(f, "product"),
        }
    }
}

/// One search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: Uuid,
    pub kind: SearchKind,
    pub title: String,
    /// Representative image, if the document has one.
    pub image: Option<String>,
    /// Public page for the document.
    pub link: String,
    pub created_at: DateTime<Utc>,
}

impl SearchHit {
    fn new(
        kind: SearchKind,
        id: Uuid,
        title: &str,
        image: Option<&String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.to_string(),
            image: image.cloned(),
            link: format!("{}/{id}", kind.route()),
            created_at,
        }
    }
}

impl From<Post> for SearchHit {
    fn from(post: Post) -> Self {
        Self::new(
            SearchKind::Post,
            post.id.into_uuid(),
            &post.title,
            Some(&post.cover),
            post.created_at,
        )
    }
}

impl From<Project> for SearchHit {
    fn from(project: Project) -> Self {
        Self::new(
            SearchKind::Project,
            project.id.into_uuid(),
            &project.title,
            Some(&project.cover.url),
            project.created_at,
        )
    }
}

impl From<Product> for SearchHit {
    fn from(product: Product) -> Self {
        Self::new(
            SearchKind::Product,
            product.id.into_uuid(),
            &product.name,
            product.images.first(),
            product.created_at,
        )
    }
}

/// Cross-collection search.
#[derive(Clone)]
pub struct SearchService {
    posts: Arc<dyn DocumentRepository<Post>>,
    projects: Arc<dyn DocumentRepository<Project>>,
    products: Arc<dyn DocumentRepository<Product>>,
}

impl fmt::Debug for SearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchService").finish_non_exhaustive()
    }
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(
        posts: Arc<dyn DocumentRepository<Post>>,
        projects: Arc<dyn DocumentRepository<Project>>,
        products: Arc<dyn DocumentRepository<Product>>,
    ) -> Self {
        Self {
            posts,
            projects,
            products,
        }
    }

    /// Case-insensitive substring search over titles and product names.
    pub async fn search(&self, query: &str, page: &PageRequest) -> AppResult<PageResponse<SearchHit>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::validation("Search query is required."));
        }

        let (posts, projects, products) = tokio::try_join!(
            self.posts.search_title(query),
            self.projects.search_title(query),
            self.products.search_title(query),
        )?;

        let mut hits: Vec<SearchHit> = posts
            .into_iter()
            .map(SearchHit::from)
            .chain(projects.into_iter().map(SearchHit::from))
            .chain(products.into_iter().map(SearchHit::from))
            .collect();
        hits.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));

        debug!(query, total = hits.len(), "Search completed");
        Ok(PageResponse::from_sorted(hits, page))
    }
}

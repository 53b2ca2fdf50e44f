//! # studio-service
//!
//! Business logic for the studio site. Every content collection goes
//! through one generic [`content::ContentService`], which owns the asset
//! bookkeeping; the per-entity services on top of it only validate input
//! and decide which files to store.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod content;
pub mod credential;
pub mod gallery;
pub mod media;
pub mod person;
pub mod post;
pub mod product;
pub mod project;
pub mod search;
pub mod site;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use content::{ContentService, StagedAssets};
pub use credential::{CredentialService, SignedIn, SigninInput, SignupInput};
pub use gallery::GalleryService;
pub use media::{MediaEdit, MediaService, MediaUpload};
pub use person::{PersonInput, PersonService};
pub use post::{PostInput, PostService};
pub use product::{ProductInput, ProductService};
pub use project::{ProjectInput, ProjectService};
pub use search::{SearchHit, SearchKind, SearchService};
pub use site::{SiteInput, SiteService};

//! # studio-entity
//!
//! Document models for the studio site. Every content struct implements
//! [`studio_core::traits::Document`], which tells the generic repositories
//! and the content service where the document lives and which asset files
//! it owns. Field names serialize in camelCase to match the form and JSON
//! contracts of the public site.

pub mod gallery;
pub mod media;
pub mod person;
pub mod post;
pub mod product;
pub mod project;
pub mod site;
pub mod user;

pub use gallery::{Gallery, GalleryKind, General, GeneralGallery, Office, OfficeGallery};
pub use media::Media;
pub use person::Person;
pub use post::Post;
pub use product::Product;
pub use project::{ImageRef, Project, ProjectDetails};
pub use site::{NavbarImage, NavbarImages, NavbarSection, SiteInfo, SocialLinks};
pub use user::{NewUser, User, UserProfile, UserRole};

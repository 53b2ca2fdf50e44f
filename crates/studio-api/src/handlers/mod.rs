//! Route handlers organized by domain.

pub mod auth;
pub mod gallery;
pub mod health;
pub mod media;
pub mod people;
pub mod posts;
pub mod products;
pub mod projects;
pub mod search;
pub mod site;
pub mod user;

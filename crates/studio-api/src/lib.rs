//! # studio-api
//!
//! HTTP API layer for the studio site built on Axum.
//!
//! Provides the REST endpoints under `/api`, the access gate in front of
//! private paths, request logging, the multipart form extractor, DTOs,
//! and static serving of uploaded assets.

pub mod app;
pub mod cookie;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use state::AppState;

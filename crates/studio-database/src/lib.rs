//! # studio-database
//!
//! Content store backends for the studio site: the process-wide PostgreSQL
//! pool, migrations, one generic JSONB repository shared by every document
//! collection, the typed user repository, and in-memory equivalents used in
//! development and tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::user::UserStore;
pub use store::ContentStore;

//! SQLite storage implementation for Fleetfolio.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `fleetfolio-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations (including the seeded insurance tier table)
//! - Repository implementations for the catalog, fleet, and insurance domains
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! `core` is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!      storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```
//!
//! All writes funnel through a single writer actor that wraps each job in an
//! immediate transaction; the fleet replace operation relies on this for its
//! all-or-nothing guarantee.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod catalog;
pub mod fleet;
pub mod insurance;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from fleetfolio-core for convenience
pub use fleetfolio_core::errors::{DatabaseError, Error, Result};

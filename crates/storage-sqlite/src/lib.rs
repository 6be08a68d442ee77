//! SQLite storage implementation for the catalog service.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `catalog-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for products and currency quotes
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. Everything above it is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod currencies;
pub mod products;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from catalog-core for convenience
pub use catalog_core::errors::{DatabaseError, Error, Result};

//! Database operations for the storefront `PostgreSQL`.
//!
//! # Database: `navegante`
//!
//! The menu is maintained by the restaurant's back-office; the storefront
//! only reads it.
//!
//! ## Tables
//!
//! - `navegante.section` - Menu sections
//! - `navegante.product` - Menu products, each referencing a section
//! - `tower_sessions.session` - Tower-sessions storage (holds open orders)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p navegante-cli -- migrate
//! ```

pub mod menu;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use menu::MenuRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx (store unreachable, query failed).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A row could not be converted into a domain record.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

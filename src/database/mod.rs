//! Database subsystem.
//!
//! The pool is owned by the postgres component; everything else sees only
//! the [`Database`] trait. Queries issued before the component has connected
//! (or after it closed the pool on shutdown) fail with
//! [`DatabaseError::NotConnected`] instead of panicking.

use async_trait::async_trait;
use thiserror::Error;

pub mod postgres;

pub use postgres::Postgres;

/// Errors surfaced by the query interface.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("database is not connected")]
    NotConnected,

    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}

/// Query-capable handle to the database.
///
/// Deliberately narrow while the scaffold has no queries of its own.
// TODO: grow typed query helpers alongside the first real queries.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a statement, returning the number of rows affected.
    async fn execute(&self, sql: &str) -> Result<u64, DatabaseError>;

    /// Check that a connection can be drawn from the pool.
    async fn ping(&self) -> Result<(), DatabaseError>;
}

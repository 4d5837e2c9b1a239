//! Error types for the paging system
//!
//! Only construction and configuration surface errors to callers. Failures
//! while counting are logged and swallowed by the count executor.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagingError {
    #[error("Invalid page: {0}")]
    InvalidPage(String),

    #[error("Unsupported database type: {0}")]
    UnsupportedDialect(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

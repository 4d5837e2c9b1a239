//! Error types for the PageHaus crate
//!
//! This module contains all error types that can be returned by PageHaus operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageHausError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Paging error: {0}")]
    Paging(#[from] paging_system::PagingError),
}

//! Convenience re-exports for common PageHaus usage
//!
//! # Example
//!
//! ```rust
//! use pagehaus::prelude::*;
//!
//! // Now you have access to all the common PageHaus types
//! ```

// Core PageHaus components
pub use crate::core::PageHaus;
pub use crate::errors::PageHausError;
pub use crate::page_result::PageResult;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, PagingConfig};

// Re-export the paging system
pub use paging_system::prelude::*;

// Common external dependencies
pub use async_trait;
pub use sqlx;
pub use tokio;

// Commonly used sqlx types
pub use sqlx::{FromRow, MySqlPool, Row};

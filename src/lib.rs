//! # PageHaus
//!
//! Transparent SQL pagination for sqlx/MySQL. A caller puts a [`Page`] into
//! the request's [`PageContext`]; the next query run through PageHaus is
//! rewritten to return only that page, and the total row count is derived
//! from the same query when requested.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pagehaus::prelude::*;
//! use serde_json::json;
//!
//! #[derive(Debug, FromRow)]
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let pagehaus = PageHaus::new(config).await?;
//!
//!     let ctx = PageContext::new();
//!     ctx.set(Page::new(2, 20)?.with_total_record(true));
//!
//!     let query = BoundQuery::new(
//!         "SELECT id, name FROM users WHERE status = ? ORDER BY id",
//!         json!({"status": "active"}),
//!     )
//!     .with_mapping("status");
//!
//!     let result = pagehaus.fetch_page::<User>(&ctx, query).await?;
//!     println!("{} rows, {:?} in total", result.rows.len(), result.total_record());
//!
//!     Ok(())
//! }
//! ```
//!
//! [`Page`]: paging_system::Page
//! [`PageContext`]: paging_system::PageContext

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod page_result;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::PageHaus;
pub use errors::PageHausError;
pub use page_result::PageResult;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, PagingConfig};

// Re-export internal crates used by the public API
pub use paging_system;

// Re-export external dependencies used in public API
pub use sqlx;
pub use async_trait;

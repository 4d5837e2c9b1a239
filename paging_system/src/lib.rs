//! Paging System - transparent SQL pagination for PageHaus
//!
//! This crate rewrites a finalized query so the database returns one page of
//! rows, and optionally derives and runs a count query for the total.
//!
//! ```rust,no_run
//! use paging_system::prelude::*;
//! use serde_json::json;
//!
//! # async fn run(pool: sqlx::MySqlPool) -> Result<(), PagingError> {
//! let interceptor = PageInterceptor::new(
//!     Dialect::Offset,
//!     MySqlConnectionProvider::new(pool, true),
//! );
//!
//! let ctx = PageContext::with_page(Page::new(2, 20)?.with_total_record(true));
//! let mut query = BoundQuery::new(
//!     "SELECT id, name FROM users WHERE status = ?",
//!     json!({"status": "active"}),
//! )
//! .with_mapping("status");
//!
//! let page = interceptor.on_prepare(&ctx, &mut query).await;
//! assert_eq!(query.sql(), "SELECT id, name FROM users WHERE status = ? limit ?,?");
//! println!("total: {:?}", page.and_then(|p| p.total_record()));
//! # Ok(())
//! # }
//! ```

pub mod binder;
pub mod bound_query;
pub mod context;
pub mod count;
pub mod dialect;
pub mod engine;
pub mod errors;
pub mod page;
pub mod prelude;
pub mod provider;


pub use config::PagingConfig;

pub use binder::ParameterBinder;
pub use bound_query::{BoundQuery, ParameterMapping};
pub use context::PageContext;
pub use count::{count_sql, CountQueryExecutor};
pub use dialect::Dialect;
pub use engine::PageInterceptor;
pub use errors::PagingError;
pub use page::Page;
pub use provider::{ConnectionProvider, CountConnection, MySqlConnectionProvider};

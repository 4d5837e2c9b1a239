//! Prelude module for convenient imports
//!
//! This module re-exports the types needed to page a query.

pub use crate::binder::ParameterBinder;
pub use crate::bound_query::{BoundQuery, ParameterMapping};
pub use crate::context::PageContext;
pub use crate::dialect::Dialect;
pub use crate::engine::PageInterceptor;
pub use crate::errors::PagingError;
pub use crate::page::Page;
pub use crate::provider::{ConnectionProvider, CountConnection, MySqlConnectionProvider};

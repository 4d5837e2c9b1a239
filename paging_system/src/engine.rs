//! Page interceptor
//!
//! Hooked in after a statement's SQL and parameter mappings are final and
//! before it executes. When the request's `PageContext` holds a page, the
//! interceptor consumes it, optionally counts the total, and rewrites the
//! query for the configured dialect.

use crate::bound_query::BoundQuery;
use crate::context::PageContext;
use crate::count::CountQueryExecutor;
use crate::dialect::Dialect;
use crate::errors::PagingError;
use crate::page::Page;
use crate::provider::ConnectionProvider;
use config::PagingConfig;

#[derive(Debug, Clone)]
pub struct PageInterceptor<P> {
    dialect: Dialect,
    counter: CountQueryExecutor<P>,
}

impl<P: ConnectionProvider> PageInterceptor<P> {
    pub fn new(dialect: Dialect, provider: P) -> Self {
        Self {
            dialect,
            counter: CountQueryExecutor::new(provider),
        }
    }

    /// Build an interceptor for the dialect named in `config`
    pub fn from_config(config: &PagingConfig, provider: P) -> Result<Self, PagingError> {
        Ok(Self::new(Dialect::from_config(config)?, provider))
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn counter(&self) -> &CountQueryExecutor<P> {
        &self.counter
    }

    /// Rewrite `query` for the page pending in `ctx`.
    ///
    /// The page is removed from `ctx` whether or not anything else succeeds,
    /// so it never leaks into a later query. Returns the consumed page with
    /// its total filled in when one was requested and could be counted, or
    /// `None` (and an untouched query) when no page was pending.
    pub async fn on_prepare(&self, ctx: &PageContext, query: &mut BoundQuery) -> Option<Page> {
        let mut page = ctx.take()?;

        if page.need_total_record() {
            if let Some(total) = self.counter.count(query).await {
                page.set_total_record(total);
            }
        }

        query.ensure_parameter_mappings();
        let paged_sql = self.dialect.rewrite(&page, query);

        tracing::debug!(
            dialect = %self.dialect,
            page_no = page.page_no(),
            page_size = page.page_size(),
            sql = %paged_sql,
            "rewrote query for paging"
        );

        query.set_sql(paged_sql);
        Some(page)
    }
}

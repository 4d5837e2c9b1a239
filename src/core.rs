//! Core PageHaus functionality
//!
//! This module contains the main PageHaus struct, which owns the MySQL pool
//! and the page interceptor and runs queries through the prepare hook.

use paging_system::{
    BoundQuery, Dialect, MySqlConnectionProvider, PageContext, PageInterceptor, ParameterBinder,
};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use std::time::Duration;

use crate::errors::PageHausError;
use crate::page_result::PageResult;
use crate::{debug_log, trace_log};
use config::{AppConfig, DatabaseConfig};

/// Main PageHaus coordinator that manages the database pool and paged execution
pub struct PageHaus {
    pool: MySqlPool,
    interceptor: PageInterceptor<MySqlConnectionProvider>,
}

impl std::fmt::Debug for PageHaus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageHaus")
            .field("dialect", &self.interceptor.dialect())
            .field("autocommit", &self.interceptor.counter().provider().autocommit())
            .finish()
    }
}

impl PageHaus {
    /// Create new PageHaus with database connection
    pub async fn new(config: AppConfig) -> Result<Self, PageHausError> {
        config.database.validate()?;
        let dialect = Dialect::from_config(&config.paging)?;
        let pool = Self::connect(&config.database).await?;

        Ok(Self::from_pool(pool, dialect, config.database.autocommit))
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: MySqlPool, dialect: Dialect, autocommit: bool) -> Self {
        let provider = MySqlConnectionProvider::new(pool.clone(), autocommit);
        Self {
            pool,
            interceptor: PageInterceptor::new(dialect, provider),
        }
    }

    async fn connect(config: &DatabaseConfig) -> Result<MySqlPool, PageHausError> {
        let connection_string = config.connection_string();

        let mut pool_options = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        Ok(pool_options.connect(&connection_string).await?)
    }

    /// Get database pool reference
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub fn interceptor(&self) -> &PageInterceptor<MySqlConnectionProvider> {
        &self.interceptor
    }

    /// Run `query`, paged by whatever page is pending in `ctx`.
    ///
    /// Without a pending page the query runs as-is and the result carries no page.
    pub async fn fetch_page<T>(
        &self,
        ctx: &PageContext,
        mut query: BoundQuery,
    ) -> Result<PageResult<T>, PageHausError>
    where
        T: for<'r> sqlx::FromRow<'r, MySqlRow> + Send + Unpin,
    {
        let page = self.interceptor.on_prepare(ctx, &mut query).await;
        let values = ParameterBinder::resolve(&query);

        debug_log!("[FETCH_PAGE] SQL: {}", query.sql());
        trace_log!("[FETCH_PAGE] params: {:?}", values);

        let rows = ParameterBinder::bind_query_as(sqlx::query_as::<_, T>(query.sql()), values)
            .fetch_all(&self.pool)
            .await?;

        Ok(PageResult::new(rows, page))
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), PageHausError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

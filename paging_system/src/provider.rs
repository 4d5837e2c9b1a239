//! Connection provider for count queries
//!
//! The count executor runs outside the page query's own connection. It asks a
//! `ConnectionProvider` for a short-lived `CountConnection`, uses it for one
//! query and hands it back through `release`.

use crate::binder::ParameterBinder;
use crate::errors::PagingError;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::mysql::{MySql, MySqlPool};
use sqlx::pool::PoolConnection;
use sqlx::Transaction;

#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    type Connection: CountConnection;

    /// Obtain a connection to the database the page query targets
    async fn acquire(&self) -> Result<Self::Connection, PagingError>;
}

#[async_trait]
pub trait CountConnection: Send {
    /// Execute `sql` with `params` bound in order and read the first column
    /// of the first row. `None` when the query returns no rows.
    async fn fetch_count(&mut self, sql: &str, params: Vec<Value>)
        -> Result<Option<i64>, PagingError>;

    fn is_autocommit(&self) -> bool;

    async fn commit(&mut self) -> Result<(), PagingError>;

    /// Give the connection back. Uncommitted work is discarded.
    async fn release(self) -> Result<(), PagingError>;
}

/// Count connections drawn from a sqlx MySQL pool
#[derive(Debug, Clone)]
pub struct MySqlConnectionProvider {
    pool: MySqlPool,
    autocommit: bool,
}

impl MySqlConnectionProvider {
    /// With `autocommit` false every count connection is opened inside a
    /// transaction that is committed after the count is read.
    pub fn new(pool: MySqlPool, autocommit: bool) -> Self {
        Self { pool, autocommit }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub fn autocommit(&self) -> bool {
        self.autocommit
    }
}

#[async_trait]
impl ConnectionProvider for MySqlConnectionProvider {
    type Connection = MySqlCountConnection;

    async fn acquire(&self) -> Result<Self::Connection, PagingError> {
        if self.autocommit {
            Ok(MySqlCountConnection::AutoCommit(self.pool.acquire().await?))
        } else {
            Ok(MySqlCountConnection::Manual(self.pool.begin().await?))
        }
    }
}

pub enum MySqlCountConnection {
    AutoCommit(PoolConnection<MySql>),
    Manual(Transaction<'static, MySql>),
    /// The transaction has been committed and the connection returned
    Released,
}

#[async_trait]
impl CountConnection for MySqlCountConnection {
    async fn fetch_count(
        &mut self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<Option<i64>, PagingError> {
        let query = ParameterBinder::bind_query_scalar(sqlx::query_scalar::<_, i64>(sql), params);

        let total = match self {
            MySqlCountConnection::AutoCommit(conn) => query.fetch_optional(&mut **conn).await?,
            MySqlCountConnection::Manual(tx) => query.fetch_optional(&mut **tx).await?,
            MySqlCountConnection::Released => {
                return Err(PagingError::Connection(
                    "count connection already released".to_string(),
                ))
            }
        };
        Ok(total)
    }

    fn is_autocommit(&self) -> bool {
        !matches!(self, MySqlCountConnection::Manual(_))
    }

    async fn commit(&mut self) -> Result<(), PagingError> {
        match std::mem::replace(self, MySqlCountConnection::Released) {
            MySqlCountConnection::Manual(tx) => {
                tx.commit().await?;
                Ok(())
            }
            other => {
                *self = other;
                Ok(())
            }
        }
    }

    async fn release(self) -> Result<(), PagingError> {
        match self {
            MySqlCountConnection::Manual(tx) => {
                tx.rollback().await?;
                Ok(())
            }
            // Dropping a pooled connection returns it to the pool
            MySqlCountConnection::AutoCommit(_) | MySqlCountConnection::Released => Ok(()),
        }
    }
}

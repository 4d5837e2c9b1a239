//! Count query derivation and execution
//!
//! The count query is derived textually: everything before the first `from`
//! (in any case) is replaced by `SELECT COUNT(*) `. A `from` inside a
//! projected subquery, string literal or comment ahead of the main clause
//! produces a wrong count query.

use crate::binder::ParameterBinder;
use crate::bound_query::BoundQuery;
use crate::provider::{ConnectionProvider, CountConnection};

const COUNT_PREFIX: &str = "SELECT COUNT(*) ";

/// Counting form of `sql`. Without any `from` the prefix is put in front of
/// the whole text and the database reports the error.
pub fn count_sql(sql: &str) -> String {
    // ASCII lowercasing keeps byte offsets aligned with `sql`
    let index = sql.to_ascii_lowercase().find("from").unwrap_or(0);

    let tail = &sql[index..];
    let mut count = String::with_capacity(COUNT_PREFIX.len() + tail.len());
    count.push_str(COUNT_PREFIX);
    count.push_str(tail);
    count
}

/// Runs derived count queries on connections from `P`
#[derive(Debug, Clone)]
pub struct CountQueryExecutor<P> {
    provider: P,
}

impl<P: ConnectionProvider> CountQueryExecutor<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Total number of rows `query` matches, ignoring paging.
    ///
    /// The count is bound with the query's own mappings and parameter object.
    /// Returns `None` when the count could not be determined; failures are
    /// logged, never returned.
    pub async fn count(&self, query: &BoundQuery) -> Option<i64> {
        let count_sql = count_sql(query.sql());
        let params = ParameterBinder::resolve(query);

        let mut conn = match self.provider.acquire().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!(sql = %count_sql, error = %e, "set total count error: cannot acquire connection");
                return None;
            }
        };

        let total = match conn.fetch_count(&count_sql, params).await {
            Ok(total) => {
                // Pooled connections outside autocommit may otherwise read a stale snapshot
                if !conn.is_autocommit() {
                    if let Err(e) = conn.commit().await {
                        tracing::error!(sql = %count_sql, error = %e, "set total count error: commit failed");
                    }
                }
                total
            }
            Err(e) => {
                tracing::error!(sql = %count_sql, error = %e, "set total count error");
                None
            }
        };

        if let Err(e) = conn.release().await {
            tracing::error!(sql = %count_sql, error = %e, "set total count error: release failed");
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_sql_replaces_projection() {
        assert_eq!(
            count_sql("SELECT a,b FROM t WHERE x=?"),
            "SELECT COUNT(*) FROM t WHERE x=?"
        );
    }

    #[test]
    fn test_count_sql_is_case_insensitive() {
        assert_eq!(
            count_sql("select id, name from users where age > ?"),
            "SELECT COUNT(*) from users where age > ?"
        );
        assert_eq!(
            count_sql("Select * From orders"),
            "SELECT COUNT(*) From orders"
        );
    }

    #[test]
    fn test_count_sql_keeps_trailing_clauses() {
        assert_eq!(
            count_sql("SELECT * FROM t ORDER BY id"),
            "SELECT COUNT(*) FROM t ORDER BY id"
        );
    }

    #[test]
    fn test_count_sql_uses_first_from() {
        // Known limitation of the textual heuristic
        assert_eq!(
            count_sql("SELECT (SELECT max(x) FROM u) m FROM t"),
            "SELECT COUNT(*) FROM u) m FROM t"
        );
    }

    #[test]
    fn test_count_sql_without_from() {
        assert_eq!(count_sql("SELECT 1"), "SELECT COUNT(*) SELECT 1");
    }

    #[test]
    fn test_count_sql_with_non_ascii_projection() {
        assert_eq!(
            count_sql("SELECT 'Größe' AS g FROM t"),
            "SELECT COUNT(*) FROM t"
        );
    }
}

//! Paging dialects
//!
//! Each dialect knows how to wrap or extend a SELECT so the database returns
//! a single page, and which synthetic parameters the rewritten SQL expects.
//! Input SQL is never validated: a trailing semicolon or an existing LIMIT
//! yields SQL the database will reject.

use crate::bound_query::{BoundQuery, ParameterMapping};
use crate::errors::PagingError;
use crate::page::Page;
use config::{DatabaseType, PagingConfig};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

pub const PAGE_START: &str = "pageStart";
pub const PAGE_END: &str = "pageEnd";
pub const LIMIT: &str = "limit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `... limit ?,?` (MySQL)
    Offset,
    /// `rownum` bounded subquery (Oracle)
    NestedSubquery,
}

impl Dialect {
    pub fn from_config(config: &PagingConfig) -> Result<Self, PagingError> {
        config.database_type.parse()
    }

    /// Paged form of `sql`
    pub fn page_sql(&self, sql: &str) -> String {
        match self {
            Dialect::Offset => {
                let mut paged = String::with_capacity(sql.len() + 10);
                paged.push_str(sql);
                paged.push_str(" limit ?,?");
                paged
            }
            Dialect::NestedSubquery => format!(
                "select * from (select u.*, rownum r from ({}) u where rownum <= ?) where r > ?",
                sql
            ),
        }
    }

    /// Synthetic parameters in the order their placeholders appear in `page_sql`
    pub fn page_parameters(&self, page: &Page) -> [(&'static str, u64); 2] {
        match self {
            Dialect::Offset => [(PAGE_START, page.offset()), (LIMIT, u64::from(page.page_size()))],
            Dialect::NestedSubquery => [(PAGE_END, page.end()), (PAGE_START, page.offset())],
        }
    }

    /// Register the paging parameters on `query` and return its paged SQL.
    /// The caller is responsible for installing the returned text.
    pub fn rewrite(&self, page: &Page, query: &mut BoundQuery) -> String {
        for (name, value) in self.page_parameters(page) {
            query.push_mapping(ParameterMapping::new(name));
            query.set_additional_parameter(name, json!(value));
        }
        self.page_sql(query.sql())
    }
}

impl From<DatabaseType> for Dialect {
    fn from(database_type: DatabaseType) -> Self {
        match database_type {
            DatabaseType::MySql => Dialect::Offset,
            DatabaseType::Oracle => Dialect::NestedSubquery,
        }
    }
}

impl FromStr for Dialect {
    type Err = PagingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<DatabaseType>()
            .map(Dialect::from)
            .map_err(|_| PagingError::UnsupportedDialect(s.to_string()))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let database_type = match self {
            Dialect::Offset => DatabaseType::MySql,
            Dialect::NestedSubquery => DatabaseType::Oracle,
        };
        write!(f, "{}", database_type)
    }
}

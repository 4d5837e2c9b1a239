//! Integration tests for the paging pipeline
//!
//! The database tests need a MySQL server in `DATABASE_URL` and are skipped
//! when it is not set. Paged queries carry no ORDER BY: the derived count
//! query keeps trailing clauses, and MySQL rejects ORDER BY on a bare
//! COUNT(*) under ONLY_FULL_GROUP_BY. Rows come back in primary key order.

use pagehaus::prelude::*;
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, FromRow)]
struct Item {
    id: i64,
    category: String,
}

async fn setup_pool() -> Option<MySqlPool> {
    let database_url = std::env::var("DATABASE_URL").ok()?;
    Some(
        MySqlPool::connect(&database_url)
            .await
            .expect("Failed to connect to database"),
    )
}

/// Create a fresh table with 25 rows: ids 1..=25, category "even" or "odd"
async fn create_items_table(pool: &MySqlPool) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let table = format!("pagehaus_items_{}_{}", std::process::id(), nanos);

    sqlx::query(&format!(
        "CREATE TABLE {} (id BIGINT PRIMARY KEY, category VARCHAR(16) NOT NULL)",
        table
    ))
    .execute(pool)
    .await
    .unwrap();

    for id in 1..=25i64 {
        let category = if id % 2 == 0 { "even" } else { "odd" };
        sqlx::query(&format!("INSERT INTO {} (id, category) VALUES (?, ?)", table))
            .bind(id)
            .bind(category)
            .execute(pool)
            .await
            .unwrap();
    }

    table
}

async fn drop_table(pool: &MySqlPool, table: &str) {
    let _ = sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
        .execute(pool)
        .await;
}

#[tokio::test]
async fn test_fetch_page_with_total() {
    let Some(pool) = setup_pool().await else {
        return;
    };
    let table = create_items_table(&pool).await;
    let pagehaus = PageHaus::from_pool(pool.clone(), Dialect::Offset, true);

    let ctx = PageContext::with_page(Page::new(2, 10).unwrap().with_total_record(true));
    let query = BoundQuery::new(
        &format!("SELECT id, category FROM {}", table),
        serde_json::Value::Null,
    );

    let result = pagehaus.fetch_page::<Item>(&ctx, query).await.unwrap();

    assert_eq!(result.rows.len(), 10);
    assert_eq!(result.rows[0].id, 11);
    assert_eq!(result.rows[9].id, 20);
    assert_eq!(result.total_record(), Some(25));
    assert_eq!(result.total_pages(), Some(3));
    assert!(!ctx.is_pending());

    drop_table(&pool, &table).await;
}

#[tokio::test]
async fn test_fetch_page_binds_caller_parameters() {
    let Some(pool) = setup_pool().await else {
        return;
    };
    let table = create_items_table(&pool).await;
    // Non-autocommit count connections commit explicitly after reading
    let pagehaus = PageHaus::from_pool(pool.clone(), Dialect::Offset, false);

    let ctx = PageContext::with_page(Page::new(3, 5).unwrap().with_total_record(true));
    let query = BoundQuery::new(
        &format!("SELECT id, category FROM {} WHERE category = ?", table),
        json!({"category": "odd"}),
    )
    .with_mapping("category");

    let result = pagehaus.fetch_page::<Item>(&ctx, query).await.unwrap();

    // odd ids: 1,3,...,25 -> 13 rows; page 3 of size 5 holds 21,23,25
    assert_eq!(result.total_record(), Some(13));
    let ids: Vec<i64> = result.rows.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![21, 23, 25]);
    assert!(result.rows.iter().all(|item| item.category == "odd"));

    drop_table(&pool, &table).await;
}

#[tokio::test]
async fn test_unpaged_query_returns_everything() {
    let Some(pool) = setup_pool().await else {
        return;
    };
    let table = create_items_table(&pool).await;
    let pagehaus = PageHaus::from_pool(pool.clone(), Dialect::Offset, true);

    let query = BoundQuery::new(
        &format!("SELECT id, category FROM {} WHERE id > ?", table),
        json!(20),
    )
    .with_mapping("id");

    let result = pagehaus
        .fetch_page::<Item>(&PageContext::new(), query)
        .await
        .unwrap();

    assert!(!result.is_paged());
    assert_eq!(result.rows.len(), 5);

    drop_table(&pool, &table).await;
}

#[tokio::test]
async fn test_invalid_dialect_is_rejected_before_connecting() {
    let config = AppConfig {
        database: DatabaseConfig::new(
            "localhost".to_string(),
            3306,
            "pagehaus".to_string(),
            "root".to_string(),
            "password".to_string(),
            1,
            5,
            30,
            600,
            3600,
        ),
        paging: PagingConfig::new("db2".to_string()),
    };

    let err = PageHaus::new(config).await.unwrap_err();
    assert!(matches!(
        err,
        PageHausError::Paging(PagingError::UnsupportedDialect(_))
    ));
}

//! Query execution integration tests.
//!
//! Tests SQL query execution and result handling.

use super::common::seeded_session;
use sqlviz::db::Value;
use sqlviz::SqlVizError;

#[tokio::test]
async fn test_query_row_count_and_column_order() {
    let session = seeded_session().await;

    let result = session.query("SELECT * FROM t").await.unwrap();

    assert_eq!(result.row_count, 2);
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.column_names(), vec!["x", "y"]);

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_query_preserves_engine_row_order() {
    let session = seeded_session().await;

    let result = session
        .query("SELECT x FROM t ORDER BY x DESC")
        .await
        .unwrap();

    let values: Vec<&Value> = result.rows.iter().map(|r| &r[0]).collect();
    assert_eq!(values, vec![&Value::Int(3), &Value::Int(1)]);

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_query_projection_column_order() {
    let session = seeded_session().await;

    // Column order follows the SELECT list, not the table definition
    let result = session.query("SELECT y, x FROM t").await.unwrap();
    assert_eq!(result.column_names(), vec!["y", "x"]);

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_query_empty_result_is_distinguished() {
    let session = seeded_session().await;

    let result = session
        .query("SELECT * FROM t WHERE x < 0")
        .await
        .unwrap();
    assert!(result.is_empty());
    assert_eq!(result.row_count, 0);

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_query_rejected_sql_surfaces_engine_error() {
    let session = seeded_session().await;

    let err = session.query("SELECT * FROM missing_table").await.unwrap_err();
    assert!(matches!(err, SqlVizError::Query(_)));
    assert!(err.to_string().contains("missing_table"));

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_query_empty_sql_rejected() {
    let session = seeded_session().await;

    let err = session.query("").await.unwrap_err();
    assert!(matches!(err, SqlVizError::Query(_)));

    session.close().await.unwrap();
}

//! Connection establishment integration tests.

use sqlviz::config::ConnectionConfig;
use sqlviz::db::DatabaseBackend;
use sqlviz::{SqlViz, SqlVizError};

#[tokio::test]
async fn test_connect_in_memory_sqlite() {
    let session = SqlViz::connect("sqlite::memory:").await.unwrap();
    let result = session.query("SELECT 1 AS one").await.unwrap();
    assert_eq!(result.row_count, 1);
    session.close().await.unwrap();
}

#[tokio::test]
async fn test_connect_invalid_descriptor() {
    let err = SqlViz::connect("mysql://localhost/db").await.unwrap_err();
    assert!(matches!(err, SqlVizError::Config(_)));
}

#[tokio::test]
async fn test_connect_unreachable_sqlite_file() {
    let err = SqlViz::connect("sqlite:/nonexistent/dir/data.db")
        .await
        .unwrap_err();
    assert!(matches!(err, SqlVizError::Connection(_)));
}

#[test]
fn test_descriptor_parsing_variants() {
    let conn = ConnectionConfig::from_connection_string("sqlite::memory:").unwrap();
    assert_eq!(conn.backend, DatabaseBackend::Sqlite);

    let conn = ConnectionConfig::from_connection_string("sqlite:///tmp/data.db").unwrap();
    assert_eq!(conn.path, Some("/tmp/data.db".to_string()));

    let conn =
        ConnectionConfig::from_connection_string("postgres://u:p@localhost:5432/db").unwrap();
    assert_eq!(conn.backend, DatabaseBackend::Postgres);
    assert_eq!(conn.database, Some("db".to_string()));
}

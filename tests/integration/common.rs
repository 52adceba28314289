//! Shared helpers for integration tests.

use sqlviz::SqlViz;

/// Opens an in-memory SQLite session seeded with a small test table.
pub async fn seeded_session() -> SqlViz {
    let session = SqlViz::connect("sqlite::memory:").await.unwrap();

    session
        .query("CREATE TABLE t (x INT, y INT)")
        .await
        .unwrap();
    session
        .query("INSERT INTO t(x, y) VALUES (1, 2), (3, 4)")
        .await
        .unwrap();

    session
}

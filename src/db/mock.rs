//! Mock database client for testing.
//!
//! Provides in-memory client implementations that return canned results,
//! so session and chart logic can be exercised without a real database.

use super::{ColumnInfo, DatabaseClient, QueryResult, Value};
use crate::error::{Result, SqlVizError};
use async_trait::async_trait;
use std::time::Duration;

/// A mock database client that returns a predefined result for every query.
pub struct MockDatabaseClient {
    result: QueryResult,
}

impl MockDatabaseClient {
    /// Creates a mock client seeded with a two-column numeric table,
    /// the shape most chart tests want.
    pub fn new() -> Self {
        let columns = vec![
            ColumnInfo::new("x", "INTEGER"),
            ColumnInfo::new("y", "INTEGER"),
        ];
        let rows = vec![
            vec![Value::Int(1), Value::Int(2)],
            vec![Value::Int(3), Value::Int(4)],
        ];
        Self {
            result: QueryResult::with_data(columns, rows)
                .with_execution_time(Duration::from_millis(1)),
        }
    }

    /// Creates a mock client that returns the given result for every query.
    pub fn with_result(result: QueryResult) -> Self {
        Self { result }
    }

    /// Creates a mock client that returns an empty result for every query.
    pub fn empty() -> Self {
        Self {
            result: QueryResult::new(),
        }
    }
}

impl Default for MockDatabaseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseClient for MockDatabaseClient {
    async fn execute_query(&self, _sql: &str) -> Result<QueryResult> {
        Ok(self.result.clone())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// A mock database client whose queries always fail.
pub struct FailingDatabaseClient {
    message: String,
}

impl FailingDatabaseClient {
    /// Creates a failing client with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl DatabaseClient for FailingDatabaseClient {
    async fn execute_query(&self, _sql: &str) -> Result<QueryResult> {
        Err(SqlVizError::query(self.message.clone()))
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_default_result() {
        let client = MockDatabaseClient::new();
        let result = client.execute_query("SELECT * FROM t").await.unwrap();
        assert_eq!(result.row_count, 2);
        assert_eq!(result.column_names(), vec!["x", "y"]);
    }

    #[tokio::test]
    async fn test_mock_empty_result() {
        let client = MockDatabaseClient::empty();
        let result = client.execute_query("SELECT * FROM t").await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_failing_client() {
        let client = FailingDatabaseClient::new("no such table: t");
        let error = client.execute_query("SELECT * FROM t").await.unwrap_err();
        assert!(matches!(error, SqlVizError::Query(_)));
        assert!(error.to_string().contains("no such table"));
    }
}

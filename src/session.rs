//! Query-and-visualize session.
//!
//! A [`SqlViz`] session owns one database client for the lifetime of one or
//! more queries. Calls are strictly sequential; the session does not pool
//! connections or serialize concurrent callers.

use crate::chart::{self, Chart, ChartRequest};
use crate::config::ConnectionConfig;
use crate::db::{self, DatabaseClient, QueryResult};
use crate::error::{Result, SqlVizError};
use tracing::info;

/// A session against a single data source.
pub struct SqlViz {
    client: Box<dyn DatabaseClient>,
}

impl std::fmt::Debug for SqlViz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlViz").finish_non_exhaustive()
    }
}

impl SqlViz {
    /// Opens a session from a connection descriptor string.
    pub async fn connect(descriptor: &str) -> Result<Self> {
        let config = ConnectionConfig::from_connection_string(descriptor)?;
        Self::from_config(&config).await
    }

    /// Opens a session from a resolved connection configuration.
    pub async fn from_config(config: &ConnectionConfig) -> Result<Self> {
        info!("Connecting to {}", config.display_string());
        let client = db::connect(config).await?;
        Ok(Self { client })
    }

    /// Wraps an existing client. Primarily useful for testing.
    pub fn from_client(client: Box<dyn DatabaseClient>) -> Self {
        Self { client }
    }

    /// Executes a SQL query and returns the tabular result.
    pub async fn query(&self, sql: &str) -> Result<QueryResult> {
        if sql.trim().is_empty() {
            return Err(SqlVizError::query("SQL statement must not be empty"));
        }

        let result = self.client.execute_query(sql).await?;
        info!(
            "Query returned {} rows in {:?}",
            result.row_count, result.execution_time
        );
        Ok(result)
    }

    /// Runs a query and renders the result as a chart in one step.
    pub async fn visualize(&self, sql: &str, request: &ChartRequest) -> Result<Chart> {
        let result = self.query(sql).await?;
        chart::visualize(&result, request)
    }

    /// Closes the underlying connection.
    pub async fn close(&self) -> Result<()> {
        self.client.close().await
    }
}

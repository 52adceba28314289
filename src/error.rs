//! Error types for SQLViz.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for SQLViz operations.
#[derive(Error, Debug)]
pub enum SqlVizError {
    /// Database connection errors (descriptor invalid, host unreachable, auth failed, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution errors (syntax errors, missing tables, etc.), surfaced
    /// verbatim from the engine.
    #[error("Query error: {0}")]
    Query(String),

    /// The query succeeded but returned zero rows; there is nothing to chart.
    #[error("Query returned no rows, nothing to chart")]
    EmptyResult,

    /// The requested chart type is not one of the recognized selectors.
    #[error("Unsupported chart type: {0}")]
    UnsupportedChart(String),

    /// Chart rendering or export errors.
    #[error("Render error: {0}")]
    Render(String),

    /// Invalid extra rendering parameters (malformed JSON, wrong shape).
    #[error("Parameter error: {0}")]
    Params(String),

    /// Configuration errors (invalid config file, unusable descriptor, etc.)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SqlVizError {
    /// Creates a connection error with the given message.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a render error with the given message.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Creates a parameter error with the given message.
    pub fn params(msg: impl Into<String>) -> Self {
        Self::Params(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Connection(_) => "Connection Error",
            Self::Query(_) => "Query Error",
            Self::EmptyResult => "Empty Result",
            Self::UnsupportedChart(_) => "Unsupported Chart Type",
            Self::Render(_) => "Render Error",
            Self::Params(_) => "Parameter Error",
            Self::Config(_) => "Configuration Error",
        }
    }
}

/// Result type alias using SqlVizError.
pub type Result<T> = std::result::Result<T, SqlVizError>;

//! SQLViz - visualize SQL query results as interactive charts.
//!
//! Executes a SQL query against a relational data source, loads the result
//! into a tabular in-memory structure, and renders it as a Vega-Lite chart.
//!
//! ```rust,ignore
//! use sqlviz::chart::ChartRequest;
//! use sqlviz::session::SqlViz;
//!
//! let viz = SqlViz::connect("sqlite:mydb.db").await?;
//! let chart = viz
//!     .visualize("SELECT month, revenue FROM sales", &ChartRequest::new("bar"))
//!     .await?;
//! chart.save("revenue.html".as_ref())?;
//! ```

pub mod chart;
pub mod config;
pub mod db;
pub mod error;
pub mod session;

pub use chart::{Chart, ChartRequest, ChartType};
pub use error::{Result, SqlVizError};
pub use session::SqlViz;

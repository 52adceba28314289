//! SQLViz - visualize SQL query results as interactive charts.

mod cli;

use cli::Cli;
use sqlviz::chart::ChartRequest;
use sqlviz::config::{Config, ConnectionConfig};
use sqlviz::error::{Result, SqlVizError};
use sqlviz::session::SqlViz;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging (stderr, so piped spec output stays clean)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load configuration file
    let config_path = cli.config_path();
    let config = Config::load_from_file(&config_path)?;

    // Fail fast: rendering parameters and SQL resolve before any
    // connection is opened or query is run
    let params = cli.parse_chart_params()?;
    let sql = cli.resolve_sql()?;
    let connection = resolve_connection(&cli, &config)?;

    let chart_type = cli
        .chart
        .clone()
        .unwrap_or_else(|| config.chart.default_type.clone());

    let mut request = ChartRequest::new(chart_type)
        .with_params(params)
        .with_show(cli.show);
    if let Some(output) = &cli.output {
        request = request.with_output(output);
    }

    let session = SqlViz::from_config(&connection).await?;
    let outcome = session.visualize(&sql, &request).await;

    // The connection is released whether the visualization succeeded or not
    if let Err(e) = session.close().await {
        warn!("Failed to close connection: {e}");
    }
    let chart = outcome?;

    if cli.output.is_none() && !cli.show {
        // No sink requested: print the spec like a filter would
        println!("{}", chart.to_json_string()?);
    } else if let Some(output) = &cli.output {
        info!("Chart written to {}", output.display());
    }

    Ok(())
}

/// Resolves the final connection configuration with precedence:
/// CLI descriptor, then named connection, then the config default.
fn resolve_connection(cli: &Cli, config: &Config) -> Result<ConnectionConfig> {
    let mut connection = match &cli.connection_string {
        Some(descriptor) => ConnectionConfig::from_connection_string(descriptor)?,
        None => {
            if let Some(name) = cli.connection_name() {
                config.get_connection(Some(name)).cloned().ok_or_else(|| {
                    SqlVizError::config(format!("Connection '{name}' not found in config file"))
                })?
            } else {
                config.get_connection(None).cloned().ok_or_else(|| {
                    SqlVizError::config(
                        "No database connection configured. \
                         Pass a descriptor or add one to the config file.",
                    )
                })?
            }
        }
    };

    // Environment variables fill any remaining gaps
    connection.apply_env_defaults();

    Ok(connection)
}

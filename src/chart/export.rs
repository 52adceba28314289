//! Chart export and display.
//!
//! Charts persist as either the raw Vega-Lite specification (`.json`,
//! `.vl.json`) or a self-contained HTML page that renders it with
//! vega-embed (`.html`, `.htm`). Interactive display writes the HTML page
//! to a temporary file and hands it to the platform opener.

use super::Chart;
use crate::error::{Result, SqlVizError};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Exports the chart to the given path. The format is implied by the
/// file extension.
pub(super) fn save(chart: &Chart, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let content = match extension.as_str() {
        "json" => chart.to_json_string()?,
        "html" | "htm" => to_html(chart)?,
        other => {
            return Err(SqlVizError::render(format!(
                "Unsupported output format '.{other}' for {}. Supported: .json, .html",
                path.display()
            )))
        }
    };

    std::fs::write(path, content).map_err(|e| {
        SqlVizError::render(format!("Failed to write {}: {e}", path.display()))
    })
}

/// Renders a standalone HTML page embedding the chart via vega-embed.
pub(super) fn to_html(chart: &Chart) -> Result<String> {
    let spec_json = serde_json::to_string(chart.spec())
        .map_err(|e| SqlVizError::render(format!("Failed to serialize chart spec: {e}")))?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <title>sqlviz</title>
  <script src="https://cdn.jsdelivr.net/npm/vega@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-lite@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-embed@6"></script>
</head>
<body>
  <div id="vis"></div>
  <script type="text/javascript">
    const spec = {spec_json};
    vegaEmbed('#vis', spec, {{"actions": true}}).catch(console.error);
  </script>
</body>
</html>
"#
    ))
}

/// Opens the chart in the system browser via a temporary HTML file.
pub(super) fn show(chart: &Chart) -> Result<()> {
    let html = to_html(chart)?;
    let path = std::env::temp_dir().join(format!("sqlviz-{}.html", std::process::id()));

    std::fs::write(&path, html).map_err(|e| {
        SqlVizError::render(format!("Failed to write {}: {e}", path.display()))
    })?;

    debug!("Opening chart at {}", path.display());
    open_in_browser(&path)
}

/// Hands a file to the platform's default opener.
fn open_in_browser(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(path);
        c
    };

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    command
        .spawn()
        .map(|_| ())
        .map_err(|e| SqlVizError::render(format!("Failed to open chart in browser: {e}")))
}

//! Chart dispatch for SQLViz.
//!
//! Turns a query result plus a chart request into a rendered chart:
//! resolves the chart-type selector against the closed set of supported
//! marks, fills in missing axis parameters from the result's column order,
//! builds the Vega-Lite specification, and runs the requested output side
//! effects (file export, interactive display).

mod export;
mod vegalite;

use crate::db::{ColumnInfo, QueryResult};
use crate::error::{Result, SqlVizError};
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Rendering parameters: string key to column name or literal value.
pub type Params = serde_json::Map<String, JsonValue>;

/// Supported chart types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    Bar,
    Line,
    Scatter,
}

impl ChartType {
    /// Returns the selector as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Scatter => "scatter",
        }
    }

    /// Parses a selector from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bar" => Some(Self::Bar),
            "line" => Some(Self::Line),
            "scatter" => Some(Self::Scatter),
            _ => None,
        }
    }

    /// Returns the Vega-Lite mark type for this chart type.
    pub fn mark_type(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Scatter => "point",
        }
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single visualization request: selector, parameters, and output sinks.
#[derive(Debug, Clone, Default)]
pub struct ChartRequest {
    /// Chart-type selector; resolved against [`ChartType`] at dispatch time
    /// so an unrecognized selector is reported by name.
    pub chart_type: String,

    /// Rendering parameters (axis mappings and literals).
    pub params: Params,

    /// Optional export path; format implied by the extension.
    pub output: Option<PathBuf>,

    /// Whether to open the chart in an interactive display.
    pub show: bool,
}

impl ChartRequest {
    /// Creates a request for the given chart-type selector.
    pub fn new(chart_type: impl Into<String>) -> Self {
        Self {
            chart_type: chart_type.into(),
            ..Default::default()
        }
    }

    /// Adds a single rendering parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Replaces the parameter map.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Sets the export path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Sets the display flag.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }
}

/// A rendered chart, owning its Vega-Lite specification.
///
/// Returned to the caller; SQLViz does not retain it after the call.
#[derive(Debug, Clone)]
pub struct Chart {
    chart_type: ChartType,
    spec: JsonValue,
}

impl Chart {
    /// Returns the chart type this chart was rendered with.
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    /// Returns the Vega-Lite specification.
    pub fn spec(&self) -> &JsonValue {
        &self.spec
    }

    /// Serializes the specification as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.spec)
            .map_err(|e| SqlVizError::render(format!("Failed to serialize chart spec: {e}")))
    }

    /// Renders a self-contained HTML page embedding the chart.
    pub fn to_html(&self) -> Result<String> {
        export::to_html(self)
    }

    /// Exports the chart to a file; the format is implied by the extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        export::save(self, path)
    }

    /// Opens the chart in the system browser.
    pub fn show(&self) -> Result<()> {
        export::show(self)
    }
}

/// Parses an extra-parameters JSON object string into a parameter map.
///
/// Fails fast on malformed input: this runs before any query is executed.
pub fn parse_params(raw: &str) -> Result<Params> {
    let value: JsonValue = serde_json::from_str(raw)
        .map_err(|e| SqlVizError::params(format!("Invalid JSON parameters: {e}")))?;

    match value {
        JsonValue::Object(map) => Ok(map),
        other => Err(SqlVizError::params(format!(
            "Expected a JSON object of parameters, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Fills missing `x`/`y` parameters from the first two result columns.
///
/// Caller-supplied keys are never overwritten. With fewer than two columns
/// nothing is inferred and the renderer's own defaults apply.
pub fn infer_axes(params: &mut Params, columns: &[ColumnInfo]) {
    if columns.len() < 2 {
        return;
    }
    if !params.contains_key("x") {
        debug!("Inferred x axis from column '{}'", columns[0].name);
        params.insert("x".to_string(), JsonValue::String(columns[0].name.clone()));
    }
    if !params.contains_key("y") {
        debug!("Inferred y axis from column '{}'", columns[1].name);
        params.insert("y".to_string(), JsonValue::String(columns[1].name.clone()));
    }
}

/// Renders a query result as a chart and runs the requested side effects.
///
/// Dispatch order: emptiness check, selector resolution, axis inference,
/// spec construction, then export and display. Export and display are
/// independent best-effort side effects; the first failure is returned
/// after both have been attempted.
pub fn visualize(result: &QueryResult, request: &ChartRequest) -> Result<Chart> {
    if result.is_empty() {
        return Err(SqlVizError::EmptyResult);
    }

    let chart_type = ChartType::parse(&request.chart_type)
        .ok_or_else(|| SqlVizError::UnsupportedChart(request.chart_type.clone()))?;

    let mut params = request.params.clone();
    infer_axes(&mut params, &result.columns);

    let spec = vegalite::build_spec(chart_type, result, &params)?;
    let chart = Chart { chart_type, spec };

    let mut first_error = None;

    if let Some(path) = &request.output {
        match chart.save(path) {
            Ok(()) => debug!("Chart written to {}", path.display()),
            Err(e) => {
                warn!("Chart export failed: {e}");
                first_error = Some(e);
            }
        }
    }

    if request.show {
        if let Err(e) = chart.show() {
            warn!("Chart display failed: {e}");
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(chart),
    }
}

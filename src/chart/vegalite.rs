//! Vega-Lite specification builder.
//!
//! Converts a query result and a resolved parameter map into a Vega-Lite
//! JSON specification: rows become inline data values, parameters naming a
//! result column become field encodings with an inferred field type, other
//! parameters become literal encodings or mark/top-level properties.

use super::{ChartType, Params};
use crate::db::{QueryResult, Value};
use crate::error::Result;
use serde_json::{json, Map, Value as JsonValue};

/// Vega-Lite schema URL stamped into every generated spec.
const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Encoding channels recognized in the parameter map. Everything else is
/// treated as a mark or top-level property.
const ENCODING_CHANNELS: &[&str] = &["x", "y", "color", "size", "opacity", "tooltip"];

/// Top-level spec properties recognized in the parameter map.
const TOP_LEVEL_PARAMS: &[&str] = &["title", "width", "height"];

/// Builds a Vega-Lite specification for the given chart type, result, and
/// fully resolved parameters.
pub(super) fn build_spec(
    chart_type: ChartType,
    result: &QueryResult,
    params: &Params,
) -> Result<JsonValue> {
    let mut spec = Map::new();
    spec.insert("$schema".to_string(), json!(VEGA_LITE_SCHEMA));
    spec.insert("data".to_string(), json!({ "values": rows_to_values(result) }));

    let mut mark = Map::new();
    mark.insert("type".to_string(), json!(chart_type.mark_type()));

    let mut encoding = Map::new();

    for (key, value) in params {
        if ENCODING_CHANNELS.contains(&key.as_str()) {
            encoding.insert(key.clone(), encode_channel(result, value));
        } else if TOP_LEVEL_PARAMS.contains(&key.as_str()) {
            spec.insert(key.clone(), value.clone());
        } else {
            // Remaining parameters pass through as mark properties
            mark.insert(key.clone(), value.clone());
        }
    }

    spec.insert("mark".to_string(), JsonValue::Object(mark));
    if !encoding.is_empty() {
        spec.insert("encoding".to_string(), JsonValue::Object(encoding));
    }

    Ok(JsonValue::Object(spec))
}

/// Builds one encoding channel. A string value naming a result column maps
/// to a field encoding; anything else is a literal value encoding.
fn encode_channel(result: &QueryResult, value: &JsonValue) -> JsonValue {
    if let JsonValue::String(name) = value {
        if result.column_index(name).is_some() {
            return json!({
                "field": name,
                "type": infer_field_type(result, name),
            });
        }
    }
    json!({ "value": value })
}

/// Infers the Vega-Lite field type for a result column.
///
/// The engine's declared type is the primary signal; dynamically typed
/// engines (SQLite) sometimes report bare TEXT for everything, so a scan of
/// the actual values decides the fallback.
fn infer_field_type(result: &QueryResult, field: &str) -> &'static str {
    let Some(index) = result.column_index(field) else {
        return "nominal";
    };

    let declared = result.columns[index].data_type.to_uppercase();
    if ["INT", "REAL", "FLOAT", "DOUBLE", "NUMERIC", "DECIMAL"]
        .iter()
        .any(|t| declared.contains(t))
    {
        return "quantitative";
    }
    if declared.contains("BOOL") {
        return "nominal";
    }
    if declared.contains("DATE") || declared.contains("TIME") {
        return "temporal";
    }

    match first_non_null(result, index) {
        Some(Value::Int(_)) | Some(Value::Float(_)) => "quantitative",
        _ => "nominal",
    }
}

fn first_non_null<'a>(result: &'a QueryResult, index: usize) -> Option<&'a Value> {
    result
        .rows
        .iter()
        .map(|row| &row[index])
        .find(|v| !v.is_null())
}

/// Converts result rows to Vega-Lite inline data values (array of objects).
fn rows_to_values(result: &QueryResult) -> Vec<JsonValue> {
    result
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (column, value) in result.columns.iter().zip(row.iter()) {
                obj.insert(column.name.clone(), JsonValue::from(value));
            }
            JsonValue::Object(obj)
        })
        .collect()
}

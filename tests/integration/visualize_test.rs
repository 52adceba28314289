//! Query-to-chart integration tests.
//!
//! Mirrors the end-to-end scenarios: seeded table, one-step visualize,
//! inferred axes, error paths, and file export.

use super::common::seeded_session;
use serde_json::json;
use sqlviz::chart::parse_params;
use sqlviz::{ChartRequest, ChartType, SqlVizError};

#[tokio::test]
async fn test_visualize_bar_with_explicit_axes() {
    let session = seeded_session().await;

    let request = ChartRequest::new("bar")
        .with_param("x", "x")
        .with_param("y", "y");
    let chart = session.visualize("SELECT * FROM t", &request).await.unwrap();

    assert_eq!(chart.chart_type(), ChartType::Bar);
    assert_eq!(chart.spec()["encoding"]["x"]["field"], json!("x"));
    assert_eq!(chart.spec()["encoding"]["y"]["field"], json!("y"));

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_visualize_bar_auto_axes() {
    let session = seeded_session().await;

    let chart = session
        .visualize("SELECT * FROM t", &ChartRequest::new("bar"))
        .await
        .unwrap();

    // First two result columns drive the inferred axes
    assert_eq!(chart.spec()["encoding"]["x"]["field"], json!("x"));
    assert_eq!(chart.spec()["encoding"]["y"]["field"], json!("y"));
    assert_eq!(chart.spec()["data"]["values"].as_array().unwrap().len(), 2);

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_visualize_auto_axes_are_stable_across_calls() {
    let session = seeded_session().await;
    let request = ChartRequest::new("line");

    let first = session.visualize("SELECT * FROM t", &request).await.unwrap();
    let second = session.visualize("SELECT * FROM t", &request).await.unwrap();

    assert_eq!(first.spec()["encoding"], second.spec()["encoding"]);

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_visualize_explicit_axis_wins_over_inference() {
    let session = seeded_session().await;

    let request = ChartRequest::new("scatter").with_param("x", "y");
    let chart = session.visualize("SELECT * FROM t", &request).await.unwrap();

    assert_eq!(chart.spec()["encoding"]["x"]["field"], json!("y"));

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_visualize_empty_result() {
    let session = seeded_session().await;

    let err = session
        .visualize("SELECT * FROM t WHERE x < 0", &ChartRequest::new("bar"))
        .await
        .unwrap_err();
    assert!(matches!(err, SqlVizError::EmptyResult));

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_visualize_unsupported_chart_type() {
    let session = seeded_session().await;

    let err = session
        .visualize("SELECT * FROM t", &ChartRequest::new("pie"))
        .await
        .unwrap_err();
    assert!(matches!(err, SqlVizError::UnsupportedChart(_)));
    assert!(err.to_string().contains("pie"));

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_visualize_with_parsed_json_params() {
    let session = seeded_session().await;

    let params = parse_params(r#"{"x": "x", "y": "y"}"#).unwrap();
    let request = ChartRequest::new("bar").with_params(params);
    let chart = session.visualize("SELECT * FROM t", &request).await.unwrap();

    assert_eq!(chart.spec()["encoding"]["x"]["field"], json!("x"));
    assert_eq!(chart.spec()["encoding"]["y"]["field"], json!("y"));

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_visualize_writes_output_file() {
    let session = seeded_session().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.json");

    let request = ChartRequest::new("bar").with_output(&path);
    let chart = session.visualize("SELECT * FROM t", &request).await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, chart.to_json_string().unwrap());

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_visualize_writes_html_page() {
    let session = seeded_session().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.html");

    let request = ChartRequest::new("line").with_output(&path);
    session.visualize("SELECT * FROM t", &request).await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("vegaEmbed"));
    assert!(written.contains("\"line\""));

    session.close().await.unwrap();
}

#[tokio::test]
async fn test_visualize_export_failure_is_render_error() {
    let session = seeded_session().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.png");

    let request = ChartRequest::new("bar").with_output(&path);
    let err = session
        .visualize("SELECT * FROM t", &request)
        .await
        .unwrap_err();
    assert!(matches!(err, SqlVizError::Render(_)));

    session.close().await.unwrap();
}

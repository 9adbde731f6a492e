//! Integration tests for the analyze command.
//!
//! Runs the handler against real files and checks rendering and error mapping.

use std::fs;

use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use chatfood_log_analyzer::{AnalyzerConfig, LogSource};
use chatfood_log_cli::analyze::{self, AnalysisReport};
use chatfood_log_cli::cli::OutputFormat;
use chatfood_log_cli::output::{OutputWriter, Render};

const LOG: &str = "\
2024-01-01 09:15:32 ERROR API 호출 API: recommend 소요시간: 1200ms Failed to connect
2024-01-01 09:20:00 INFO API 호출 API: recommend 소요시간: 200ms
2024-01-01 13:00:00 INFO API 호출 API: search 소요시간: 900ms
";

#[tokio::test]
async fn test_analyze_file_returns_statistics() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let log_path = temp_dir.path().join("chatfood.log");
    fs::write(&log_path, LOG).expect("should write log");

    let report = analyze::execute(
        &LogSource::from_arg(&log_path),
        &AnalyzerConfig::default(),
        &OutputWriter::new(OutputFormat::Json),
        CancellationToken::new(),
    )
    .await
    .expect("analysis should succeed");

    let stats = report.statistics();
    assert!(!report.stopped_early());
    assert_eq!(stats.total_lines, 3);
    assert_eq!(stats.api_call_counts.get("recommend"), 2);
    assert_eq!(stats.response_times, vec![1200, 200, 900]);
}

#[tokio::test]
async fn test_analyze_missing_file_exit_code() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let missing = temp_dir.path().join("nope.log");

    let err = analyze::execute(
        &LogSource::from_arg(&missing),
        &AnalyzerConfig::default(),
        &OutputWriter::new(OutputFormat::Text),
        CancellationToken::new(),
    )
    .await
    .err()
    .expect("missing file should fail");

    assert_eq!(err.exit_code(), 3, "missing source should map to exit code 3");
    assert!(err.to_string().contains("nope.log"));
}

#[tokio::test]
async fn test_analyze_invalid_utf8_exit_code() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let log_path = temp_dir.path().join("binary.log");
    fs::write(&log_path, b"ok INFO line\n\xff\xfe\n").expect("should write log");

    let err = analyze::execute(
        &LogSource::from_arg(&log_path),
        &AnalyzerConfig::default(),
        &OutputWriter::new(OutputFormat::Text),
        CancellationToken::new(),
    )
    .await
    .err()
    .expect("invalid utf-8 should fail");

    assert_eq!(err.exit_code(), 4, "ingestion fault should map to exit code 4");
}

#[tokio::test]
async fn test_cancelled_run_renders_partial_report() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let log_path = temp_dir.path().join("chatfood.log");
    fs::write(&log_path, LOG).expect("should write log");

    let cancel = CancellationToken::new();
    cancel.cancel();

    let report = analyze::execute(
        &LogSource::from_arg(&log_path),
        &AnalyzerConfig::default(),
        &OutputWriter::new(OutputFormat::Text),
        cancel,
    )
    .await
    .expect("cancelled run still succeeds");

    assert!(report.stopped_early());
    assert_eq!(report.statistics().total_lines, 0);
}

#[test]
fn test_text_and_json_views_agree() {
    let mut aggregator = chatfood_log_analyzer::StatisticsAggregator::new().expect("aggregator");
    for line in LOG.lines() {
        aggregator.ingest(line);
    }
    let report = AnalysisReport::new(
        "chatfood.log".to_owned(),
        aggregator.into_statistics(),
        AnalyzerConfig::default(),
        false,
    );

    let mut text = Vec::new();
    report.render_text(&mut text).expect("text render");
    let text = String::from_utf8(text).expect("utf-8");
    assert!(text.contains("  recommend: 2회"));
    assert!(text.contains("  09시:    2회 "));
    assert!(text.contains("  느린 요청 (1초 이상): 1개"));

    let mut json = Vec::new();
    OutputWriter::new(OutputFormat::Json)
        .render_to(&report, &mut json)
        .expect("json render");
    let value: serde_json::Value = serde_json::from_slice(&json).expect("valid json");
    assert_eq!(value["apiCallCounts"]["recommend"], 2);
    assert_eq!(value["hourlyCounts"]["9"], 2);
    assert_eq!(value["responseTimeStats"]["slowCount"], 1);
    assert_eq!(value["responseTimeStats"]["min"], 200);
}

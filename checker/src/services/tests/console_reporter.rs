//! Tests for ConsoleReporter

use std::time::Duration;
use tempfile::TempDir;

use shared::{FailedRequest, RecordId, RunSummary};
use crate::services::console_reporter::ConsoleReporter;
use crate::error::CheckerError;
use crate::traits::Reporter;

fn summary() -> RunSummary {
    RunSummary {
        matches: 4,
        failed_requests: vec![FailedRequest {
            index: 1,
            record_id: RecordId::new(2),
            reason: "timeout".to_string(),
        }],
        ..RunSummary::default()
    }
}

#[tokio::test]
async fn test_report_without_summary_path() {
    let reporter = ConsoleReporter::new(None);
    assert!(reporter.report(&summary(), Duration::from_secs(1)).await.is_ok());
}

#[tokio::test]
async fn test_report_writes_json_summary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("summary.json");
    let reporter = ConsoleReporter::new(Some(path.clone()));

    reporter.report(&summary(), Duration::from_millis(250)).await.unwrap();

    let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["matches"], 4);
    assert_eq!(written["total"], 5);
    assert_eq!(written["failed_requests"][0]["reason"], "timeout");
    assert_eq!(written["failed_requests"][0]["record_id"], 2);
}

#[tokio::test]
async fn test_export_fails_when_parent_is_a_file() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("taken");
    std::fs::write(&blocker, "not a directory").unwrap();
    let reporter = ConsoleReporter::new(Some(blocker.join("summary.json")));

    let result = reporter.export(&summary(), Duration::ZERO).await;

    assert!(matches!(result, Err(CheckerError::IoError(_))));
}

//! Test helper utilities for checker integration tests

use std::io::Write;
use std::time::Duration;
use serde_json::Value;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use checker::{Checker, CheckerConfig, ConsoleReporter, JsonFileRecordSource};

pub const SEARCH_PATH: &str = "/terrorists/search";

/// Write raw rows to a temporary record file
pub fn write_record_file(rows: &[Value]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    let json = serde_json::to_string(rows).expect("rows serialize");
    file.write_all(json.as_bytes()).expect("write rows");
    file
}

/// Configuration pointing at a mock search service with a short timeout
pub fn test_config(server: &MockServer, records: &NamedTempFile) -> CheckerConfig {
    CheckerConfig {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(500),
        max_concurrent: 4,
        records_path: records.path().to_path_buf(),
        ..CheckerConfig::default()
    }
}

/// Build a checker reading `records` and talking to `server`
pub fn build_checker(
    server: &MockServer,
    records: &NamedTempFile,
) -> Checker<JsonFileRecordSource, ConsoleReporter> {
    let config = test_config(server, records);
    let source = JsonFileRecordSource::new(config.records_path.clone());
    Checker::new(config, source, ConsoleReporter::new(None)).expect("valid config")
}

/// Answer searches for one exact input with a JSON body
pub async fn mount_search(server: &MockServer, input: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("input", input))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Answer searches for one exact input after a delay
pub async fn mount_slow_search(server: &MockServer, input: &str, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("input", input))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(Value::Array(Vec::new()))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

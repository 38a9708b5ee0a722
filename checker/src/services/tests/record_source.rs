//! Tests for JsonFileRecordSource

use std::io::Write;
use chrono::NaiveDate;
use tempfile::NamedTempFile;

use shared::{RecordId, SharedError};
use crate::core::normalize::RawRecord;
use crate::error::CheckerError;
use crate::services::record_source::{JsonFileRecordSource, shape_records};
use crate::traits::RecordSource;

fn write_records(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn raw(id: i64, client_name: &str) -> RawRecord {
    RawRecord {
        id,
        client_name: client_name.to_string(),
        birthday: None,
        result: 0,
    }
}

#[tokio::test]
async fn test_fetch_records_shapes_rows_in_order() {
    let file = write_records(
        r#"[
            {"id": 3, "client_name": "Ivanov  Ivan Ivanovich", "birthday": "19800102", "result": 0},
            {"id": 1, "client_name": "Petrov Petr", "birthday": null, "result": 42},
            {"id": 2, "client_name": "Sidorov", "birthday": "", "result": 7}
        ]"#,
    );

    let source = JsonFileRecordSource::new(file.path());
    let records = source.fetch_records().await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(
        records.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![RecordId::new(3), RecordId::new(1), RecordId::new(2)]
    );
    assert_eq!(records[0].first_name, "Ivan");
    assert_eq!(records[0].birthday, NaiveDate::from_ymd_opt(1980, 1, 2));
    assert_eq!(records[1].patronymic, "");
    assert_eq!(records[1].expected_result, 42);
    assert_eq!(records[2].birthday, None);
}

#[tokio::test]
async fn test_fetch_records_missing_birthday_field() {
    let file = write_records(r#"[{"id": 1, "client_name": "Ivanov Ivan", "result": 0}]"#);

    let records = JsonFileRecordSource::new(file.path()).fetch_records().await.unwrap();

    assert_eq!(records[0].birthday, None);
}

#[tokio::test]
async fn test_fetch_records_missing_file() {
    let source = JsonFileRecordSource::new("/nonexistent/records.json");
    let result = source.fetch_records().await;

    assert!(matches!(result, Err(CheckerError::RecordSourceError { .. })));
}

#[tokio::test]
async fn test_fetch_records_invalid_json() {
    let file = write_records(r#"{"id": 1}"#);
    let result = JsonFileRecordSource::new(file.path()).fetch_records().await;

    assert!(matches!(result, Err(CheckerError::JsonError(_))));
}

#[tokio::test]
async fn test_fetch_records_invalid_birthday() {
    let file = write_records(r#"[{"id": 9, "client_name": "A B C", "birthday": "yesterday", "result": 0}]"#);
    let result = JsonFileRecordSource::new(file.path()).fetch_records().await;

    assert!(matches!(
        result,
        Err(CheckerError::SharedError(SharedError::InvalidBirthday { record_id: 9, .. }))
    ));
}

#[test]
fn test_shape_records_rejects_duplicate_ids() {
    let result = shape_records(vec![raw(1, "A B C"), raw(2, "D E F"), raw(1, "G H I")]);

    assert!(matches!(
        result,
        Err(CheckerError::SharedError(SharedError::InvalidRecord { .. }))
    ));
}

#[test]
fn test_shape_records_empty() {
    assert!(shape_records(Vec::new()).unwrap().is_empty());
}

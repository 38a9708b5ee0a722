//! Reference dataset loading from an exported JSON file

use std::collections::HashSet;
use std::path::PathBuf;
use async_trait::async_trait;

use shared::{SharedError, TestRecord};
use crate::core::normalize::{RawRecord, normalize_record};
use crate::error::{CheckerError, CheckerResult};
use crate::traits::RecordSource;

/// Record source reading a JSON array of raw check-table rows
pub struct JsonFileRecordSource {
    path: PathBuf,
}

impl JsonFileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for JsonFileRecordSource {
    async fn fetch_records(&self) -> CheckerResult<Vec<TestRecord>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| CheckerError::RecordSourceError {
            message: format!("Failed to read {}: {}", self.path.display(), e),
        })?;

        let rows: Vec<RawRecord> = serde_json::from_slice(&bytes)?;
        let records = shape_records(rows)?;

        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "📥 Loaded reference records"
        );
        Ok(records)
    }
}

/// Normalize rows in order, rejecting duplicate ids
pub fn shape_records(rows: Vec<RawRecord>) -> CheckerResult<Vec<TestRecord>> {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let record = normalize_record(row)?;
        if !seen.insert(record.id) {
            return Err(SharedError::InvalidRecord {
                message: format!("duplicate record id {}", record.id),
            }
            .into());
        }
        records.push(record);
    }

    Ok(records)
}

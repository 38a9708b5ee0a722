//! Run-level aggregates handed from the reconciler to the reporter

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{RecordId, TestRecord};

/// A lookup that failed, by position in the dispatched record set
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedRequest {
    pub index: usize,
    pub record_id: RecordId,
    pub reason: String,
}

/// Which way a record disagreed with the search service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyKind {
    /// A match came back although none was expected
    FoundWrongId,
    /// A match was expected but the response was empty
    ExpectedButEmpty,
}

/// One ledger entry for a record whose outcome disagreed with its expectation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    pub kind: DiscrepancyKind,
    pub id: RecordId,
    pub last_name: String,
    pub first_name: String,
    pub patronymic: String,
    pub birthday: Option<NaiveDate>,
    pub expected_result: i64,
    /// First matched identifier, or `0` when the response was empty
    pub observed_identifier: i64,
}

impl Discrepancy {
    pub fn new(kind: DiscrepancyKind, record: &TestRecord, observed_identifier: i64) -> Self {
        Self {
            kind,
            id: record.id,
            last_name: record.last_name.clone(),
            first_name: record.first_name.clone(),
            patronymic: record.patronymic.clone(),
            birthday: record.birthday,
            expected_result: record.expected_result,
            observed_identifier,
        }
    }
}

/// Counters and ledgers for one complete run
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub matches: u64,
    pub mismatch_found_wrong_id: u64,
    pub mismatch_expected_but_empty: u64,
    pub failed_requests: Vec<FailedRequest>,
    pub discrepancies: Vec<Discrepancy>,
}

impl RunSummary {
    /// Number of records accounted for; equals the dispatched record count
    pub fn total(&self) -> u64 {
        self.matches
            + self.mismatch_found_wrong_id
            + self.mismatch_expected_but_empty
            + self.failed_requests.len() as u64
    }

    pub fn mismatches(&self) -> u64 {
        self.mismatch_found_wrong_id + self.mismatch_expected_but_empty
    }

    /// True when every record matched and no request failed
    pub fn is_clean(&self) -> bool {
        self.mismatches() == 0 && self.failed_requests.is_empty()
    }
}

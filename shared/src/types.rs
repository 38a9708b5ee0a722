//! Core shared types: reference records, lookup queries and lookup outcomes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::LookupFailure;

/// Identifier of a reference record, unique within one run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// One reference person entry with its ground-truth expectation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    pub id: RecordId,
    pub last_name: String,
    pub first_name: String,
    pub patronymic: String,
    /// `None` means the birth date is unknown, not that nothing should match
    pub birthday: Option<NaiveDate>,
    /// `0` expects no match; anything else expects a match and names the reference entry
    pub expected_result: i64,
}

impl TestRecord {
    pub fn new(
        id: impl Into<RecordId>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        patronymic: impl Into<String>,
        birthday: Option<NaiveDate>,
        expected_result: i64,
    ) -> Self {
        Self {
            id: id.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            patronymic: patronymic.into(),
            birthday,
            expected_result,
        }
    }

    pub fn expects_match(&self) -> bool {
        self.expected_result != 0
    }
}

/// Query sent to the search service for a single record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupQuery {
    pub record_id: RecordId,
    /// Free-text name: first name, last name, patronymic joined by single spaces
    pub input: String,
    pub birthday: Option<NaiveDate>,
}

impl LookupQuery {
    pub fn from_record(record: &TestRecord) -> Self {
        Self {
            record_id: record.id,
            input: format!("{} {} {}", record.first_name, record.last_name, record.patronymic),
            birthday: record.birthday,
        }
    }

    /// Query parameters in wire order; `birthday` only when known
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("input", self.input.clone())];
        if let Some(birthday) = self.birthday {
            params.push(("birthday", birthday.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

/// One entry of a successful search response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub id: i64,
    #[serde(default)]
    pub name_full: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub coefficient: Option<f64>,
}

impl MatchResult {
    pub fn with_id(id: i64) -> Self {
        Self {
            id,
            name_full: None,
            birthday: None,
            coefficient: None,
        }
    }
}

/// Result of one lookup call
#[derive(Clone, Debug, PartialEq)]
pub enum LookupOutcome {
    /// Non-empty successful response
    Matches(Vec<MatchResult>),
    /// Successful response with an empty array
    NoMatches,
    /// Transport error, non-success status, timeout or malformed body
    Failed(LookupFailure),
}

impl LookupOutcome {
    /// Builds the outcome for a decoded success body
    pub fn from_entries(entries: Vec<MatchResult>) -> Self {
        if entries.is_empty() {
            LookupOutcome::NoMatches
        } else {
            LookupOutcome::Matches(entries)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LookupOutcome::Matches(_) => "matches",
            LookupOutcome::NoMatches => "no_matches",
            LookupOutcome::Failed(_) => "failed",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LookupOutcome::Failed(_))
    }
}

/// A record paired with the outcome of its lookup
#[derive(Clone, Debug, PartialEq)]
pub struct DispatchedLookup {
    pub record: TestRecord,
    pub outcome: LookupOutcome,
}

//! Shaping of raw reference rows into test records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared::{SharedError, SharedResult, TestRecord};

/// Reference row as exported from the check table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: i64,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub birthday: Option<String>,
    pub result: i64,
}

/// A full name split into its three parts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    pub last_name: String,
    pub first_name: String,
    pub patronymic: String,
}

/// Split `Last First Patronymic...` into parts.
///
/// Whitespace runs collapse to one separator, missing parts become empty
/// strings and everything after the second word is the patronymic.
pub fn split_client_name(client_name: &str) -> NameParts {
    let words: Vec<&str> = client_name.split_whitespace().collect();

    NameParts {
        last_name: words.first().copied().unwrap_or_default().to_string(),
        first_name: words.get(1).copied().unwrap_or_default().to_string(),
        patronymic: words.get(2..).map(|rest| rest.join(" ")).unwrap_or_default(),
    }
}

/// Parse a stored birthday: `YYYYMMDD` or `YYYY-MM-DD`, blank meaning unknown
pub fn parse_birthday(record_id: i64, value: Option<&str>) -> SharedResult<Option<NaiveDate>> {
    let value = match value.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(value) => value,
    };

    NaiveDate::parse_from_str(value, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map(Some)
        .map_err(|_| SharedError::InvalidBirthday {
            record_id,
            value: value.to_string(),
        })
}

/// Turn one raw row into an immutable test record
pub fn normalize_record(raw: RawRecord) -> SharedResult<TestRecord> {
    let birthday = parse_birthday(raw.id, raw.birthday.as_deref())?;
    let name = split_client_name(&raw.client_name);

    Ok(TestRecord::new(
        raw.id,
        name.last_name,
        name.first_name,
        name.patronymic,
        birthday,
        raw.result,
    ))
}

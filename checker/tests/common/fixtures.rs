//! Reference record fixtures for checker integration tests

use serde_json::{Value, json};

/// Raw check-table row as the record file stores it
pub fn raw_row(id: i64, client_name: &str, birthday: Option<&str>, result: i64) -> Value {
    json!({
        "id": id,
        "client_name": client_name,
        "birthday": birthday,
        "result": result,
    })
}

/// The single `Ivanov Ivan Ivanovich` record with the given expectation
pub fn ivanov_rows(expected: i64) -> Vec<Value> {
    vec![raw_row(1, "Ivanov Ivan Ivanovich", None, expected)]
}

/// Search-service entry with only an identifier
pub fn entry(id: i64) -> Value {
    json!({ "id": id })
}

/// Search-service entry as the service really returns it
pub fn full_entry(id: i64, name: &str, birthday: &str, coefficient: f64) -> Value {
    json!({
        "id": id,
        "nameFull": name,
        "birthday": birthday,
        "coefficient": coefficient,
    })
}

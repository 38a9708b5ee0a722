//! Human-readable and JSON renderings of a run summary

use std::time::Duration;
use serde::Serialize;

use shared::{Discrepancy, RunSummary};

/// JSON document written next to the console report
#[derive(Debug, Serialize)]
pub struct SummaryExport<'a> {
    pub elapsed_secs: f64,
    pub total: u64,
    #[serde(flatten)]
    pub summary: &'a RunSummary,
}

impl<'a> SummaryExport<'a> {
    pub fn new(summary: &'a RunSummary, elapsed: Duration) -> Self {
        Self {
            elapsed_secs: elapsed.as_secs_f64(),
            total: summary.total(),
            summary,
        }
    }
}

/// Render the console report
pub fn render_summary(summary: &RunSummary, elapsed: Duration) -> String {
    let mut lines = vec![
        "Run statistics:".to_string(),
        format!("Records checked: {}", summary.total()),
        format!("Matching results: {}", summary.matches),
        format!(
            "Mismatches (found, but ID does not match): {}",
            summary.mismatch_found_wrong_id
        ),
        format!(
            "Mismatches (match expected, response empty): {}",
            summary.mismatch_expected_but_empty
        ),
        String::new(),
        format!("Failed requests: {}", summary.failed_requests.len()),
    ];

    lines.extend(summary.failed_requests.iter().map(|failed| {
        format!(
            "Request {} (record {}): Error - {}",
            failed.index, failed.record_id, failed.reason
        )
    }));

    if !summary.discrepancies.is_empty() {
        lines.push(String::new());
        lines.push("Discrepancy details:".to_string());
        lines.extend(summary.discrepancies.iter().map(render_discrepancy));
    }

    lines.push(String::new());
    lines.push(format!("Completed in {:.3}s", elapsed.as_secs_f64()));
    lines.join("\n")
}

fn render_discrepancy(discrepancy: &Discrepancy) -> String {
    let birthday = discrepancy
        .birthday
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "ID: {}, Name: {} {} {}, Birthday: {}, Expected result: {}, Observed result: {}",
        discrepancy.id,
        discrepancy.last_name,
        discrepancy.first_name,
        discrepancy.patronymic,
        birthday,
        discrepancy.expected_result,
        discrepancy.observed_identifier
    )
}

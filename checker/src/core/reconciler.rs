//! Classification of lookup outcomes against the expected results

use shared::{
    Discrepancy, DiscrepancyKind, DispatchedLookup, FailedRequest, LookupOutcome, RunSummary,
    TestRecord,
};

/// How one record's lookup compared with its expectation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconciliationOutcome {
    /// Expectation and response agree
    Match,
    /// A match came back although none was expected
    MismatchFoundWrongId { observed_identifier: i64 },
    /// A match was expected but the response was empty
    MismatchExpectedButEmpty,
    /// The lookup itself failed; the record is not judged
    RequestFailed { reason: String },
}

/// Classify one record against its lookup outcome.
///
/// An expected match counts as `Match` whenever the service returned any
/// entry; the returned identifier is not compared with `expected_result`.
pub fn classify(record: &TestRecord, outcome: &LookupOutcome) -> ReconciliationOutcome {
    let first_match = match outcome {
        LookupOutcome::Failed(failure) => {
            return ReconciliationOutcome::RequestFailed {
                reason: failure.reason(),
            };
        }
        LookupOutcome::Matches(entries) => entries.first(),
        LookupOutcome::NoMatches => None,
    };

    match (first_match, record.expects_match()) {
        (Some(_), true) => ReconciliationOutcome::Match,
        (Some(entry), false) => ReconciliationOutcome::MismatchFoundWrongId {
            observed_identifier: entry.id,
        },
        (None, true) => ReconciliationOutcome::MismatchExpectedButEmpty,
        (None, false) => ReconciliationOutcome::Match,
    }
}

/// Folds classified records into a run summary, in encounter order
#[derive(Debug, Default)]
pub struct Reconciler {
    summary: RunSummary,
    next_index: usize,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the next dispatched lookup and add it to the aggregates
    pub fn add(&mut self, dispatched: &DispatchedLookup) -> ReconciliationOutcome {
        let index = self.next_index;
        self.next_index += 1;

        let record = &dispatched.record;
        let outcome = classify(record, &dispatched.outcome);

        match &outcome {
            ReconciliationOutcome::Match => self.summary.matches += 1,
            ReconciliationOutcome::MismatchFoundWrongId { observed_identifier } => {
                self.summary.mismatch_found_wrong_id += 1;
                self.summary.discrepancies.push(Discrepancy::new(
                    DiscrepancyKind::FoundWrongId,
                    record,
                    *observed_identifier,
                ));
            }
            ReconciliationOutcome::MismatchExpectedButEmpty => {
                self.summary.mismatch_expected_but_empty += 1;
                self.summary
                    .discrepancies
                    .push(Discrepancy::new(DiscrepancyKind::ExpectedButEmpty, record, 0));
            }
            ReconciliationOutcome::RequestFailed { reason } => {
                self.summary.failed_requests.push(FailedRequest {
                    index,
                    record_id: record.id,
                    reason: reason.clone(),
                });
            }
        }

        outcome
    }

    pub fn finish(self) -> RunSummary {
        self.summary
    }
}

/// Reconcile a complete dispatched record set
pub fn reconcile(dispatched: &[DispatchedLookup]) -> RunSummary {
    let mut reconciler = Reconciler::new();
    for item in dispatched {
        reconciler.add(item);
    }
    reconciler.finish()
}

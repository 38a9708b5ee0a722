//! HTTP lookup client for the search service

use std::time::Instant;
use async_trait::async_trait;
use url::Url;

use shared::{LookupFailure, LookupOutcome, LookupQuery, MatchResult};
use crate::error::{CheckerError, CheckerResult};
use crate::traits::LookupClient;
use crate::types::{CheckerConfig, SearchOptions};

/// Lookup client backed by one pooled `reqwest` session.
///
/// The session is shared by every concurrent lookup of a run and its
/// connections are released when the client is dropped.
pub struct RealLookupClient {
    client: reqwest::Client,
    search_url: Url,
    search_options: SearchOptions,
}

impl RealLookupClient {
    /// Build the session from the run configuration
    pub fn new(config: &CheckerConfig) -> CheckerResult<Self> {
        let search_url = config.search_url()?;

        // Certificate checks are only relaxed for the local search service
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .pool_max_idle_per_host(config.max_concurrent)
            .build()
            .map_err(|e| CheckerError::HttpClientError {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            search_url,
            search_options: config.search_options.clone(),
        })
    }

    /// Full request URL for a query, parameters form-urlencoded
    pub fn request_url(&self, query: &LookupQuery) -> Url {
        let mut url = self.search_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.params() {
                pairs.append_pair(key, &value);
            }
            for (key, value) in self.search_options.params() {
                pairs.append_pair(key, &value);
            }
        }
        url
    }

    async fn execute(&self, url: Url) -> Result<Vec<MatchResult>, LookupFailure> {
        let response = self.client.get(url).send().await.map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupFailure::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown status").to_string(),
            });
        }

        let body = response.bytes().await.map_err(classify_error)?;
        decode_entries(&body)
    }
}

#[async_trait]
impl LookupClient for RealLookupClient {
    async fn lookup(&self, query: LookupQuery) -> LookupOutcome {
        let url = self.request_url(&query);
        let started = Instant::now();

        let outcome = match self.execute(url).await {
            Ok(entries) => LookupOutcome::from_entries(entries),
            Err(failure) => {
                tracing::warn!(
                    record_id = %query.record_id,
                    reason = %failure,
                    "⚠️ Lookup failed"
                );
                LookupOutcome::Failed(failure)
            }
        };

        tracing::debug!(
            record_id = %query.record_id,
            outcome = outcome.kind(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Lookup finished"
        );
        outcome
    }
}

/// Decode a success body; anything but a JSON array of entries with an `id` is malformed
pub fn decode_entries(body: &[u8]) -> Result<Vec<MatchResult>, LookupFailure> {
    serde_json::from_slice::<Vec<MatchResult>>(body).map_err(|e| LookupFailure::MalformedResponse {
        message: e.to_string(),
    })
}

fn classify_error(error: reqwest::Error) -> LookupFailure {
    if error.is_timeout() {
        LookupFailure::Timeout
    } else {
        LookupFailure::Transport {
            message: error.to_string(),
        }
    }
}

//! Console reporter with optional JSON summary export

use std::path::PathBuf;
use std::time::Duration;
use async_trait::async_trait;

use shared::RunSummary;
use crate::core::report::{SummaryExport, render_summary};
use crate::error::CheckerResult;
use crate::traits::Reporter;

/// Prints the report to stdout and, when configured, writes the summary as JSON
pub struct ConsoleReporter {
    summary_path: Option<PathBuf>,
}

impl ConsoleReporter {
    pub fn new(summary_path: Option<PathBuf>) -> Self {
        Self { summary_path }
    }

    /// Write the JSON summary if a path was configured
    pub async fn export(&self, summary: &RunSummary, elapsed: Duration) -> CheckerResult<()> {
        let Some(path) = &self.summary_path else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(&SummaryExport::new(summary, elapsed))?;
        tokio::fs::write(path, json).await?;

        tracing::info!(path = %path.display(), "💾 Summary written");
        Ok(())
    }
}

#[async_trait]
impl Reporter for ConsoleReporter {
    async fn report(&self, summary: &RunSummary, elapsed: Duration) -> CheckerResult<()> {
        println!("\n{}", render_summary(summary, elapsed));
        self.export(summary, elapsed).await
    }
}

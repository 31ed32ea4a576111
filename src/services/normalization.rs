use anyhow::Result;
use log::info;

use crate::config::AppConfig;
use crate::domain::{PlayLine, RunSummary};
use crate::files::{self, JsonLinesWriter};
use crate::records::normalize_play;
use crate::report;

/// Coerces scores, ranks players and rewrites timestamps as instants
pub struct NormalizationService {
    config: AppConfig,
}

impl NormalizationService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<RunSummary> {
        info!("=== Normalizing Plays ===");

        let input = &self.config.paths.resolved;
        let records = files::read_json_lines::<PlayLine>(input)?;
        info!("  → Read {} records from {}", records.len(), input.display());

        let mut writer = JsonLinesWriter::create(&self.config.paths.normalized)?;
        let mut summary = RunSummary::new();

        for record in records {
            let outcome = record.and_then(|line| normalize_play(&line));
            if let Ok(play) = &outcome {
                writer.write(play)?;
            }
            summary.record(&outcome);
        }
        writer.finish()?;

        report::print_run_summary(&summary);
        let sample = files::preview_lines(&self.config.paths.normalized, self.config.import.sample_size)?;
        report::print_sample("Sample output", &sample);

        info!("=== Normalization Complete ===");
        Ok(summary)
    }
}

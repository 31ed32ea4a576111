use anyhow::{Context, Result};
use log::info;

use crate::config::AppConfig;
use crate::database::DocumentStore;
use crate::domain::{NormalizedPlay, RunSummary};
use crate::errors::SkipReason;
use crate::files;
use crate::report;
use crate::sink::{write_in_batches, WriteSummary};

pub struct ImportOutcome {
    pub summary: RunSummary,
    pub write: WriteSummary,
    pub plays_before: usize,
    pub plays_after: usize,
}

/// Appends normalized plays to the store in batches
pub struct ImportService<'a> {
    config: AppConfig,
    store: &'a dyn DocumentStore,
}

impl<'a> ImportService<'a> {
    pub fn new(config: AppConfig, store: &'a dyn DocumentStore) -> Self {
        Self { config, store }
    }

    pub fn run(&self) -> Result<ImportOutcome> {
        info!("=== Importing Plays ===");

        let plays_before = self.store.count_plays()?;
        info!("  → Store holds {} plays before import", plays_before);

        let (plays, mut summary) = self.load_plays()?;
        info!("  → {} plays ready to import", plays.len());

        let write = write_in_batches(&plays, self.config.import.batch_size, |batch| {
            self.store.add_plays(batch)
        });
        summary.record_write_failures(write.failed);

        let plays_after = self.store.count_plays()?;
        info!(
            "  → Store holds {} plays after import ({} added)",
            plays_after,
            plays_after.saturating_sub(plays_before)
        );

        report::print_run_summary(&summary);
        report::print_write_summary("plays", &write);
        self.print_sample()?;

        info!("=== Import Complete ===");
        Ok(ImportOutcome {
            summary,
            write,
            plays_before,
            plays_after,
        })
    }

    fn load_plays(&self) -> Result<(Vec<NormalizedPlay>, RunSummary)> {
        let input = &self.config.paths.normalized;
        let records = files::read_json_lines::<NormalizedPlay>(input)?;

        let mut summary = RunSummary::new();
        let mut plays = Vec::with_capacity(records.len());
        for record in records {
            let outcome = record.and_then(|play| {
                if play.players.is_empty() {
                    Err(SkipReason::NoPlayers)
                } else {
                    Ok(play)
                }
            });
            summary.record(&outcome);
            if let Ok(play) = outcome {
                plays.push(play);
            }
        }

        Ok((plays, summary))
    }

    fn print_sample(&self) -> Result<()> {
        let sample = self.store.sample_plays(self.config.import.sample_size)?;
        let lines = sample
            .iter()
            .map(|doc| {
                serde_json::to_string(&doc.play)
                    .map(|json| format!("{}: {}", doc.id, json))
                    .context("Failed to serialize sample play")
            })
            .collect::<Result<Vec<_>>>()?;
        report::print_sample("Sample of stored plays", &lines);
        Ok(())
    }
}

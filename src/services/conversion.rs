use anyhow::Result;
use log::info;

use crate::config::AppConfig;
use crate::domain::{ExportDocument, PlayLine};
use crate::files::{self, JsonLinesWriter};
use crate::records::{flatten_export, flatten_to_rows};
use crate::report;

/// Flattens the stats export into per-play JSONL or per-score CSV
pub struct ConversionService {
    config: AppConfig,
}

impl ConversionService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Export → one JSON play per line. Returns the number of plays written.
    pub fn run_jsonl(&self) -> Result<usize> {
        let lines = self.load_play_lines()?;
        let output = &self.config.paths.plays;

        let mut writer = JsonLinesWriter::create(output)?;
        for line in &lines {
            writer.write(line)?;
        }
        let written = writer.finish()?;
        info!("  → Converted {} plays to {}", written, output.display());

        let sample = files::preview_lines(output, self.config.import.sample_size)?;
        report::print_sample("Sample output", &sample);
        Ok(written)
    }

    /// Export → one CSV row per player score. Returns the number of rows.
    pub fn run_csv(&self) -> Result<usize> {
        let lines = self.load_play_lines()?;
        let output = &self.config.paths.csv;

        let rows = flatten_to_rows(&lines);
        let written = files::write_csv(output, &rows)?;
        info!("  → Converted {} plays into {} rows in {}", lines.len(), written, output.display());

        let sample = files::preview_lines(output, self.config.import.sample_size + 1)?;
        report::print_sample("Sample output", &sample);
        Ok(written)
    }

    fn load_play_lines(&self) -> Result<Vec<PlayLine>> {
        let input = &self.config.paths.export;
        info!("Reading export from {}...", input.display());

        let export: ExportDocument = files::read_json(input)?;
        info!(
            "  → Found {} games, {} players, {} plays",
            export.games.len(),
            export.players.len(),
            export.plays.len()
        );

        Ok(flatten_export(&export))
    }
}

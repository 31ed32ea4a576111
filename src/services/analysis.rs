use anyhow::Result;
use log::info;
use std::collections::BTreeSet;

use super::resolution::snapshot_resolver;
use crate::config::AppConfig;
use crate::database::DocumentStore;
use crate::domain::PlayLine;
use crate::files;
use crate::identity::{suggest, IdentityResolver};
use crate::report;

/// Which export names the store can and cannot resolve
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingDataReport {
    pub resolved_games: BTreeSet<String>,
    pub resolved_players: BTreeSet<String>,
    pub missing_games: BTreeSet<String>,
    pub missing_players: BTreeSet<String>,
    /// Missing games with at least one play whose players all resolve
    pub priority_games: BTreeSet<String>,
    pub malformed_lines: usize,
}

impl MissingDataReport {
    /// Sort every name of the given plays into resolved and missing sets
    pub fn build<'a>(
        lines: impl IntoIterator<Item = &'a PlayLine>,
        resolver: &IdentityResolver,
    ) -> Self {
        let mut report = Self::default();

        for line in lines {
            let mut all_players_resolve = true;
            for entry in line.players.iter().filter(|p| !p.player.is_empty()) {
                if resolver.resolve_player(&entry.player).is_some() {
                    report.resolved_players.insert(entry.player.clone());
                } else {
                    report.missing_players.insert(entry.player.clone());
                    all_players_resolve = false;
                }
            }

            if line.game.is_empty() {
                continue;
            }
            if resolver.resolve_game(&line.game).is_some() {
                report.resolved_games.insert(line.game.clone());
            } else {
                report.missing_games.insert(line.game.clone());
                if all_players_resolve {
                    report.priority_games.insert(line.game.clone());
                }
            }
        }

        report
    }
}

/// Read-only diagnostics over the converted plays
pub struct AnalysisService<'a> {
    config: AppConfig,
    store: &'a dyn DocumentStore,
}

impl<'a> AnalysisService<'a> {
    pub fn new(config: AppConfig, store: &'a dyn DocumentStore) -> Self {
        Self { config, store }
    }

    /// Report missing names and write the missing games list file
    pub fn analyze(&self) -> Result<MissingDataReport> {
        info!("=== Analyzing Missing Data ===");
        let resolver = snapshot_resolver(&self.config, self.store)?;
        let missing = self.build_report(&resolver)?;

        report::print_heading("Missing Data Analysis");
        println!("  Games to add to store: {}", missing.missing_games.len());
        println!("  Players to add to store: {}", missing.missing_players.len());
        println!("  Priority games (all players known): {}", missing.priority_games.len());
        report::print_names("Priority games", &missing.priority_games);
        report::print_names("Missing games", &missing.missing_games);
        report::print_names("Missing players", &missing.missing_players);
        report::print_names("Games already in store", &missing.resolved_games);
        report::print_names("Players already in store", &missing.resolved_players);

        let output = &self.config.paths.missing_list;
        let lines = report::missing_games_file_lines(&missing.priority_games, &missing.missing_games);
        files::write_text(output, &lines)?;
        info!("  → Lists saved to {}", output.display());

        Ok(missing)
    }

    /// Print close store names for every unresolved export name
    pub fn suggest(&self) -> Result<MissingDataReport> {
        info!("=== Suggesting Name Matches ===");
        let resolver = snapshot_resolver(&self.config, self.store)?;
        let missing = self.build_report(&resolver)?;
        let settings = &self.config.suggest;

        report::print_heading("Game name suggestions");
        for name in &missing.missing_games {
            let found = suggest(name, resolver.games().names(), settings);
            report::print_suggestions(name, &found);
        }

        report::print_heading("Player name suggestions");
        for name in &missing.missing_players {
            let found = suggest(name, resolver.players().names(), settings);
            report::print_suggestions(name, &found);
        }

        println!("\nSuggestions are advisory. Add confirmed ones to the name mappings file.");
        Ok(missing)
    }

    fn build_report(&self, resolver: &IdentityResolver) -> Result<MissingDataReport> {
        let input = &self.config.paths.plays;
        let records = files::read_json_lines::<PlayLine>(input)?;

        let mut lines = Vec::with_capacity(records.len());
        let mut malformed = 0;
        for record in records {
            match record {
                Ok(line) => lines.push(line),
                Err(reason) => {
                    log::warn!("Skipping record: {}", reason);
                    malformed += 1;
                }
            }
        }

        let mut missing = MissingDataReport::build(&lines, resolver);
        missing.malformed_lines = malformed;
        info!(
            "  → {} plays: {} unique games, {} unique players",
            lines.len(),
            missing.resolved_games.len() + missing.missing_games.len(),
            missing.resolved_players.len() + missing.missing_players.len()
        );
        Ok(missing)
    }
}

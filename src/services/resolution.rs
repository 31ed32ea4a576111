use anyhow::Result;
use log::{info, warn};

use crate::config::{AppConfig, NameMappings};
use crate::database::DocumentStore;
use crate::domain::{PlayLine, RunSummary};
use crate::files::{self, JsonLinesWriter};
use crate::identity::{Catalog, IdentityResolver, UnresolvedNames};
use crate::report;

pub struct ResolutionOutcome {
    pub summary: RunSummary,
    pub unresolved: UnresolvedNames,
}

/// Build a resolver over a fresh snapshot of the store's games and players
pub fn snapshot_resolver(config: &AppConfig, store: &dyn DocumentStore) -> Result<IdentityResolver> {
    let mappings = NameMappings::load(config.paths.mappings.as_deref())?;
    let games = Catalog::from_games(&store.list_games()?);
    let players = Catalog::from_players(&store.list_players()?);
    info!(
        "  → Store snapshot: {} games, {} players; {} game and {} player overrides",
        games.len(),
        players.len(),
        mappings.games.len(),
        mappings.players.len()
    );
    if games.is_empty() || players.is_empty() {
        warn!("Store has no games or no players; every play will be skipped. Run add-games and add-players first");
    }

    Ok(IdentityResolver::new(games, players, mappings))
}

/// Rewrites play names into store identifiers, dropping unresolvable plays
pub struct ResolutionService<'a> {
    config: AppConfig,
    store: &'a dyn DocumentStore,
}

impl<'a> ResolutionService<'a> {
    pub fn new(config: AppConfig, store: &'a dyn DocumentStore) -> Self {
        Self { config, store }
    }

    pub fn run(&self) -> Result<ResolutionOutcome> {
        info!("=== Resolving Names ===");
        let mut resolver = snapshot_resolver(&self.config, self.store)?;

        let input = &self.config.paths.plays;
        let records = files::read_json_lines::<PlayLine>(input)?;
        info!("  → Read {} records from {}", records.len(), input.display());

        let mut writer = JsonLinesWriter::create(&self.config.paths.resolved)?;
        let mut summary = RunSummary::new();

        for record in records {
            let outcome = record.and_then(|line| resolver.resolve_play(&line));
            if let Ok(resolved) = &outcome {
                writer.write(resolved)?;
            }
            summary.record(&outcome);
        }
        writer.finish()?;

        let unresolved = resolver.unresolved().clone();
        report::print_run_summary(&summary);
        report::print_names("Games not found in store", &unresolved.games);
        report::print_names("Players not found in store", &unresolved.players);

        info!("=== Resolution Complete ===");
        Ok(ResolutionOutcome { summary, unresolved })
    }
}

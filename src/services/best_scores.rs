use anyhow::Result;
use log::{error, info};
use std::collections::HashMap;

use crate::config::AppConfig;
use crate::database::DocumentStore;
use crate::domain::{DocumentId, NormalizedPlay, RunSummary};
use crate::files;
use crate::report;
use crate::scoring::{plan_updates, summarize_history, UpdateDirective};

pub struct BestScoreOutcome {
    pub directives: Vec<UpdateDirective>,
    pub applied: usize,
    pub failed: usize,
}

/// Reconciles stored best scores with the historical plays
pub struct BestScoreService<'a> {
    config: AppConfig,
    store: &'a dyn DocumentStore,
}

impl<'a> BestScoreService<'a> {
    pub fn new(config: AppConfig, store: &'a dyn DocumentStore) -> Self {
        Self { config, store }
    }

    /// Plan updates and, only when `apply` is set, write them
    pub fn run(&self, apply: bool) -> Result<BestScoreOutcome> {
        info!("=== Reconciling Best Scores ({}) ===", if apply { "apply" } else { "dry run" });

        let games = self.store.list_games()?;
        let player_names: HashMap<DocumentId, String> = self
            .store
            .list_players()?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();
        let plays = self.load_plays()?;
        info!(
            "  → {} games, {} players, {} historical plays",
            games.len(),
            player_names.len(),
            plays.len()
        );

        report::print_history(&summarize_history(&games, &plays));

        let directives = plan_updates(&games, &plays, &player_names);
        info!("  → {} games need a best score update", directives.len());

        let mut outcome = BestScoreOutcome {
            directives,
            applied: 0,
            failed: 0,
        };
        if apply {
            self.apply(&mut outcome);
        }

        report::print_directives(&outcome.directives, apply);
        if apply {
            println!("\nUpdated {} games, {} failed", outcome.applied, outcome.failed);
        }

        info!("=== Best Score Reconciliation Complete ===");
        Ok(outcome)
    }

    fn load_plays(&self) -> Result<Vec<NormalizedPlay>> {
        let records = files::read_json_lines::<NormalizedPlay>(&self.config.paths.normalized)?;
        let mut summary = RunSummary::new();
        let mut plays = Vec::with_capacity(records.len());

        for record in records {
            summary.record(&record);
            if let Ok(play) = record {
                plays.push(play);
            }
        }

        if summary.errored > 0 {
            info!("  → Ignored {} malformed play lines", summary.errored);
        }
        Ok(plays)
    }

    fn apply(&self, outcome: &mut BestScoreOutcome) {
        for directive in &outcome.directives {
            let value = directive.new_value.to_string();
            match self.store.update_best_score(&directive.game_id, &value) {
                Ok(()) => {
                    info!("  → {}: {}", directive.game_name, value);
                    outcome.applied += 1;
                }
                Err(e) => {
                    error!("Failed to update best score of {}: {:#}", directive.game_name, e);
                    outcome.failed += 1;
                }
            }
        }
    }
}

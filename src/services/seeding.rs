use anyhow::Result;
use log::info;
use std::collections::HashSet;

use crate::config::{AppConfig, SeedCatalog};
use crate::database::DocumentStore;
use crate::report;
use crate::sink::{select_new_by_name, write_in_batches};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub written: usize,
    pub already_present: usize,
    pub failed: usize,
}

/// Adds catalog games and players whose names the store does not have yet
pub struct SeedingService<'a> {
    config: AppConfig,
    store: &'a dyn DocumentStore,
}

impl<'a> SeedingService<'a> {
    pub fn new(config: AppConfig, store: &'a dyn DocumentStore) -> Self {
        Self { config, store }
    }

    pub fn add_games(&self) -> Result<SeedOutcome> {
        info!("=== Adding Games ===");
        let catalog = SeedCatalog::load(self.config.paths.catalog.as_deref())?;

        let present: HashSet<String> = self.store.list_games()?.into_iter().map(|g| g.name).collect();
        info!("  → Store holds {} games; catalog lists {}", present.len(), catalog.games.len());

        let selection = select_new_by_name(catalog.games, &present, |game| game.name.as_str());
        for name in &selection.existing {
            info!("  → Skipping '{}' (already exists)", name);
        }

        let write = write_in_batches(&selection.new, self.config.import.batch_size, |batch| {
            self.store.add_games(batch)
        });
        report::print_write_summary("games", &write);

        Ok(SeedOutcome {
            written: write.written,
            already_present: selection.existing.len(),
            failed: write.failed,
        })
    }

    pub fn add_players(&self) -> Result<SeedOutcome> {
        info!("=== Adding Players ===");
        let catalog = SeedCatalog::load(self.config.paths.catalog.as_deref())?;

        let present: HashSet<String> = self.store.list_players()?.into_iter().map(|p| p.name).collect();
        info!("  → Store holds {} players; catalog lists {}", present.len(), catalog.players.len());

        let selection = select_new_by_name(catalog.players, &present, |name| name.as_str());
        for name in &selection.existing {
            info!("  → Skipping '{}' (already exists)", name);
        }

        let write = write_in_batches(&selection.new, self.config.import.batch_size, |batch| {
            self.store.add_players(batch)
        });
        report::print_write_summary("players", &write);

        Ok(SeedOutcome {
            written: write.written,
            already_present: selection.existing.len(),
            failed: write.failed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::SqliteStore;

    #[test]
    fn test_seeding_twice_adds_nothing_the_second_time() {
        let store = SqliteStore::in_memory().unwrap();
        let service = SeedingService::new(AppConfig::new(), &store);

        let first = service.add_games().unwrap();
        assert_eq!(first.written, 40);
        assert_eq!(first.already_present, 0);

        let second = service.add_games().unwrap();
        assert_eq!(second.written, 0);
        assert_eq!(second.already_present, 40);
        assert_eq!(store.list_games().unwrap().len(), 40);

        assert_eq!(service.add_players().unwrap().written, 9);
        assert_eq!(service.add_players().unwrap().written, 0);
        assert_eq!(store.list_players().unwrap().len(), 9);
    }
}

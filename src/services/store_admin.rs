use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::config::AppConfig;
use crate::database::{DocumentStore, SqliteStore};
use crate::report;
use crate::scoring::StoredBestScore;

const GAMES_WITHOUT_BEST_SHOWN: usize = 10;

/// Counts of each collection, as printed by `inspect`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOverview {
    pub games: usize,
    pub players: usize,
    pub plays: usize,
    pub games_with_best_score: usize,
    /// Stored best scores that are not in `name:score` form
    pub unparsed_best_scores: usize,
}

pub fn init_store(config: &AppConfig) -> Result<()> {
    info!("=== Initializing Store ===");
    SqliteStore::create(&config.store.path)?;
    Ok(())
}

pub fn inspect(store: &dyn DocumentStore) -> Result<StoreOverview> {
    let games = store.list_games()?;
    let players = store.list_players()?;
    let plays = store.count_plays()?;

    let (with_best, without_best): (Vec<_>, Vec<_>) = games
        .iter()
        .partition(|g| StoredBestScore::parse(g.best_score.as_deref()) != StoredBestScore::Absent);
    let mut unparsed = 0;

    report::print_heading("Store contents");
    println!("  {} {}", "games:".dimmed(), games.len());
    println!("  {} {}", "players:".dimmed(), players.len());
    println!("  {} {}", "plays:".dimmed(), plays);

    println!("\n{} ({})", "Games with best scores".bold(), with_best.len());
    for game in &with_best {
        let stored = game.best_score.as_deref().unwrap_or_default();
        let note = match StoredBestScore::parse(Some(stored)) {
            StoredBestScore::Malformed(_) => {
                unparsed += 1;
                " [unparsed]".yellow()
            }
            _ => "".normal(),
        };
        println!(
            "  - {}: {}{} ({})",
            game.name,
            stored,
            note,
            game.win_direction().as_str().dimmed()
        );
    }

    println!("\n{} ({})", "Games without best scores".bold(), without_best.len());
    for game in without_best.iter().take(GAMES_WITHOUT_BEST_SHOWN) {
        println!("  - {}: {}", game.name, game.best_score.as_deref().unwrap_or("None"));
    }
    if without_best.len() > GAMES_WITHOUT_BEST_SHOWN {
        println!("  ... and {} more", without_best.len() - GAMES_WITHOUT_BEST_SHOWN);
    }

    Ok(StoreOverview {
        games: games.len(),
        players: players.len(),
        plays,
        games_with_best_score: with_best.len(),
        unparsed_best_scores: unparsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewGame, Tier};

    #[test]
    fn test_unparsed_best_score_still_counts_as_present() {
        let store = SqliteStore::in_memory().unwrap();
        let game = |name: &str| NewGame {
            name: name.to_string(),
            tier: Tier::Medium,
            hi_score_wins: true,
        };
        store.add_games(&[game("Catan"), game("Root"), game("Scythe"), game("Trajan")]).unwrap();

        let ids: Vec<String> = store.list_games().unwrap().into_iter().map(|g| g.id).collect();
        store.update_best_score(&ids[0], "Trevor:85").unwrap();
        store.update_best_score(&ids[1], "Trevor").unwrap();
        store.update_best_score(&ids[2], "N/A").unwrap();

        let overview = inspect(&store).unwrap();
        assert_eq!(overview.games, 4);
        assert_eq!(overview.games_with_best_score, 2);
        assert_eq!(overview.unparsed_best_scores, 1);
    }
}

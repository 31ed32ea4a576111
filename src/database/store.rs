use anyhow::{Context, Result};
use log::info;
use rusqlite::Connection;
use std::path::Path;

use super::connection::{create_memory_pool, create_pool, get_connection, DbPool};
use super::models::{BatchReport, RecordFailure};
use super::{games, players, plays, setup};
use crate::domain::{GameDocument, NewGame, NormalizedPlay, PlayDocument, PlayerDocument};

/// Collections of games, players and plays keyed by store-assigned ids
pub trait DocumentStore {
    fn list_games(&self) -> Result<Vec<GameDocument>>;
    fn list_players(&self) -> Result<Vec<PlayerDocument>>;
    fn count_plays(&self) -> Result<usize>;
    fn sample_plays(&self, limit: usize) -> Result<Vec<PlayDocument>>;

    /// Each call writes one batch in one transaction
    fn add_games(&self, games: &[NewGame]) -> Result<BatchReport>;
    fn add_players(&self, names: &[String]) -> Result<BatchReport>;
    fn add_plays(&self, plays: &[NormalizedPlay]) -> Result<BatchReport>;

    fn update_best_score(&self, game_id: &str, best_score: &str) -> Result<()>;
}

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open an existing store
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Destination store not found at {}. Run `playlog-migrate init-store` or set PLAYLOG_STORE",
                path.display()
            );
        }
        Self::with_pool(create_pool(path)?)
    }

    /// Create the store file if needed and make sure the schema exists
    pub fn create(path: &Path) -> Result<Self> {
        let store = Self::with_pool(create_pool(path)?)?;
        info!("  → Store ready at {}", path.display());
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        Self::with_pool(create_memory_pool()?)
    }

    fn with_pool(pool: DbPool) -> Result<Self> {
        let conn = get_connection(&pool)?;
        setup::apply_schema(&conn)?;
        drop(conn);
        Ok(Self { pool })
    }

    fn write_batch<T>(
        &self,
        records: &[T],
        insert: impl Fn(&Connection, &T) -> Result<()>,
    ) -> Result<BatchReport> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start batch transaction")?;
        let mut report = BatchReport::default();

        {
            let batch_conn: &Connection = &tx;
            for (index, record) in records.iter().enumerate() {
                match insert(batch_conn, record) {
                    Ok(()) => report.written += 1,
                    Err(e) => report.failures.push(RecordFailure {
                        index,
                        message: format!("{:#}", e),
                    }),
                }
            }
        }

        tx.commit().context("Failed to commit batch")?;
        Ok(report)
    }
}

impl DocumentStore for SqliteStore {
    fn list_games(&self) -> Result<Vec<GameDocument>> {
        let conn = get_connection(&self.pool)?;
        games::list_all(&conn)
    }

    fn list_players(&self) -> Result<Vec<PlayerDocument>> {
        let conn = get_connection(&self.pool)?;
        players::list_all(&conn)
    }

    fn count_plays(&self) -> Result<usize> {
        let conn = get_connection(&self.pool)?;
        plays::count(&conn)
    }

    fn sample_plays(&self, limit: usize) -> Result<Vec<PlayDocument>> {
        let conn = get_connection(&self.pool)?;
        plays::list_first(&conn, limit)
    }

    fn add_games(&self, new_games: &[NewGame]) -> Result<BatchReport> {
        self.write_batch(new_games, |conn, game| games::insert_game(conn, game).map(|_| ()))
    }

    fn add_players(&self, names: &[String]) -> Result<BatchReport> {
        self.write_batch(names, |conn, name| players::insert_player(conn, name).map(|_| ()))
    }

    fn add_plays(&self, new_plays: &[NormalizedPlay]) -> Result<BatchReport> {
        self.write_batch(new_plays, |conn, play| plays::insert_play(conn, play).map(|_| ()))
    }

    fn update_best_score(&self, game_id: &str, best_score: &str) -> Result<()> {
        let conn = get_connection(&self.pool)?;
        games::update_best_score(&conn, game_id, best_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tier;

    fn new_game(name: &str) -> NewGame {
        NewGame {
            name: name.to_string(),
            tier: Tier::Light,
            hi_score_wins: true,
        }
    }

    #[test]
    fn test_open_requires_existing_store() {
        let path = std::env::temp_dir().join("playlog_migrate_store_test_missing.db");
        let _ = std::fs::remove_file(&path);

        let err = SqliteStore::open(&path).err().unwrap();
        assert!(err.to_string().contains("init-store"));
        assert!(!path.exists());
    }

    #[test]
    fn test_create_then_open() {
        let dir = std::env::temp_dir().join("playlog_migrate_store_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("store.db");
        let _ = std::fs::remove_file(&path);

        let store = SqliteStore::create(&path).unwrap();
        store.add_players(&["Kip".to_string()]).unwrap();
        drop(store);

        let reopened = SqliteStore::open(&path).unwrap();
        let players = reopened.list_players().unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Kip");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_batch_writes_in_order() {
        let store = SqliteStore::in_memory().unwrap();
        let report = store
            .add_games(&[new_game("Bohnanza"), new_game("Gemblo")])
            .unwrap();

        assert_eq!(report.written, 2);
        assert!(report.failures.is_empty());

        let names: Vec<String> = store.list_games().unwrap().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Bohnanza", "Gemblo"]);
    }

    #[test]
    fn test_record_failure_does_not_abort_batch() {
        let store = SqliteStore::in_memory().unwrap();
        {
            let conn = get_connection(&store.pool).unwrap();
            conn.execute_batch(
                "CREATE TRIGGER reject_bad_player BEFORE INSERT ON players
                 WHEN NEW.name = 'Bad'
                 BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
            )
            .unwrap();
        }

        let report = store
            .add_players(&["Kip".to_string(), "Bad".to_string(), "Jack".to_string()])
            .unwrap();

        assert_eq!(report.written, 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failures[0].index, 1);
        assert!(report.failures[0].message.contains("rejected"));

        let names: Vec<String> = store.list_players().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Kip", "Jack"]);
    }
}

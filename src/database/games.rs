use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::{GameDocument, NewGame};

const GAME_COLUMNS: &str = "id, name, tier, hi_score_wins, best_score";

pub fn insert_game(conn: &Connection, game: &NewGame) -> Result<GameDocument> {
    let sql = format!(
        "INSERT INTO games (name, tier, hi_score_wins) VALUES (?1, ?2, ?3) RETURNING {}",
        GAME_COLUMNS
    );

    conn.query_row(
        &sql,
        params![game.name, game.tier.as_str(), game.hi_score_wins],
        parse_game_row,
    )
    .with_context(|| format!("Failed to insert game '{}'", game.name))
}

fn parse_game_row(row: &rusqlite::Row) -> rusqlite::Result<GameDocument> {
    Ok(GameDocument {
        id: row.get(0)?,
        name: row.get(1)?,
        tier: row.get(2)?,
        hi_score_wins: row.get(3)?,
        best_score: row.get(4)?,
    })
}

/// All games in insertion order
pub fn list_all(conn: &Connection) -> Result<Vec<GameDocument>> {
    let sql = format!("SELECT {} FROM games ORDER BY rowid", GAME_COLUMNS);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn update_best_score(conn: &Connection, game_id: &str, best_score: &str) -> Result<()> {
    let updated = conn
        .execute(
            "UPDATE games SET best_score = ?1 WHERE id = ?2",
            params![best_score, game_id],
        )
        .with_context(|| format!("Failed to update best score of game {}", game_id))?;

    if updated == 0 {
        anyhow::bail!("Game {} not found", game_id);
    }
    Ok(())
}

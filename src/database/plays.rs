use anyhow::{Context, Result};
use rusqlite::types::Type;
use rusqlite::{params, Connection};

use crate::domain::{NormalizedPlay, PlayDocument};

const PLAY_COLUMNS: &str = "id, date_time, game, players";

/// Append a play. Plays have no natural key, so this never deduplicates.
pub fn insert_play(conn: &Connection, play: &NormalizedPlay) -> Result<PlayDocument> {
    let players = serde_json::to_string(&play.players).context("Failed to serialize play players")?;
    let sql = format!(
        "INSERT INTO plays (date_time, game, players) VALUES (?1, ?2, ?3) RETURNING {}",
        PLAY_COLUMNS
    );

    conn.query_row(&sql, params![play.date_time, play.game, players], parse_play_row)
        .with_context(|| format!("Failed to insert play of game {}", play.game))
}

fn parse_play_row(row: &rusqlite::Row) -> rusqlite::Result<PlayDocument> {
    let players: String = row.get(3)?;
    let players = serde_json::from_str(&players)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(PlayDocument {
        id: row.get(0)?,
        play: NormalizedPlay {
            date_time: row.get(1)?,
            game: row.get(2)?,
            players,
        },
    })
}

pub fn count(conn: &Connection) -> Result<usize> {
    let total: i64 = conn
        .query_row("SELECT COUNT(*) FROM plays", [], |row| row.get(0))
        .context("Failed to count plays")?;
    Ok(total as usize)
}

/// The first `limit` plays in insertion order
pub fn list_first(conn: &Connection, limit: usize) -> Result<Vec<PlayDocument>> {
    let sql = format!("SELECT {} FROM plays ORDER BY rowid LIMIT ?1", PLAY_COLUMNS);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![limit as i64], parse_play_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

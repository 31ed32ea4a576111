use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::domain::PlayerDocument;

pub fn insert_player(conn: &Connection, name: &str) -> Result<PlayerDocument> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name";

    conn.query_row(sql, params![name], parse_player_row)
        .with_context(|| format!("Failed to insert player '{}'", name))
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerDocument> {
    Ok(PlayerDocument {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub fn list_all(conn: &Connection) -> Result<Vec<PlayerDocument>> {
    let sql = "SELECT id, name FROM players ORDER BY rowid";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

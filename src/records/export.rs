use std::collections::HashMap;

use serde::Serialize;

use super::score::score_as_text;
use crate::domain::{ExportDocument, ExportPlay, PlayLine, PlayerLine};

/// One player's score in a play, flattened for spreadsheets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    pub game: String,
    pub player: String,
    pub score: String,
}

/// Flatten the export into one line per play, in export order
pub fn flatten_export(export: &ExportDocument) -> Vec<PlayLine> {
    let games = build_name_lookup(export.games.iter().map(|g| (g.id, g.name.as_str())));
    let players = build_name_lookup(export.players.iter().map(|p| (p.id, p.name.as_str())));

    export
        .plays
        .iter()
        .map(|play| flatten_play(play, &games, &players))
        .collect()
}

/// Expand play lines into one row per player score
pub fn flatten_to_rows(lines: &[PlayLine]) -> Vec<ScoreRow> {
    lines
        .iter()
        .flat_map(|line| {
            line.players.iter().map(move |player| ScoreRow {
                date_time: line.date_time.clone(),
                game: line.game.clone(),
                player: player.player.clone(),
                score: score_as_text(&player.score),
            })
        })
        .collect()
}

fn build_name_lookup<'a>(entries: impl Iterator<Item = (i64, &'a str)>) -> HashMap<i64, &'a str> {
    entries.collect()
}

fn flatten_play(
    play: &ExportPlay,
    games: &HashMap<i64, &str>,
    players: &HashMap<i64, &str>,
) -> PlayLine {
    let game = games
        .get(&play.game_ref_id)
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Unknown Game (ID: {})", play.game_ref_id));

    let players = play
        .player_scores
        .iter()
        .map(|score| PlayerLine {
            player: players
                .get(&score.player_ref_id)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("Unknown Player (ID: {})", score.player_ref_id)),
            score: score.score.clone(),
        })
        .collect();

    PlayLine {
        date_time: play.play_date.clone(),
        game,
        players,
    }
}

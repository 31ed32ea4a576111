use std::collections::HashMap;

use super::types::{
    BestScore, Score, ScoreHolder, StoredBestScore, UpdateDirective, UpdateReason, WinDirection,
};
use crate::domain::{DocumentId, GameDocument, NormalizedPlay};

pub const UNKNOWN_PLAYER: &str = "Unknown";

/// Find the winning extreme across a game's plays.
///
/// Maximum for higher-wins games, minimum otherwise. On ties the first
/// score encountered in input order is kept.
pub fn extremal_score<'a>(
    plays: impl IntoIterator<Item = &'a NormalizedPlay>,
    direction: WinDirection,
) -> Option<ScoreHolder> {
    let mut best: Option<ScoreHolder> = None;

    for play in plays {
        for player in &play.players {
            let replaces = match &best {
                None => true,
                Some(current) => direction.improves_on(player.score, current.score),
            };
            if replaces {
                best = Some(ScoreHolder {
                    player_id: player.player.clone(),
                    score: player.score,
                });
            }
        }
    }

    best
}

/// Decide whether `candidate` should replace the stored best-score string
pub fn decide_update(
    stored: Option<&str>,
    candidate: &BestScore,
    direction: WinDirection,
) -> Option<UpdateReason> {
    match StoredBestScore::parse(stored) {
        StoredBestScore::Absent => Some(UpdateReason::NoCurrentBest),
        StoredBestScore::Malformed(_) => Some(UpdateReason::InvalidCurrentFormat),
        StoredBestScore::Recorded(current) => direction
            .improves_on(candidate.score, current.score)
            .then_some(UpdateReason::Improves {
                historical: candidate.score,
                current: current.score,
                direction,
            }),
    }
}

/// Compare historical plays against each stored game's best score.
///
/// Games without any plays are left alone. Player identifiers are turned
/// back into display names through `player_names`.
pub fn plan_updates(
    games: &[GameDocument],
    plays: &[NormalizedPlay],
    player_names: &HashMap<DocumentId, String>,
) -> Vec<UpdateDirective> {
    let plays_by_game = group_by_game(plays);

    games
        .iter()
        .filter_map(|game| {
            let game_plays = plays_by_game.get(game.id.as_str())?;
            let direction = game.win_direction();
            let holder = extremal_score(game_plays.iter().copied(), direction)?;

            let new_value = BestScore {
                player_name: player_names
                    .get(&holder.player_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_PLAYER.to_string()),
                score: holder.score,
            };
            let reason = decide_update(game.best_score.as_deref(), &new_value, direction)?;

            Some(UpdateDirective {
                game_id: game.id.clone(),
                game_name: game.name.clone(),
                previous: game.best_score.clone(),
                new_value,
                direction,
                reason,
            })
        })
        .collect()
}

/// Score range of one game across the historical plays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub game_id: DocumentId,
    pub game_name: String,
    pub plays: usize,
    pub high: Score,
    pub low: Score,
}

/// Highest and lowest score per game, in store order. Unplayed games are left out.
pub fn summarize_history(games: &[GameDocument], plays: &[NormalizedPlay]) -> Vec<GameHistory> {
    let plays_by_game = group_by_game(plays);

    games
        .iter()
        .filter_map(|game| {
            let game_plays = plays_by_game.get(game.id.as_str())?;
            let high = extremal_score(game_plays.iter().copied(), WinDirection::HigherWins)?;
            let low = extremal_score(game_plays.iter().copied(), WinDirection::LowerWins)?;

            Some(GameHistory {
                game_id: game.id.clone(),
                game_name: game.name.clone(),
                plays: game_plays.len(),
                high: high.score,
                low: low.score,
            })
        })
        .collect()
}

fn group_by_game(plays: &[NormalizedPlay]) -> HashMap<&str, Vec<&NormalizedPlay>> {
    let mut grouped: HashMap<&str, Vec<&NormalizedPlay>> = HashMap::new();
    for play in plays {
        grouped.entry(play.game.as_str()).or_default().push(play);
    }
    grouped
}

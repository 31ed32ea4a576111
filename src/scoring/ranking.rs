use super::types::Score;
use crate::domain::{DocumentId, PlayerScore};

/// Rank a play's scores.
///
/// Highest score first regardless of the game's win direction. The sort is
/// stable, so tied scores keep their input order and still get distinct
/// consecutive ranks.
pub fn rank_players(scores: Vec<(DocumentId, Score)>) -> Vec<PlayerScore> {
    let mut sorted = scores;
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let total = sorted.len() as u32;
    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, (player, score))| {
            let rank = idx as u32 + 1;
            PlayerScore {
                player,
                score,
                rank,
                players_beaten: total - rank,
            }
        })
        .collect()
}

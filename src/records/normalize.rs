use super::score::coerce_score;
use super::timestamp::parse_play_date;
use crate::domain::{NormalizedPlay, PlayLine};
use crate::errors::SkipReason;
use crate::scoring::rank_players;

/// Turn a resolved play line into the stored play shape.
///
/// Scores never reject a play; an empty player list or an unparseable date
/// does.
pub fn normalize_play(line: &PlayLine) -> Result<NormalizedPlay, SkipReason> {
    if line.players.is_empty() {
        return Err(SkipReason::NoPlayers);
    }

    let date_time = parse_play_date(&line.date_time)
        .ok_or_else(|| SkipReason::InvalidTimestamp(line.date_time.clone()))?;

    let scores = line
        .players
        .iter()
        .map(|p| (p.player.clone(), coerce_score(&p.score)))
        .collect();

    Ok(NormalizedPlay {
        date_time,
        game: line.game.clone(),
        players: rank_players(scores),
    })
}

use std::fmt;

use crate::domain::DocumentId;

pub type Score = i64;

/// Which end of the score range wins a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinDirection {
    HigherWins,
    LowerWins,
}

impl WinDirection {
    pub fn from_hi_score_wins(hi_score_wins: bool) -> Self {
        if hi_score_wins {
            WinDirection::HigherWins
        } else {
            WinDirection::LowerWins
        }
    }

    /// Strict improvement; equal scores never beat each other
    pub fn improves_on(&self, candidate: Score, incumbent: Score) -> bool {
        match self {
            WinDirection::HigherWins => candidate > incumbent,
            WinDirection::LowerWins => candidate < incumbent,
        }
    }

    pub fn comparison_symbol(&self) -> &str {
        match self {
            WinDirection::HigherWins => ">",
            WinDirection::LowerWins => "<",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            WinDirection::HigherWins => "High Score Wins",
            WinDirection::LowerWins => "Low Score Wins",
        }
    }
}

/// The extremal score of a game and who holds it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreHolder {
    pub player_id: DocumentId,
    pub score: Score,
}

/// A best-score record in its stored `"name:score"` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestScore {
    pub player_name: String,
    pub score: Score,
}

impl fmt::Display for BestScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.player_name, self.score)
    }
}

/// What a game's stored best-score field turned out to contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredBestScore {
    Absent,
    Malformed(String),
    Recorded(BestScore),
}

pub const NO_BEST_SCORE: &str = "N/A";

impl StoredBestScore {
    pub fn parse(stored: Option<&str>) -> Self {
        let raw = match stored.map(str::trim) {
            None => return StoredBestScore::Absent,
            Some(raw) if raw.is_empty() || raw == NO_BEST_SCORE => {
                return StoredBestScore::Absent;
            }
            Some(raw) => raw,
        };

        match raw.split_once(':') {
            Some((name, score)) => match score.trim().parse::<Score>() {
                Ok(score) => StoredBestScore::Recorded(BestScore {
                    player_name: name.to_string(),
                    score,
                }),
                Err(_) => StoredBestScore::Malformed(raw.to_string()),
            },
            None => StoredBestScore::Malformed(raw.to_string()),
        }
    }
}

/// Why a best-score record should be replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateReason {
    NoCurrentBest,
    InvalidCurrentFormat,
    Improves {
        historical: Score,
        current: Score,
        direction: WinDirection,
    },
}

impl fmt::Display for UpdateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateReason::NoCurrentBest => write!(f, "No current best score"),
            UpdateReason::InvalidCurrentFormat => write!(f, "Invalid current best score format"),
            UpdateReason::Improves {
                historical,
                current,
                direction,
            } => write!(
                f,
                "Historical score {} {} current {}",
                historical,
                direction.comparison_symbol(),
                current
            ),
        }
    }
}

/// A proposed change to one game's best score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDirective {
    pub game_id: DocumentId,
    pub game_name: String,
    pub previous: Option<String>,
    pub new_value: BestScore,
    pub direction: WinDirection,
    pub reason: UpdateReason,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::records::timestamp::iso_instant;
use crate::scoring::WinDirection;

/// Identifier assigned to a document by the destination store
pub type DocumentId = String;

// --- Source Export Structures ---

/// Raw export document as written by the board-game stats app
#[derive(Debug, Clone, Deserialize)]
pub struct ExportDocument {
    pub games: Vec<ExportGame>,
    pub players: Vec<ExportPlayer>,
    pub plays: Vec<ExportPlay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportGame {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportPlayer {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportPlay {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "playDate")]
    pub play_date: String,
    #[serde(rename = "gameRefId")]
    pub game_ref_id: i64,
    #[serde(rename = "playerScores", default)]
    pub player_scores: Vec<ExportPlayerScore>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportPlayerScore {
    #[serde(rename = "playerRefId")]
    pub player_ref_id: i64,
    #[serde(default)]
    pub score: Value,
}

// --- Line-Delimited Intermediate Structures ---

/// One play per line, with names (or, once resolved, store identifiers)
/// and scores exactly as they appeared in the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayLine {
    #[serde(rename = "dateTime", default)]
    pub date_time: String,
    #[serde(default)]
    pub game: String,
    #[serde(default)]
    pub players: Vec<PlayerLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerLine {
    #[serde(default)]
    pub player: String,
    #[serde(default)]
    pub score: Value,
}

/// A play ready for the destination store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPlay {
    #[serde(rename = "dateTime", with = "iso_instant")]
    pub date_time: DateTime<Utc>,
    pub game: DocumentId,
    pub players: Vec<PlayerScore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player: DocumentId,
    pub score: i64,
    pub rank: u32,
    pub players_beaten: u32,
}

/// Coarse weight classification of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Light,
    Medium,
    Heavy,
}

impl Tier {
    pub fn as_str(&self) -> &str {
        match self {
            Tier::Light => "light",
            Tier::Medium => "medium",
            Tier::Heavy => "heavy",
        }
    }
}

// --- Destination Store Documents ---

#[derive(Debug, Clone, PartialEq)]
pub struct GameDocument {
    pub id: DocumentId,
    pub name: String,
    pub tier: Option<String>,
    pub hi_score_wins: bool,
    pub best_score: Option<String>,
}

impl GameDocument {
    pub fn win_direction(&self) -> WinDirection {
        WinDirection::from_hi_score_wins(self.hi_score_wins)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDocument {
    pub id: DocumentId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayDocument {
    pub id: DocumentId,
    pub play: NormalizedPlay,
}

/// A game to seed into the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGame {
    pub name: String,
    pub tier: Tier,
    #[serde(default = "default_hi_score_wins")]
    pub hi_score_wins: bool,
}

fn default_hi_score_wins() -> bool {
    true
}

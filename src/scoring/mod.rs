pub mod best_score;
pub mod ranking;
pub mod types;

pub use best_score::{decide_update, extremal_score, plan_updates, summarize_history, GameHistory};
pub use ranking::rank_players;
pub use types::{BestScore, ScoreHolder, StoredBestScore, UpdateDirective, UpdateReason, WinDirection};

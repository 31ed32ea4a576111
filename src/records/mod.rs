pub mod export;
pub mod normalize;
pub mod score;
pub mod timestamp;

pub use export::{flatten_export, flatten_to_rows, ScoreRow};
pub use normalize::normalize_play;
pub use score::coerce_score;

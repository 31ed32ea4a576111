use thiserror::Error;

/// Why a single record was left out of a run.
///
/// Per-record problems never abort a run; they are logged, counted and the
/// run moves on to the next record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("malformed JSON on line {line}: {message}")]
    MalformedLine { line: usize, message: String },
    #[error("game '{0}' not found in destination store")]
    UnknownGame(String),
    #[error("player '{0}' not found in destination store")]
    UnknownPlayer(String),
    #[error("invalid play date '{0}'")]
    InvalidTimestamp(String),
    #[error("play has no player scores")]
    NoPlayers,
}

impl SkipReason {
    /// Malformed input counts as an error; unresolved or empty plays are skips.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            SkipReason::MalformedLine { .. } | SkipReason::InvalidTimestamp(_)
        )
    }
}

/// Add context to file read errors
pub fn read_context(path: &std::path::Path) -> String {
    format!("Failed to read {}", path.display())
}

/// Add context to file write errors
pub fn write_context(path: &std::path::Path) -> String {
    format!("Failed to write {}", path.display())
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

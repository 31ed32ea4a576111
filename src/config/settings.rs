use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Locations of the files each utility reads and writes
#[derive(Debug, Clone)]
pub struct PathSettings {
    pub export: PathBuf,
    pub plays: PathBuf,
    pub csv: PathBuf,
    pub resolved: PathBuf,
    pub normalized: PathBuf,
    pub missing_list: PathBuf,
    pub mappings: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            export: PathBuf::from("BGStatsExport.json"),
            plays: PathBuf::from("game_plays.jsonl"),
            csv: PathBuf::from("game_plays.csv"),
            resolved: PathBuf::from("game_plays_resolved.jsonl"),
            normalized: PathBuf::from("game_plays_normalized.jsonl"),
            missing_list: PathBuf::from("missing_games_list.txt"),
            mappings: None,
            catalog: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub path: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("playlog_store.db"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImportSettings {
    pub batch_size: usize,
    pub sample_size: usize,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            sample_size: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuggestSettings {
    pub min_similarity: f64,
    pub max_suggestions: usize,
}

impl Default for SuggestSettings {
    fn default() -> Self {
        Self {
            min_similarity: 0.80,
            max_suggestions: 3,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub paths: PathSettings,
    pub store: StoreSettings,
    pub import: ImportSettings,
    pub suggest: SuggestSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `PLAYLOG_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::new();
        let path = |key: &str, target: &mut PathBuf| {
            if let Some(value) = lookup(key) {
                *target = PathBuf::from(value);
            }
        };

        path("PLAYLOG_STORE", &mut config.store.path);
        path("PLAYLOG_EXPORT", &mut config.paths.export);
        path("PLAYLOG_PLAYS", &mut config.paths.plays);
        path("PLAYLOG_CSV", &mut config.paths.csv);
        path("PLAYLOG_RESOLVED", &mut config.paths.resolved);
        path("PLAYLOG_NORMALIZED", &mut config.paths.normalized);
        path("PLAYLOG_MISSING_LIST", &mut config.paths.missing_list);
        config.paths.mappings = lookup("PLAYLOG_MAPPINGS").map(PathBuf::from);
        config.paths.catalog = lookup("PLAYLOG_CATALOG").map(PathBuf::from);

        if let Some(raw) = lookup("PLAYLOG_BATCH_SIZE") {
            config.import.batch_size = parse_batch_size(&raw)?;
        }

        Ok(config)
    }
}

fn parse_batch_size(raw: &str) -> Result<usize> {
    let size: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("PLAYLOG_BATCH_SIZE must be a positive integer, got '{}'", raw))?;
    if size == 0 {
        anyhow::bail!("PLAYLOG_BATCH_SIZE must be at least 1");
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.import.batch_size, 50);
        assert_eq!(config.store.path, PathBuf::from("playlog_store.db"));
        assert!(config.paths.mappings.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PLAYLOG_STORE", "/tmp/other.db"),
            ("PLAYLOG_BATCH_SIZE", " 20 "),
            ("PLAYLOG_MAPPINGS", "aliases.json"),
        ]))
        .unwrap();

        assert_eq!(config.store.path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.import.batch_size, 20);
        assert_eq!(config.paths.mappings, Some(PathBuf::from("aliases.json")));
    }

    #[test]
    fn test_invalid_batch_size_is_a_config_error() {
        assert!(AppConfig::from_lookup(lookup_from(&[("PLAYLOG_BATCH_SIZE", "lots")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("PLAYLOG_BATCH_SIZE", "0")])).is_err());
    }
}
